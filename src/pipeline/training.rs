use crate::error::CalcError;
use crate::types::summary::TrainingSummary;
use crate::types::workout::{RunningParams, SwimmingParams, WalkingParams, WorkoutKind};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
/// Meters covered per step.
pub const LEN_STEP: f64 = 0.65;
/// Meters covered per swimming stroke.
pub const SWIM_LEN_STEP: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;
const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_MULTIPLIER: f64 = 0.029;
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Derived metrics of one workout session.
///
/// `distance`, `mean_speed` and `summary` have shared implementations;
/// every concrete workout provides its own `spent_calories`.
pub trait Training {
    fn training_type(&self) -> &'static str;
    fn action(&self) -> u64;
    /// Hours.
    fn duration(&self) -> f64;
    /// Kilograms.
    fn weight(&self) -> f64;

    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Kilometers traveled.
    fn distance(&self) -> f64 {
        self.action() as f64 * self.step_length() / M_IN_KM
    }

    /// Kilometers per hour.
    fn mean_speed(&self) -> Result<f64, CalcError> {
        checked_div(self.distance(), self.duration(), "duration", "mean_speed")
    }

    fn spent_calories(&self) -> Result<f64, CalcError> {
        Err(CalcError::Unimplemented {
            training_type: self.training_type(),
        })
    }

    fn summary(&self) -> Result<TrainingSummary, CalcError> {
        Ok(TrainingSummary::new(
            self.training_type(),
            self.duration(),
            self.distance(),
            self.mean_speed()?,
            self.spent_calories()?,
        ))
    }
}

/// Division that fails on a zero `divisor` or a non-finite `result`.
pub(crate) fn checked_div(
    numerator: f64,
    denominator: f64,
    divisor: &'static str,
    result: &'static str,
) -> Result<f64, CalcError> {
    if denominator == 0.0 {
        return Err(CalcError::DivisionByZero { what: divisor });
    }
    ensure_finite(numerator / denominator, result)
}

/// Floor division derived from the remainder rather than the rounded quotient:
/// `1.0` over `0.1` floors to `9.0`, while `(1.0 / 0.1).floor()` is `10.0`.
pub(crate) fn floor_div(
    numerator: f64,
    denominator: f64,
    divisor: &'static str,
    result: &'static str,
) -> Result<f64, CalcError> {
    if denominator == 0.0 {
        return Err(CalcError::DivisionByZero { what: divisor });
    }
    let rem = numerator % denominator;
    let mut div = (numerator - rem) / denominator;
    if rem != 0.0 && (denominator < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    let quotient = if div != 0.0 {
        let floored = div.floor();
        if div - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        0.0_f64.copysign(numerator / denominator)
    };
    ensure_finite(quotient, result)
}

pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite { what, value })
    }
}

/// Workout without a calorie model of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseTraining {
    action: u64,
    duration: f64,
    weight: f64,
}

impl BaseTraining {
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for BaseTraining {
    fn training_type(&self) -> &'static str {
        "Training"
    }

    fn action(&self) -> u64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    params: RunningParams,
}

impl Running {
    pub fn new(params: RunningParams) -> Self {
        Self { params }
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        WorkoutKind::Running.label()
    }

    fn action(&self) -> u64 {
        self.params.action
    }

    fn duration(&self) -> f64 {
        self.params.duration
    }

    fn weight(&self) -> f64 {
        self.params.weight
    }

    fn spent_calories(&self) -> Result<f64, CalcError> {
        let mean_speed = self.mean_speed()?;
        let calories = (RUN_SPEED_MULTIPLIER * mean_speed - RUN_SPEED_SHIFT) * self.params.weight
            / M_IN_KM
            * self.params.duration
            * MIN_IN_H;
        ensure_finite(calories, "spent_calories")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    params: WalkingParams,
}

impl SportsWalking {
    pub fn new(params: WalkingParams) -> Self {
        Self { params }
    }

    pub fn height(&self) -> f64 {
        self.params.height
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        WorkoutKind::SportsWalking.label()
    }

    fn action(&self) -> u64 {
        self.params.action
    }

    fn duration(&self) -> f64 {
        self.params.duration
    }

    fn weight(&self) -> f64 {
        self.params.weight
    }

    // The speed term is floor-divided by weight, so it only contributes once
    // speed squared reaches the athlete's weight.
    fn spent_calories(&self) -> Result<f64, CalcError> {
        let mean_speed = self.mean_speed()?;
        let weight = self.params.weight;
        let speed_term = floor_div(mean_speed.powi(2), weight, "weight", "spent_calories")?;
        let calories = (WALK_WEIGHT_MULTIPLIER * weight
            + speed_term * WALK_SPEED_MULTIPLIER * weight)
            * self.params.duration
            * MIN_IN_H;
        ensure_finite(calories, "spent_calories")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    params: SwimmingParams,
}

impl Swimming {
    pub fn new(params: SwimmingParams) -> Self {
        Self { params }
    }

    pub fn length_pool(&self) -> f64 {
        self.params.length_pool
    }

    pub fn count_pool(&self) -> u64 {
        self.params.count_pool
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        WorkoutKind::Swimming.label()
    }

    fn action(&self) -> u64 {
        self.params.action
    }

    fn duration(&self) -> f64 {
        self.params.duration
    }

    fn weight(&self) -> f64 {
        self.params.weight
    }

    fn step_length(&self) -> f64 {
        SWIM_LEN_STEP
    }

    /// Pool lengths swum, not strokes, drive the speed.
    fn mean_speed(&self) -> Result<f64, CalcError> {
        let pool_km = self.params.length_pool * self.params.count_pool as f64 / M_IN_KM;
        checked_div(pool_km, self.params.duration, "duration", "mean_speed")
    }

    fn spent_calories(&self) -> Result<f64, CalcError> {
        let mean_speed = self.mean_speed()?;
        let calories = (mean_speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.params.weight;
        ensure_finite(calories, "spent_calories")
    }
}
