use crate::error::CalcError;
use crate::pipeline::training::{Running, SportsWalking, Swimming, Training};
use crate::types::workout::{RunningParams, SwimmingParams, WalkingParams, WorkoutKind};

pub type BoxedTraining = Box<dyn Training + Send + Sync>;

/// Builds the training for an activity code from its positional values.
///
/// Value order follows the constructor of each workout:
/// `RUN [action, duration, weight]`, `WLK [action, duration, weight, height]`,
/// `SWM [action, duration, weight, length_pool, count_pool]`.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<BoxedTraining, CalcError> {
    let kind = WorkoutKind::from_code(workout_type)
        .ok_or_else(|| CalcError::UnknownActivityCode(workout_type.to_string()))?;

    let training: BoxedTraining = match kind {
        WorkoutKind::Running => Box::new(Running::new(running_params(data)?)),
        WorkoutKind::SportsWalking => Box::new(SportsWalking::new(walking_params(data)?)),
        WorkoutKind::Swimming => Box::new(Swimming::new(swimming_params(data)?)),
    };
    Ok(training)
}

fn running_params(data: &[f64]) -> Result<RunningParams, CalcError> {
    let [action, duration, weight] = fields(WorkoutKind::Running, data)?;
    Ok(RunningParams {
        action: whole(action, "action")?,
        duration: finite(duration, "duration")?,
        weight: finite(weight, "weight")?,
    })
}

fn walking_params(data: &[f64]) -> Result<WalkingParams, CalcError> {
    let [action, duration, weight, height] = fields(WorkoutKind::SportsWalking, data)?;
    Ok(WalkingParams {
        action: whole(action, "action")?,
        duration: finite(duration, "duration")?,
        weight: finite(weight, "weight")?,
        height: finite(height, "height")?,
    })
}

fn swimming_params(data: &[f64]) -> Result<SwimmingParams, CalcError> {
    let [action, duration, weight, length_pool, count_pool] =
        fields(WorkoutKind::Swimming, data)?;
    Ok(SwimmingParams {
        action: whole(action, "action")?,
        duration: finite(duration, "duration")?,
        weight: finite(weight, "weight")?,
        length_pool: finite(length_pool, "length_pool")?,
        count_pool: whole(count_pool, "count_pool")?,
    })
}

/// The only arity check: `N` is the constructor arity of `kind`.
fn fields<const N: usize>(kind: WorkoutKind, data: &[f64]) -> Result<[f64; N], CalcError> {
    <[f64; N]>::try_from(data).map_err(|_| CalcError::ArityMismatch {
        code: kind.code(),
        expected: kind.arity(),
        got: data.len(),
    })
}

fn finite(value: f64, field: &'static str) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidValue { field, value })
    }
}

/// Counts (steps, strokes, pool lengths) must be non-negative whole numbers.
fn whole(value: f64, field: &'static str) -> Result<u64, CalcError> {
    let value = finite(value, field)?;
    if value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(CalcError::InvalidValue { field, value });
    }
    Ok(value as u64)
}
