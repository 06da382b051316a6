use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::SportsWalking),
            "SWM" => Some(WorkoutKind::Swimming),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label shown as the training type in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values the factory expects for this kind.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

/// Raw measurements shared by every workout: step or stroke count,
/// duration in hours, weight in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningParams {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkingParams {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
    /// Centimeters. Carried with the record, not used by any formula.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwimmingParams {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
    /// Meters per pool length.
    pub length_pool: f64,
    pub count_pool: u64,
}

/// One workout as submitted by a caller: activity code plus positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkoutPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}
