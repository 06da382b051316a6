use crate::types::workout::{WorkoutKind, WorkoutPackage};

const SAMPLES: [(WorkoutKind, &[f64]); 3] = [
    (WorkoutKind::Swimming, &[720.0, 1.0, 80.0, 25.0, 40.0]),
    (WorkoutKind::Running, &[15000.0, 1.0, 75.0]),
    (WorkoutKind::SportsWalking, &[9000.0, 1.0, 75.0, 180.0]),
];

/// Fixed demo dataset: one workout of each kind.
pub fn sample_packages() -> Vec<WorkoutPackage> {
    SAMPLES
        .iter()
        .map(|(kind, data)| WorkoutPackage {
            workout_type: kind.code().to_string(),
            data: data.to_vec(),
        })
        .collect()
}
