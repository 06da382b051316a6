use rayon::prelude::*;

use crate::error::CalcError;
use crate::pipeline::package::read_package;
use crate::pipeline::training::Training;
use crate::types::summary::TrainingSummary;
use crate::types::workout::WorkoutPackage;

pub fn summarize(package: &WorkoutPackage) -> Result<TrainingSummary, CalcError> {
    read_package(&package.workout_type, &package.data)?.summary()
}

/// Summarizes every package independently. Results keep the input order.
pub fn summarize_all(packages: &[WorkoutPackage]) -> Vec<Result<TrainingSummary, CalcError>> {
    packages.par_iter().map(summarize).collect()
}
