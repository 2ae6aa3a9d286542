use crate::error::DispatchError;
use crate::pipeline::dispatch;
use crate::pipeline::training::Workout;
use crate::types::summary::Summary;
use crate::types::workout::Package;

pub fn summarize(workout: &Workout) -> Summary {
    workout.summary()
}

/// Runs every package through dispatch and summary, one result per package
/// in input order. A failed package does not affect the others.
pub fn process(packages: &[Package]) -> Vec<Result<Summary, DispatchError>> {
    packages
        .iter()
        .map(|package| dispatch::read(package).map(|workout| summarize(&workout)))
        .collect()
}
