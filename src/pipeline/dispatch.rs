use crate::error::{DispatchError, RecordError};
use crate::pipeline::training::{Running, SportsWalking, Swimming, Workout};
use crate::types::workout::{ActivityKind, Package};

pub fn read(package: &Package) -> Result<Workout, DispatchError> {
    read_package(&package.code, &package.readings)
}

/// Builds the workout named by `code`, assigning `readings` positionally:
/// common readings first, then the activity's own.
pub fn read_package(code: &str, readings: &[f64]) -> Result<Workout, DispatchError> {
    let kind = ActivityKind::from_code(code)
        .ok_or_else(|| DispatchError::UnknownActivityType(code.to_string()))?;

    if readings.len() != kind.arity() {
        return Err(DispatchError::ArityMismatch {
            kind,
            expected: kind.arity(),
            got: readings.len(),
        });
    }

    let action = count("action", readings[0])?;
    let duration_hours = readings[1];
    let weight_kg = readings[2];

    let workout = match kind {
        ActivityKind::Running => Running::new(action, duration_hours, weight_kg)?.into(),
        ActivityKind::SportsWalking => {
            SportsWalking::new(action, duration_hours, weight_kg, readings[3])?.into()
        }
        ActivityKind::Swimming => Swimming::new(
            action,
            duration_hours,
            weight_kg,
            readings[3],
            count("pool_count", readings[4])?,
        )?
        .into(),
    };

    tracing::debug!(code, kind = %kind, "Package dispatched");
    Ok(workout)
}

fn count(field: &'static str, value: f64) -> Result<u64, RecordError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(RecordError::InvalidCount { field, value });
    }
    Ok(value as u64)
}
