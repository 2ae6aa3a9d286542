use super::{Training, MIN_IN_H, M_IN_KM};
use crate::error::RecordError;
use crate::types::workout::{ActivityKind, BaseReadings};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: BaseReadings,
}

impl Running {
    pub fn new(action: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, RecordError> {
        Ok(Self {
            base: BaseReadings::new(action, duration_hours, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn base(&self) -> &BaseReadings {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg
            / M_IN_KM
            * self.base.duration_hours
            * MIN_IN_H
    }
}
