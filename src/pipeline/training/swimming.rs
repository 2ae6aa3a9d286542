use super::{Training, M_IN_KM};
use crate::error::RecordError;
use crate::types::workout::{ActivityKind, BaseReadings};

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: BaseReadings,
    pool_length_m: f64,
    pool_count: u64,
}

impl Swimming {
    pub fn new(
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: u64,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            base: BaseReadings::new(action, duration_hours, weight_kg)?,
            pool_length_m,
            pool_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_count(&self) -> u64 {
        self.pool_count
    }
}

impl Training for Swimming {
    const STEP_LENGTH_M: f64 = 1.38;

    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn base(&self) -> &BaseReadings {
        &self.base
    }

    // Speed comes from pool laps, not from stroke distance.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_count as f64 / M_IN_KM / self.base.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg
            * self.base.duration_hours
    }
}
