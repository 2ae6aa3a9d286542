use super::{Training, MIN_IN_H};
use crate::error::RecordError;
use crate::types::workout::{ActivityKind, BaseReadings};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: BaseReadings,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, RecordError> {
        let base = BaseReadings::new(action, duration_hours, weight_kg)?;
        if height_cm == 0.0 {
            return Err(RecordError::ZeroDivisor("height_cm"));
        }

        Ok(Self { base, height_cm })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn base(&self) -> &BaseReadings {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MSEC;
        let height_m = self.height_cm / CM_IN_M;

        (CALORIES_WEIGHT_MULTIPLIER * self.base.weight_kg
            + (speed_ms.powi(2) / height_m) * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.base.weight_kg)
            * (self.base.duration_hours * MIN_IN_H)
    }
}
