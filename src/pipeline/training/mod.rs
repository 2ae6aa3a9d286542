mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::types::summary::Summary;
use crate::types::workout::{ActivityKind, BaseReadings};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Per-activity statistics. Implementors supply their own calorie formula;
/// distance and speed fall back to the step-based defaults.
pub trait Training {
    /// Distance covered by one step or stroke, in metres.
    const STEP_LENGTH_M: f64 = 0.65;

    fn kind(&self) -> ActivityKind;

    fn base(&self) -> &BaseReadings;

    fn distance_km(&self) -> f64 {
        self.base().action as f64 * Self::STEP_LENGTH_M / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_hours
    }

    fn spent_calories(&self) -> f64;

    fn summary(&self) -> Summary {
        Summary {
            kind: self.kind(),
            duration_hours: self.base().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// A dispatched record. There is no "generic" training; every workout is one
/// of the concrete activities.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Workout::Running(w) => w.kind(),
            Workout::SportsWalking(w) => w.kind(),
            Workout::Swimming(w) => w.kind(),
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn spent_calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    pub fn summary(&self) -> Summary {
        match self {
            Workout::Running(w) => w.summary(),
            Workout::SportsWalking(w) => w.summary(),
            Workout::Swimming(w) => w.summary(),
        }
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}
