use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::SportsWalking,
        ActivityKind::Swimming,
    ];

    /// Resolves a sensor type code. Codes are matched exactly.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(ActivityKind::Running),
            "WLK" => Some(ActivityKind::SportsWalking),
            "SWM" => Some(ActivityKind::Swimming),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Number of readings a package of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw sensor package: a type code plus positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub code: String,
    pub readings: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, readings: &[f64]) -> Self {
        Self {
            code: code.into(),
            readings: readings.to_vec(),
        }
    }
}

/// Readings shared by every activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseReadings {
    /// Steps or strokes.
    pub action: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl BaseReadings {
    pub fn new(action: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, RecordError> {
        if duration_hours == 0.0 {
            return Err(RecordError::ZeroDivisor("duration_hours"));
        }

        Ok(Self {
            action,
            duration_hours,
            weight_kg,
        })
    }
}
