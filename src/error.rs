use crate::types::workout::ActivityKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("{0} must be nonzero")]
    ZeroDivisor(&'static str),
    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown activity type: {0}")]
    UnknownActivityType(String),
    #[error("{kind} expects {expected} readings, got {got}")]
    ArityMismatch {
        kind: ActivityKind,
        expected: usize,
        got: usize,
    },
    #[error(transparent)]
    Record(#[from] RecordError),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} workout(s) could not be processed")]
    Failed(usize),
}
