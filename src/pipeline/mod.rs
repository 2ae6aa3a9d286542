pub mod dispatch;
pub mod report;
pub mod training;
