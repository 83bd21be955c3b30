pub mod constants;
pub mod schedule;
pub mod tracing;
