pub mod config;
pub mod error;
pub mod litigation;
pub mod telemetry;
