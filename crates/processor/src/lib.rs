//! Alert Processing Pipeline
//!
//! Orchestrates validation, severity classification, and persistence with
//! bounded retry for one alert reading at a time.

mod pipeline;

pub use pipeline::{AlertProcessor, ProcessError, ProcessorConfig};
