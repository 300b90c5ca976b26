//! Data models
//!
//! The measurement record flowing through the engine and its persisted form.

mod measurement;
mod stored_measurement;

pub use measurement::{MeasurementInput, MeasurementRecord};
pub use stored_measurement::StoredMeasurement;
