//! Measurement and classification engine
//!
//! Unit conversion, metric calculation, and risk classification. Every
//! function in this module is pure and stateless; the only error it raises
//! is [`InvalidMeasurement`].

pub mod classify;
pub mod error;
pub mod metrics;
pub mod units;

pub use classify::{classify_bmi, classify_vfa, BmiCategory, VfaCategory};
pub use error::{EngineResult, InvalidMeasurement};
pub use metrics::{compute_bmi, compute_vfa, Gender, VfaCoefficients};
pub use units::{feet_inches_to_m, inches_to_cm, lbs_to_kg};
