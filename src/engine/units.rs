//! Imperial to metric unit conversions
//!
//! Provides the conversion constants and functions mapping the raw imperial
//! inputs (pounds, feet + inches, inches) to the metric values the BMI and
//! visceral fat formulas are defined over.

use super::error::{EngineResult, InvalidMeasurement};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Meters per inch
pub const M_PER_IN: f64 = 0.0254;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;
/// Inches per foot
pub const IN_PER_FT: f64 = 12.0;

// ============================================================================
// Conversions
// ============================================================================

/// Convert a body weight in pounds to kilograms
pub fn lbs_to_kg(weight_lbs: f64) -> EngineResult<f64> {
    if !(weight_lbs > 0.0) {
        return Err(InvalidMeasurement::new(
            "weight_lbs",
            "must be greater than 0",
        ));
    }
    Ok(weight_lbs * KG_PER_LB)
}

/// Convert a height given as whole feet plus remaining inches to meters
///
/// The inches component must be in `[0, 12)`; a full foot belongs in the
/// feet component. A height of 0 ft 0 in is rejected, not converted.
pub fn feet_inches_to_m(height_ft: u32, height_in: f64) -> EngineResult<f64> {
    if !(0.0..12.0).contains(&height_in) {
        return Err(InvalidMeasurement::new(
            "height_in",
            "must be in [0, 12)",
        ));
    }
    let total_inches = f64::from(height_ft) * IN_PER_FT + height_in;
    if total_inches <= 0.0 {
        return Err(InvalidMeasurement::new(
            "height_ft",
            "total height must be greater than 0",
        ));
    }
    Ok(total_inches * M_PER_IN)
}

/// Convert a circumference in inches to centimeters
///
/// `field` names the input being converted (e.g. "waist_in") so a validation
/// failure points at the right field.
pub fn inches_to_cm(inches: f64, field: &'static str) -> EngineResult<f64> {
    if !(inches > 0.0) {
        return Err(InvalidMeasurement::new(field, "must be greater than 0"));
    }
    Ok(inches * CM_PER_IN)
}
