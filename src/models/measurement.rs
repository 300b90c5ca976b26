//! Measurement record
//!
//! The single data structure threaded through the engine: raw imperial
//! inputs in, converted metrics and classified results out. A record is
//! built in one shot by [`MeasurementRecord::compute`]; a validation failure
//! anywhere in the pipeline aborts with no partial record.

use serde::{Deserialize, Serialize};

use crate::engine::{
    classify_bmi, classify_vfa, compute_bmi, compute_vfa, feet_inches_to_m, inches_to_cm,
    lbs_to_kg, BmiCategory, EngineResult, Gender, InvalidMeasurement, VfaCategory,
};

/// Raw inputs for one measurement, in imperial units
///
/// `Default` supplies the reference example individual, matching the
/// documented CLI defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// User name (one word)
    pub name: String,
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Body weight in pounds
    pub weight_lbs: f64,
    /// Whole feet component of height
    pub height_ft: u32,
    /// Remaining inches of height, in [0, 12)
    pub height_in: f64,
    /// Waist circumference in inches
    pub waist_in: f64,
    /// Proximal thigh circumference in inches
    pub thigh_in: f64,
}

impl Default for MeasurementInput {
    fn default() -> Self {
        Self {
            name: "Tony".to_string(),
            gender: Gender::Male,
            age: 42,
            weight_lbs: 190.0,
            height_ft: 6,
            height_in: 1.0,
            waist_in: 36.0,
            thigh_in: 24.5,
        }
    }
}

impl MeasurementInput {
    /// Validate every raw field, failing on the first bad one
    pub fn validate(&self) -> EngineResult<()> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(InvalidMeasurement::new("name", "must not be empty"));
        }
        if trimmed.contains(char::is_whitespace) {
            return Err(InvalidMeasurement::new("name", "must be one word"));
        }
        if self.age == 0 {
            return Err(InvalidMeasurement::new("age", "must be greater than 0"));
        }
        if !(self.weight_lbs > 0.0) {
            return Err(InvalidMeasurement::new(
                "weight_lbs",
                "must be greater than 0",
            ));
        }
        if !(0.0..12.0).contains(&self.height_in) {
            return Err(InvalidMeasurement::new("height_in", "must be in [0, 12)"));
        }
        if self.height_ft == 0 && self.height_in <= 0.0 {
            return Err(InvalidMeasurement::new(
                "height_ft",
                "total height must be greater than 0",
            ));
        }
        if !(self.waist_in > 0.0) {
            return Err(InvalidMeasurement::new(
                "waist_in",
                "must be greater than 0",
            ));
        }
        if !(self.thigh_in > 0.0) {
            return Err(InvalidMeasurement::new(
                "thigh_in",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// A fully computed and classified measurement
///
/// Metric and computed fields hold full precision; the `*_display` methods
/// round to two decimals for rendering. Classification always runs on the
/// unrounded values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementRecord {
    // Identity and raw imperial inputs
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub weight_lbs: f64,
    pub height_ft: u32,
    pub height_in: f64,
    pub waist_in: f64,
    pub thigh_in: f64,

    // Derived metric values
    pub weight_kg: f64,
    pub height_m: f64,
    pub waist_cm: f64,
    pub thigh_cm: f64,

    // Computed results
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub vfa: f64,
    pub vfa_category: VfaCategory,
}

impl MeasurementRecord {
    /// Run the full convert, compute, classify pipeline over validated input
    ///
    /// Fails fast: the first `InvalidMeasurement` aborts and no record is
    /// produced.
    pub fn compute(input: &MeasurementInput) -> EngineResult<Self> {
        input.validate()?;

        let weight_kg = lbs_to_kg(input.weight_lbs)?;
        let height_m = feet_inches_to_m(input.height_ft, input.height_in)?;
        let waist_cm = inches_to_cm(input.waist_in, "waist_in")?;
        let thigh_cm = inches_to_cm(input.thigh_in, "thigh_in")?;

        let bmi = compute_bmi(weight_kg, height_m)?;
        let vfa = compute_vfa(waist_cm, thigh_cm, input.age, bmi, input.gender);

        let record = Self {
            name: input.name.trim().to_string(),
            gender: input.gender,
            age: input.age,
            weight_lbs: input.weight_lbs,
            height_ft: input.height_ft,
            height_in: input.height_in,
            waist_in: input.waist_in,
            thigh_in: input.thigh_in,
            weight_kg,
            height_m,
            waist_cm,
            thigh_cm,
            bmi,
            bmi_category: classify_bmi(bmi),
            vfa,
            vfa_category: classify_vfa(vfa),
        };

        tracing::debug!(
            name = %record.name,
            bmi = record.bmi,
            vfa = record.vfa,
            "computed measurement record"
        );

        Ok(record)
    }

    /// BMI rounded to two decimals for display
    pub fn bmi_display(&self) -> f64 {
        round2(self.bmi)
    }

    /// VFA rounded to two decimals for display
    pub fn vfa_display(&self) -> f64 {
        round2(self.vfa)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_is_reference_male() {
        let input = MeasurementInput::default();
        assert_eq!(input.name, "Tony");
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.age, 42);
        assert_eq!(input.weight_lbs, 190.0);
        assert_eq!(input.height_ft, 6);
        assert_eq!(input.height_in, 1.0);
    }

    #[test]
    fn test_end_to_end_male_reference() {
        let record = MeasurementRecord::compute(&MeasurementInput::default()).unwrap();
        assert!((record.bmi_display() - 25.07).abs() < 1e-9);
        assert_eq!(record.bmi_category, BmiCategory::Overweight);
        assert!((record.vfa_display() - 110.54).abs() < 1e-9);
        assert_eq!(record.vfa_category, VfaCategory::Presence);
        assert!((record.weight_kg - 86.18248).abs() < 1e-9);
        assert!((record.waist_cm - 91.44).abs() < 1e-9);
    }

    #[test]
    fn test_end_to_end_female_reference() {
        let input = MeasurementInput {
            name: "Mary".to_string(),
            gender: Gender::Female,
            age: 42,
            weight_lbs: 120.0,
            height_ft: 5,
            height_in: 5.0,
            waist_in: 36.0,
            thigh_in: 24.5,
        };
        let record = MeasurementRecord::compute(&input).unwrap();
        assert!((record.bmi_display() - 19.97).abs() < 1e-9);
        assert_eq!(record.bmi_category, BmiCategory::Normal);
        assert!((record.vfa_display() - 63.51).abs() < 1e-9);
        assert_eq!(record.vfa_category, VfaCategory::Absence);
    }

    #[test]
    fn test_zero_height_fails_fast() {
        let input = MeasurementInput {
            height_ft: 0,
            height_in: 0.0,
            ..MeasurementInput::default()
        };
        let err = MeasurementRecord::compute(&input).unwrap_err();
        assert_eq!(err.field, "height_ft");
    }

    #[test]
    fn test_invalid_waist_fails_fast() {
        let input = MeasurementInput {
            waist_in: -1.0,
            ..MeasurementInput::default()
        };
        let err = MeasurementRecord::compute(&input).unwrap_err();
        assert_eq!(err.field, "waist_in");
    }

    #[test]
    fn test_multi_word_name_rejected() {
        let input = MeasurementInput {
            name: "Tony Stark".to_string(),
            ..MeasurementInput::default()
        };
        let err = MeasurementRecord::compute(&input).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_zero_age_rejected() {
        let input = MeasurementInput {
            age: 0,
            ..MeasurementInput::default()
        };
        assert_eq!(
            MeasurementRecord::compute(&input).unwrap_err().field,
            "age"
        );
    }

    #[test]
    fn test_categories_match_unrounded_values() {
        let record = MeasurementRecord::compute(&MeasurementInput::default()).unwrap();
        assert_eq!(record.bmi_category, crate::engine::classify_bmi(record.bmi));
        assert_eq!(record.vfa_category, crate::engine::classify_vfa(record.vfa));
    }
}
