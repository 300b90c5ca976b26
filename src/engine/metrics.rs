//! BMI and visceral fat area calculations
//!
//! Pure functions over fully-converted metric values. The visceral fat area
//! (VFA) estimate reproduces the published regression over waist
//! circumference, thigh circumference, age, and (for women) BMI; the
//! coefficients are domain constants, not tunable parameters.

use serde::{Deserialize, Serialize};

use super::error::{EngineResult, InvalidMeasurement};

/// Gender, which selects the VFA coefficient table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    /// The regression coefficients for this gender
    pub fn vfa_coefficients(&self) -> &'static VfaCoefficients {
        match self {
            Gender::Male => &MALE_VFA,
            Gender::Female => &FEMALE_VFA,
        }
    }
}

/// Coefficient set for one gender's VFA regression
///
/// VFA = waist*waist_cm + thigh*thigh_cm + age*years + bmi*kg_per_m2 + intercept
#[derive(Debug, Clone, Copy)]
pub struct VfaCoefficients {
    pub waist: f64,
    pub thigh: f64,
    pub age: f64,
    pub bmi: f64,
    pub intercept: f64,
}

/// Men: 6 * waist C - 4.41 * proximal thigh C + 1.19 * age - 213.65
pub const MALE_VFA: VfaCoefficients = VfaCoefficients {
    waist: 6.0,
    thigh: -4.41,
    age: 1.19,
    bmi: 0.0,
    intercept: -213.65,
};

/// Women: 2.15 * waist C - 3.63 * proximal thigh C + 1.46 * age + 6.22 * BMI - 92.713
pub const FEMALE_VFA: VfaCoefficients = VfaCoefficients {
    waist: 2.15,
    thigh: -3.63,
    age: 1.46,
    bmi: 6.22,
    intercept: -92.713,
};

/// Compute Body Mass Index in kg/m^2
///
/// Full precision is returned; callers round to two decimals for display
/// only, never before classification.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> EngineResult<f64> {
    if !(height_m > 0.0) {
        return Err(InvalidMeasurement::new(
            "height_m",
            "must be greater than 0",
        ));
    }
    Ok(weight_kg / (height_m * height_m))
}

/// Compute estimated visceral fat area in cm^2
///
/// Waist and thigh measurements are in centimeters. The male table carries a
/// zero BMI coefficient, so BMI only influences the female estimate. A
/// negative raw regression result is clamped to 0; an area cannot be
/// negative.
pub fn compute_vfa(waist_cm: f64, thigh_cm: f64, age: u32, bmi: f64, gender: Gender) -> f64 {
    let c = gender.vfa_coefficients();
    let raw = c.waist * waist_cm
        + c.thigh * thigh_cm
        + c.age * f64::from(age)
        + c.bmi * bmi
        + c.intercept;
    raw.max(0.0)
}
