//! Risk category classification
//!
//! Maps computed BMI and VFA values to closed category enums. Every value in
//! a metric's valid range maps to exactly one category; each threshold is
//! inclusive on its lower bound and exclusive on its upper bound.

use serde::{Deserialize, Serialize};

// ============================================================================
// Thresholds
// ============================================================================

/// BMI below this is underweight
pub const BMI_NORMAL_MIN: f64 = 18.5;
/// BMI at or above this is overweight
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
/// BMI at or above this is obese
pub const BMI_OBESE_MIN: f64 = 30.0;
/// BMI at or above this is extremely obese
pub const BMI_EXTREMELY_OBESE_MIN: f64 = 35.0;

/// VFA at or above this (cm^2) indicates visceral obesity
pub const VFA_OBESITY_MIN: f64 = 100.0;

// ============================================================================
// Categories
// ============================================================================

/// BMI risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    ExtremelyObese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
            BmiCategory::ExtremelyObese => "extremely_obese",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "underweight" => Some(BmiCategory::Underweight),
            "normal" => Some(BmiCategory::Normal),
            "overweight" => Some(BmiCategory::Overweight),
            "obese" => Some(BmiCategory::Obese),
            "extremely_obese" => Some(BmiCategory::ExtremelyObese),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::ExtremelyObese => "Extremely Obese",
        }
    }
}

/// Visceral obesity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VfaCategory {
    Absence,
    Presence,
}

impl VfaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VfaCategory::Absence => "absence",
            VfaCategory::Presence => "presence",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "absence" => Some(VfaCategory::Absence),
            "presence" => Some(VfaCategory::Presence),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VfaCategory::Absence => "Absence of Visceral Obesity",
            VfaCategory::Presence => "Presence of Visceral Obesity",
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Classify a BMI value; gender- and age-independent
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else if bmi < BMI_EXTREMELY_OBESE_MIN {
        BmiCategory::Obese
    } else {
        BmiCategory::ExtremelyObese
    }
}

/// Classify a VFA value against the 100 cm^2 visceral obesity cutoff
pub fn classify_vfa(vfa: f64) -> VfaCategory {
    if vfa < VFA_OBESITY_MIN {
        VfaCategory::Absence
    } else {
        VfaCategory::Presence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bmi_bands() {
        assert_eq!(classify_bmi(16.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(22.0), BmiCategory::Normal);
        assert_eq!(classify_bmi(27.5), BmiCategory::Overweight);
        assert_eq!(classify_bmi(32.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(40.0), BmiCategory::ExtremelyObese);
    }

    #[test]
    fn test_classify_bmi_boundaries_belong_to_upper_band() {
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
        assert_eq!(classify_bmi(35.0), BmiCategory::ExtremelyObese);
    }

    #[test]
    fn test_classify_bmi_just_below_boundaries() {
        assert_eq!(classify_bmi(18.499999), BmiCategory::Underweight);
        assert_eq!(classify_bmi(24.999999), BmiCategory::Normal);
        assert_eq!(classify_bmi(29.999999), BmiCategory::Overweight);
        assert_eq!(classify_bmi(34.999999), BmiCategory::Obese);
    }

    #[test]
    fn test_classify_bmi_total_and_monotone() {
        // Dense sweep of [0, 100]: every value classifies, and the category
        // index never decreases as BMI increases
        fn rank(c: BmiCategory) -> u8 {
            match c {
                BmiCategory::Underweight => 0,
                BmiCategory::Normal => 1,
                BmiCategory::Overweight => 2,
                BmiCategory::Obese => 3,
                BmiCategory::ExtremelyObese => 4,
            }
        }
        let mut prev = 0u8;
        for i in 0..=10_000 {
            let bmi = f64::from(i) * 0.01;
            let r = rank(classify_bmi(bmi));
            assert!(r >= prev);
            prev = r;
        }
    }

    #[test]
    fn test_classify_vfa() {
        assert_eq!(classify_vfa(0.0), VfaCategory::Absence);
        assert_eq!(classify_vfa(99.99), VfaCategory::Absence);
        assert_eq!(classify_vfa(100.0), VfaCategory::Presence);
        assert_eq!(classify_vfa(250.0), VfaCategory::Presence);
    }

    #[test]
    fn test_category_string_round_trip() {
        for c in [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
            BmiCategory::ExtremelyObese,
        ] {
            assert_eq!(BmiCategory::from_str(c.as_str()), Some(c));
        }
        for c in [VfaCategory::Absence, VfaCategory::Presence] {
            assert_eq!(VfaCategory::from_str(c.as_str()), Some(c));
        }
    }
}
