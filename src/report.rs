//! Textual report rendering
//!
//! Formats a completed measurement record as `field = value unit - category`
//! lines, ready for terminal output or field-by-field binding into a form.

use crate::models::MeasurementRecord;

/// Render a record as a multi-line report
pub fn render(record: &MeasurementRecord) -> String {
    let lines = [
        format!("name = {}", record.name),
        format!("gender = {}", record.gender.as_str()),
        format!("age = {} years", record.age),
        format!(
            "weight = {} lbs ({:.2} kg)",
            record.weight_lbs, record.weight_kg
        ),
        format!(
            "height = {} ft {} in ({:.2} m)",
            record.height_ft, record.height_in, record.height_m
        ),
        format!(
            "waist = {} inches ({:.2} cm)",
            record.waist_in, record.waist_cm
        ),
        format!(
            "thigh = {} inches ({:.2} cm)",
            record.thigh_in, record.thigh_cm
        ),
        format!(
            "bmi = {:.2} kg/m^2 - {}",
            record.bmi,
            record.bmi_category.display_name()
        ),
        format!(
            "visceral fat = {:.2} cm^2 - {}",
            record.vfa,
            record.vfa_category.display_name()
        ),
    ];

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MeasurementInput;

    #[test]
    fn test_render_reference_record() {
        let record = MeasurementRecord::compute(&MeasurementInput::default()).unwrap();
        let report = render(&record);

        assert!(report.contains("name = Tony"));
        assert!(report.contains("gender = male"));
        assert!(report.contains("waist = 36 inches (91.44 cm)"));
        assert!(report.contains("bmi = 25.07 kg/m^2 - Overweight"));
        assert!(report.contains("visceral fat = 110.54 cm^2 - Presence of Visceral Obesity"));
    }

    #[test]
    fn test_render_one_line_per_field() {
        let record = MeasurementRecord::compute(&MeasurementInput::default()).unwrap();
        assert_eq!(render(&record).lines().count(), 9);
    }
}
