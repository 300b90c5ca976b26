//! Stored measurement model
//!
//! Persisted form of a computed measurement record, one row per invocation
//! that asked for storage. The engine never touches this; the front-end
//! hands a completed record to [`StoredMeasurement::create`].

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};
use crate::engine::{BmiCategory, Gender, VfaCategory};
use crate::models::MeasurementRecord;

/// A measurement row from the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMeasurement {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub weight_lbs: f64,
    pub height_ft: u32,
    pub height_in: f64,
    pub waist_in: f64,
    pub thigh_in: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub visceral_fat: f64,
    pub vfa_category: VfaCategory,
    pub created_at: String,
}

impl StoredMeasurement {
    /// Create from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let gender_str: String = row.get("gender")?;
        let bmi_cat_str: String = row.get("bmi_category")?;
        let vfa_cat_str: String = row.get("vfa_category")?;
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            gender: Gender::from_str(&gender_str).unwrap_or(Gender::Male),
            age: row.get("age")?,
            weight_lbs: row.get("weight_lbs")?,
            height_ft: row.get("height_ft")?,
            height_in: row.get("height_in")?,
            waist_in: row.get("waist_in")?,
            thigh_in: row.get("thigh_in")?,
            bmi: row.get("bmi")?,
            bmi_category: BmiCategory::from_str(&bmi_cat_str).unwrap_or(BmiCategory::Normal),
            visceral_fat: row.get("visceral_fat")?,
            vfa_category: VfaCategory::from_str(&vfa_cat_str).unwrap_or(VfaCategory::Absence),
            created_at: row.get("created_at")?,
        })
    }

    /// Persist a completed measurement record
    ///
    /// Stores the display-rounded metric values, matching what the user saw.
    pub fn create(conn: &Connection, record: &MeasurementRecord) -> DbResult<Self> {
        let created_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        conn.execute(
            r#"
            INSERT INTO measurements (name, gender, age, weight_lbs, height_ft,
                height_in, waist_in, thigh_in, bmi, bmi_category, visceral_fat,
                vfa_category, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
            params![
                record.name,
                record.gender.as_str(),
                record.age,
                record.weight_lbs,
                record.height_ft,
                record.height_in,
                record.waist_in,
                record.thigh_in,
                record.bmi_display(),
                record.bmi_category.as_str(),
                record.vfa_display(),
                record.vfa_category.as_str(),
                created_at,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?
            .ok_or_else(|| DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Get a stored measurement by ID
    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM measurements WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(m) => Ok(Some(m)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List stored measurements, newest first
    pub fn list(conn: &Connection, limit: Option<i64>) -> DbResult<Vec<Self>> {
        let sql = match limit {
            Some(n) => format!(
                "SELECT * FROM measurements ORDER BY created_at DESC, id DESC LIMIT {}",
                n
            ),
            None => "SELECT * FROM measurements ORDER BY created_at DESC, id DESC".to_string(),
        };

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::models::MeasurementInput;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_create_and_get() {
        let conn = test_conn();
        let record = MeasurementRecord::compute(&MeasurementInput::default()).unwrap();

        let stored = StoredMeasurement::create(&conn, &record).unwrap();
        assert_eq!(stored.name, "Tony");
        assert_eq!(stored.gender, Gender::Male);
        assert!((stored.bmi - 25.07).abs() < 1e-9);
        assert_eq!(stored.bmi_category, BmiCategory::Overweight);
        assert!((stored.visceral_fat - 110.54).abs() < 1e-9);
        assert_eq!(stored.vfa_category, VfaCategory::Presence);

        let fetched = StoredMeasurement::get_by_id(&conn, stored.id).unwrap().unwrap();
        assert_eq!(fetched.id, stored.id);
        assert_eq!(fetched.name, stored.name);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let conn = test_conn();
        assert!(StoredMeasurement::get_by_id(&conn, 999).unwrap().is_none());
    }

    #[test]
    fn test_list_with_limit() {
        let conn = test_conn();
        let record = MeasurementRecord::compute(&MeasurementInput::default()).unwrap();
        for _ in 0..3 {
            StoredMeasurement::create(&conn, &record).unwrap();
        }

        assert_eq!(StoredMeasurement::list(&conn, None).unwrap().len(), 3);
        assert_eq!(StoredMeasurement::list(&conn, Some(2)).unwrap().len(), 2);
    }
}
