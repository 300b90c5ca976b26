//! Database migrations
//!
//! Schema creation and migration logic for the measurements table.

use rusqlite::Connection;

use super::connection::DbResult;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all migrations to bring the database up to the current schema version
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    if current_version < 1 {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
    }

    Ok(())
}

/// Get the current schema version
pub fn get_schema_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Migration v1: Initial schema
fn migrate_v1(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- ============================================
        -- MEASUREMENTS
        -- One row per computed measurement record
        -- ============================================
        CREATE TABLE measurements (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            gender TEXT NOT NULL CHECK(gender IN ('male', 'female')),
            age INTEGER NOT NULL,

            -- Raw imperial inputs
            weight_lbs REAL NOT NULL,
            height_ft INTEGER NOT NULL,
            height_in REAL NOT NULL,
            waist_in REAL NOT NULL,
            thigh_in REAL NOT NULL,

            -- Computed results (display-rounded)
            bmi REAL NOT NULL,
            bmi_category TEXT NOT NULL,
            visceral_fat REAL NOT NULL,
            vfa_category TEXT NOT NULL,

            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX idx_measurements_name ON measurements(name);
        CREATE INDEX idx_measurements_created ON measurements(created_at);
        "#,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_gender_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let result = conn.execute(
            "INSERT INTO measurements (name, gender, age, weight_lbs, height_ft,
             height_in, waist_in, thigh_in, bmi, bmi_category, visceral_fat, vfa_category)
             VALUES ('x', 'unknown', 42, 190.0, 6, 1.0, 36.0, 24.5, 25.07, 'overweight', 110.54, 'presence')",
            [],
        );
        assert!(result.is_err());
    }
}
