//! # Reference Tables
//!
//! The three ASCE 7-22 tables the Fp calculation draws from, and the lookups
//! over them:
//!
//! | Table | Source              | Row type        | Lookup                   |
//! |-------|---------------------|-----------------|--------------------------|
//! | SFRS  | ASCE 7-22 Table 12.2-1 | [`SfrsRow`]      | [`sfrs_factors`]         |
//! | Components | ASCE 7-22 Table 13.5-1 | [`ComponentRow`] | [`component_factors`] |
//! | Period | ASCE 7-22 Table 12.8-2 | [`PeriodRow`]    | [`approximate_period`]   |
//!
//! Every lookup matches names case-insensitively with surrounding whitespace
//! ignored, and the first matching row wins.
//!
//! ## Example
//!
//! ```rust
//! use fpcalc_core::tables::{sfrs_factors, ReferenceTables};
//!
//! let tables = ReferenceTables::builtin().unwrap();
//! let factors = sfrs_factors(
//!     &tables.sfrs,
//!     Some(" b3. building frame system: steel ordinary concentrically braced frames "),
//! )
//! .unwrap();
//! assert_eq!(factors.r, 3.25);
//! ```

pub mod component;
pub mod period;
pub mod sfrs;

pub use component::{component_factors, ComponentFactors, ComponentRow, GradeLocation};
pub use period::{approximate_period, ApproximatePeriod, PeriodRow};
pub use sfrs::{sfrs_factors, SfrsFactors, SfrsRow};

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// File name of the SFRS table inside a tables directory
pub const SFRS_FILE: &str = "building.json";
/// File name of the component table inside a tables directory
pub const COMPONENT_FILE: &str = "arch.json";
/// File name of the period coefficient table inside a tables directory
pub const PERIOD_FILE: &str = "period.json";

static BUILTIN_SFRS: &str = include_str!("../../data/building.json");
static BUILTIN_COMPONENTS: &str = include_str!("../../data/arch.json");
static BUILTIN_PERIODS: &str = include_str!("../../data/period.json");

static BUILTIN: Lazy<CalcResult<ReferenceTables>> =
    Lazy::new(|| ReferenceTables::from_json(BUILTIN_SFRS, BUILTIN_COMPONENTS, BUILTIN_PERIODS));

/// A table row that can be found by name.
pub trait NamedRow {
    /// The name this row is matched on (system, component or structure type)
    fn name(&self) -> &str;
}

/// Normalize a table name or lookup key: trim surrounding whitespace and fold case.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Find the first row whose normalized name equals the normalized key.
pub fn find_row<'a, T: NamedRow>(rows: &'a [T], key: &str) -> Option<&'a T> {
    let key = normalize_name(key);
    rows.iter().find(|row| normalize_name(row.name()) == key)
}

/// Immutable snapshot of the three reference tables.
///
/// Tables are read-only once constructed; every lookup borrows them, so a
/// single instance can be shared across threads for concurrent calculations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceTables {
    /// Seismic force-resisting systems (R, Ω₀)
    pub sfrs: Vec<SfrsRow>,
    /// Nonstructural components (CAR, Rpo)
    pub components: Vec<ComponentRow>,
    /// Approximate period coefficients (Ct, x)
    pub periods: Vec<PeriodRow>,
}

impl ReferenceTables {
    /// The ASCE 7-22 excerpt embedded in the library.
    ///
    /// Parsed on first use and shared for the life of the process.
    pub fn builtin() -> CalcResult<&'static ReferenceTables> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Parse the three tables from JSON arrays.
    pub fn from_json(sfrs: &str, components: &str, periods: &str) -> CalcResult<Self> {
        let tables = ReferenceTables {
            sfrs: parse_table("SFRS", sfrs)?,
            components: parse_table("component", components)?,
            periods: parse_table("period", periods)?,
        };
        log::debug!(
            "Loaded reference tables: {} SFRS, {} component, {} period rows",
            tables.sfrs.len(),
            tables.components.len(),
            tables.periods.len()
        );
        Ok(tables)
    }

    /// Load `building.json`, `arch.json` and `period.json` from a directory.
    pub fn load_dir(dir: &Path) -> CalcResult<Self> {
        log::info!("Loading reference tables from {}", dir.display());
        let sfrs = read_table_file(&dir.join(SFRS_FILE))?;
        let components = read_table_file(&dir.join(COMPONENT_FILE))?;
        let periods = read_table_file(&dir.join(PERIOD_FILE))?;
        Self::from_json(&sfrs, &components, &periods)
    }
}

fn parse_table<T: DeserializeOwned>(table: &str, json: &str) -> CalcResult<Vec<T>> {
    serde_json::from_str(json).map_err(|e| CalcError::table_load(table, e.to_string()))
}

fn read_table_file(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_parse() {
        let tables = ReferenceTables::builtin().unwrap();
        assert!(!tables.sfrs.is_empty());
        assert!(!tables.components.is_empty());
        assert!(!tables.periods.is_empty());
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = ReferenceTables::builtin().unwrap();
        let b = ReferenceTables::builtin().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Steel Frame "), "steel frame");
        assert_eq!(normalize_name("STEEL FRAME"), "steel frame");
    }

    #[test]
    fn test_find_row_first_match_wins() {
        let rows = vec![
            SfrsRow { system: "Frame".to_string(), r: 8.0, omega_0: 3.0 },
            SfrsRow { system: " frame ".to_string(), r: 4.0, omega_0: 2.0 },
        ];
        let row = find_row(&rows, "FRAME").unwrap();
        assert_eq!(row.r, 8.0);
    }

    #[test]
    fn test_from_json_reports_failing_table() {
        let err = ReferenceTables::from_json("[]", "[]", "not json").unwrap_err();
        match err {
            CalcError::TableLoad { table, .. } => assert_eq!(table, "period"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_mixed_component_labels() {
        let components = r#"[
            { "Component": "Partition", "Components": "Partition", "CAR_above": 1.0, "Rpo": 1.5 },
            { "Components": "Ceiling", "CAR_above": 1.0, "Rpo": 2.0 }
        ]"#;
        let tables = ReferenceTables::from_json("[]", components, "[]").unwrap();
        assert_eq!(tables.components.len(), 2);
        assert_eq!(tables.components[1].component, "Ceiling");
    }

    #[test]
    fn test_load_dir_missing_file() {
        let dir = std::env::temp_dir().join("fpcalc_missing_tables_dir");
        let err = ReferenceTables::load_dir(&dir).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_dir_roundtrip() {
        let dir = std::env::temp_dir().join(format!("fpcalc_tables_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SFRS_FILE), BUILTIN_SFRS).unwrap();
        fs::write(dir.join(COMPONENT_FILE), BUILTIN_COMPONENTS).unwrap();
        fs::write(dir.join(PERIOD_FILE), BUILTIN_PERIODS).unwrap();

        let loaded = ReferenceTables::load_dir(&dir).unwrap();
        assert_eq!(&loaded, ReferenceTables::builtin().unwrap());

        fs::remove_dir_all(&dir).unwrap();
    }
}
