//! # SFRS Factors
//!
//! Response modification factor R and overstrength factor Ω₀ of the
//! building's seismic force-resisting system, per ASCE 7-22 Table 12.2-1.

use serde::{Deserialize, Serialize};

use super::{find_row, NamedRow};

/// One row of the SFRS table.
///
/// ## JSON Example
///
/// ```json
/// { "SFRS": "B3. Building frame system: Steel ordinary concentrically braced frames", "R": 3.25, "Omega": 2.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfrsRow {
    /// System designation and description
    #[serde(rename = "SFRS")]
    pub system: String,

    /// Response modification factor R
    #[serde(rename = "R")]
    pub r: f64,

    /// Overstrength factor Ω₀
    #[serde(rename = "Omega")]
    pub omega_0: f64,
}

impl NamedRow for SfrsRow {
    fn name(&self) -> &str {
        &self.system
    }
}

/// R and Ω₀ for a selected system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SfrsFactors {
    /// Response modification factor R
    pub r: f64,
    /// Overstrength factor Ω₀
    pub omega_0: f64,
}

impl SfrsFactors {
    /// Substituted when a named system is not in the table
    pub const LOOKUP_MISS: SfrsFactors = SfrsFactors { r: 1.0, omega_0: 1.0 };

    /// Used by callers when no system is selected at all.
    ///
    /// Ω₀ = 0 sends Rμ straight to its 1.3 floor.
    pub const NOT_SELECTED: SfrsFactors = SfrsFactors { r: 0.0, omega_0: 0.0 };
}

/// Look up R and Ω₀ for a system.
///
/// - `None` key (no system selected) returns `None`; the caller picks the
///   default path, usually [`SfrsFactors::NOT_SELECTED`].
/// - A name with no matching row returns [`SfrsFactors::LOOKUP_MISS`] (1.0, 1.0).
pub fn sfrs_factors(rows: &[SfrsRow], system: Option<&str>) -> Option<SfrsFactors> {
    let system = system?;
    match find_row(rows, system) {
        Some(row) => {
            log::debug!("SFRS '{}': R = {}, Omega_0 = {}", row.system, row.r, row.omega_0);
            Some(SfrsFactors { r: row.r, omega_0: row.omega_0 })
        }
        None => {
            log::warn!("SFRS '{}' not found, using R = 1.0, Omega_0 = 1.0", system);
            Some(SfrsFactors::LOOKUP_MISS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<SfrsRow> {
        vec![
            SfrsRow { system: "Steel Frame".to_string(), r: 8.0, omega_0: 3.0 },
            SfrsRow { system: "Shear Wall".to_string(), r: 5.0, omega_0: 2.5 },
        ]
    }

    #[test]
    fn test_absent_selection() {
        assert_eq!(sfrs_factors(&rows(), None), None);
    }

    #[test]
    fn test_match_ignores_case_and_whitespace() {
        let a = sfrs_factors(&rows(), Some(" Steel Frame ")).unwrap();
        let b = sfrs_factors(&rows(), Some("steel frame")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, SfrsFactors { r: 8.0, omega_0: 3.0 });
    }

    #[test]
    fn test_lookup_miss_fallback() {
        let factors = sfrs_factors(&rows(), Some("Adobe")).unwrap();
        assert_eq!(factors, SfrsFactors::LOOKUP_MISS);
    }

    #[test]
    fn test_row_json_labels() {
        let json = r#"{ "SFRS": "Shear Wall", "R": 5.0, "Omega": 2.5 }"#;
        let row: SfrsRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.system, "Shear Wall");
        assert_eq!(row.omega_0, 2.5);
    }
}
