//! # Approximate Fundamental Period
//!
//! Ta = Ct × hn^x with Ct and x from ASCE 7-22 Table 12.8-2.

use serde::{Deserialize, Serialize};

use super::{find_row, NamedRow};

/// One row of the period coefficient table.
///
/// The original data set labels the name column `"Structure Type "` with a
/// trailing space; both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRow {
    /// Structure type (e.g., "Steel moment-resisting frames")
    #[serde(rename = "Structure Type", alias = "Structure Type ")]
    pub structure_type: String,

    /// Period coefficient Ct
    #[serde(rename = "Ct")]
    pub ct: f64,

    /// Period exponent x, in (0, 1]
    pub x: f64,
}

impl NamedRow for PeriodRow {
    fn name(&self) -> &str {
        &self.structure_type
    }
}

/// Approximate period and the coefficients it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproximatePeriod {
    /// Approximate fundamental period Ta (s)
    pub ta: f64,
    /// Period coefficient Ct
    pub ct: f64,
    /// Period exponent x
    pub x: f64,
}

/// Compute Ta for a structure type at structural height `hn_ft`.
///
/// Returns `None` both when no structure type is given and when the name
/// is not in the table. Either way no period is available downstream.
pub fn approximate_period(rows: &[PeriodRow], structure_type: Option<&str>, hn_ft: f64) -> Option<ApproximatePeriod> {
    let structure_type = structure_type?;
    let Some(row) = find_row(rows, structure_type) else {
        log::warn!("Structure type '{}' not found, no approximate period", structure_type);
        return None;
    };

    let ta = row.ct * hn_ft.powf(row.x);
    log::debug!("Ta = {} x {}^{} = {:.4} s", row.ct, hn_ft, row.x, ta);
    Some(ApproximatePeriod { ta, ct: row.ct, x: row.x })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<PeriodRow> {
        vec![
            PeriodRow { structure_type: "Steel moment-resisting frames".to_string(), ct: 0.028, x: 0.8 },
            PeriodRow { structure_type: "All other structural systems".to_string(), ct: 0.02, x: 0.75 },
        ]
    }

    #[test]
    fn test_period_calculation() {
        let period = approximate_period(&rows(), Some("all other structural systems"), 60.0).unwrap();
        let expected = 0.02 * 60.0_f64.powf(0.75);
        assert!((period.ta - expected).abs() < 1e-12);
        assert_eq!(period.ct, 0.02);
        assert_eq!(period.x, 0.75);
    }

    #[test]
    fn test_absent_and_miss_converge() {
        assert_eq!(approximate_period(&rows(), None, 60.0), None);
        assert_eq!(approximate_period(&rows(), Some("Log cabin"), 60.0), None);
    }

    #[test]
    fn test_trailing_space_label() {
        let json = r#"{ "Structure Type ": "All other structural systems", "Ct": 0.02, "x": 0.75 }"#;
        let row: PeriodRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.structure_type, "All other structural systems");

        let json = r#"{ "Structure Type": "Concrete moment-resisting frames", "Ct": 0.016, "x": 0.9 }"#;
        let row: PeriodRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.ct, 0.016);
    }
}
