//! # Fp Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON/TOML-serializable)
//! - `*Result` - Calculation results with every intermediate (JSON-serializable)
//! - `calculate(input, tables) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! The calculation functions validate their inputs and then run the
//! infallible formulas in [`crate::seismic`] against a borrowed
//! [`ReferenceTables`] snapshot.
//!
//! ## Available Calculations
//!
//! - [`fp`] - Fp from explicit factors and table selections
//! - [`partition`] - Fp for partition walls from building selections

pub mod fp;
pub mod partition;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::tables::ReferenceTables;

// Re-export commonly used types
pub use fp::{FpInput, FpResult};
pub use partition::{BuildingSummary, PartitionInput, PartitionResult};

/// Enum wrapper for all calculation types.
///
/// Lets callers hold or deserialize either kind of calculation and run it
/// without matching on the type first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Explicit-input Fp calculation
    Fp(FpInput),
    /// Partition wall calculation from building selections
    Partition(PartitionInput),
}

/// Result of running a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Fp(FpResult),
    Partition(PartitionResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Fp(input) => &input.label,
            CalculationItem::Partition(input) => &input.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Fp(_) => "Fp",
            CalculationItem::Partition(_) => "Partition",
        }
    }

    /// Run the calculation against a table snapshot
    pub fn calculate(&self, tables: &ReferenceTables) -> CalcResult<CalculationOutput> {
        log::debug!("Running {} calculation '{}'", self.calc_type(), self.label());
        match self {
            CalculationItem::Fp(input) => fp::calculate(input, tables).map(CalculationOutput::Fp),
            CalculationItem::Partition(input) => {
                partition::calculate(input, tables).map(CalculationOutput::Partition)
            }
        }
    }
}

impl CalculationOutput {
    /// The Fp results, whichever calculation produced them
    pub fn fp(&self) -> &FpResult {
        match self {
            CalculationOutput::Fp(result) => result,
            CalculationOutput::Partition(result) => &result.fp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_dispatch() {
        let tables = ReferenceTables::builtin().unwrap();
        let item = CalculationItem::Partition(PartitionInput::new(1.0));
        assert_eq!(item.calc_type(), "Partition");
        assert_eq!(item.label(), "Partition");

        let output = item.calculate(tables).unwrap();
        assert!(matches!(output, CalculationOutput::Partition(_)));
        assert!(output.fp().fp() > 0.0);
    }

    #[test]
    fn test_item_tagged_json() {
        let json = r#"{ "type": "Partition", "label": "P-7", "sds_g": 0.9 }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.label(), "P-7");

        let json = r#"{ "type": "Fp", "sds_g": 0.9, "ip": 1.0, "ie": 1.0, "height_ft": 36.0, "attachment_height_ft": 12.0 }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.calc_type(), "Fp");
    }
}
