//! # Building Selections
//!
//! The high-level choices a user makes about the building and the partition,
//! and the code values each one implies:
//!
//! | Occupancy | Risk Category | Ie = Ip | Floor height |
//! |-----------|---------------|---------|--------------|
//! | Office    | II            | 1.0     | 12 ft        |
//! | Hospital  | IV            | 1.5     | 16 ft        |
//!
//! All selections parse case-insensitively from strings (for CLI flags and
//! TOML input files) and serialize as snake_case.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Structure type used for the approximate period of partition buildings
pub const ALL_OTHER_STRUCTURAL_SYSTEMS: &str = "All other structural systems";

/// Risk category per ASCE 7 Table 1.5-1, limited to those the occupancies map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskCategory {
    /// Ordinary occupancies
    #[default]
    II,
    /// Essential facilities
    IV,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RiskCategory::II => "II",
            RiskCategory::IV => "IV",
        };
        write!(f, "{}", name)
    }
}

/// Building occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    /// Ordinary office occupancy
    Office,
    /// Essential facility
    #[default]
    Hospital,
}

impl Occupancy {
    /// Risk category of the occupancy
    pub fn risk_category(&self) -> RiskCategory {
        match self {
            Occupancy::Office => RiskCategory::II,
            Occupancy::Hospital => RiskCategory::IV,
        }
    }

    /// Importance factor, used for both Ie and Ip
    pub fn importance_factor(&self) -> f64 {
        match self {
            Occupancy::Office => 1.0,
            Occupancy::Hospital => 1.5,
        }
    }

    /// Typical story height (ft)
    pub fn floor_height_ft(&self) -> f64 {
        match self {
            Occupancy::Office => 12.0,
            Occupancy::Hospital => 16.0,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Occupancy::Office => "Office",
            Occupancy::Hospital => "Hospital",
        }
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Occupancy {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "office" => Ok(Occupancy::Office),
            "hospital" => Ok(Occupancy::Hospital),
            _ => Err(CalcError::invalid_input("occupancy", s, "Expected 'office' or 'hospital'")),
        }
    }
}

/// Primary building material, which selects the seismic force-resisting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BuildingMaterial {
    Steel,
    Concrete,
    Masonry,
    Wood,
    /// Unknown system: no SFRS, Rμ takes its floor value
    #[default]
    Other,
}

impl BuildingMaterial {
    /// All material variants for UI selection
    pub const ALL: [BuildingMaterial; 5] = [
        BuildingMaterial::Steel,
        BuildingMaterial::Concrete,
        BuildingMaterial::Masonry,
        BuildingMaterial::Wood,
        BuildingMaterial::Other,
    ];

    /// Name of the SFRS table row assumed for this material
    pub fn sfrs_name(&self) -> Option<&'static str> {
        match self {
            BuildingMaterial::Steel => {
                Some("B3. Building frame system: Steel ordinary concentrically braced frames")
            }
            BuildingMaterial::Concrete => {
                Some("A3. Bearing wall system: Ordinary reinforced concrete shear walls")
            }
            BuildingMaterial::Masonry => {
                Some("A10. Bearing wall system: Ordinary reinforced masonry shear walls")
            }
            BuildingMaterial::Wood => Some(
                "A16. Bearing wall system: Light-frame (wood) walls sheathed with wood structural panels rated for shear resistance",
            ),
            BuildingMaterial::Other => None,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingMaterial::Steel => "Steel",
            BuildingMaterial::Concrete => "Concrete",
            BuildingMaterial::Masonry => "Masonry",
            BuildingMaterial::Wood => "Wood",
            BuildingMaterial::Other => "Other/Unknown",
        }
    }
}

impl std::fmt::Display for BuildingMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for BuildingMaterial {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "steel" => Ok(BuildingMaterial::Steel),
            "concrete" => Ok(BuildingMaterial::Concrete),
            "masonry" => Ok(BuildingMaterial::Masonry),
            "wood" => Ok(BuildingMaterial::Wood),
            "other" | "unknown" | "other/unknown" => Ok(BuildingMaterial::Other),
            _ => Err(CalcError::invalid_input(
                "material",
                s,
                "Expected steel, concrete, masonry, wood or other",
            )),
        }
    }
}

/// Partition wall height class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PartitionHeight {
    /// 9 ft or less
    #[serde(rename = "up_to_9_ft")]
    UpTo9Ft,
    /// Taller than 9 ft
    #[default]
    #[serde(rename = "over_9_ft")]
    Over9Ft,
}

impl PartitionHeight {
    /// All partition height variants for UI selection
    pub const ALL: [PartitionHeight; 2] = [PartitionHeight::UpTo9Ft, PartitionHeight::Over9Ft];

    /// Name of the component table row for this partition
    pub fn component_name(&self) -> &'static str {
        match self {
            PartitionHeight::UpTo9Ft => {
                "1a. Interior nonstructural walls and partitions: Light frame <= 9 ft in height"
            }
            PartitionHeight::Over9Ft => {
                "1b. Interior nonstructural walls and partitions: Light frame > 9 ft in height"
            }
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PartitionHeight::UpTo9Ft => "Less than or equal to 9 feet",
            PartitionHeight::Over9Ft => "Greater than 9 feet",
        }
    }
}

impl std::fmt::Display for PartitionHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PartitionHeight {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "le9" | "up_to_9_ft" | "<=9" => Ok(PartitionHeight::UpTo9Ft),
            "gt9" | "over_9_ft" | ">9" => Ok(PartitionHeight::Over9Ft),
            _ => Err(CalcError::invalid_input("partition_height", s, "Expected 'le9' or 'gt9'")),
        }
    }
}
