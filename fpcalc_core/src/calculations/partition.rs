//! # Partition Wall Calculation
//!
//! Fp for interior light-frame partition walls from a handful of building
//! selections. The selections resolve to code values as follows:
//!
//! - Occupancy gives the risk category, Ie = Ip, and the story height.
//! - h = floors × story height, z = installation floor × story height.
//! - Building material picks the SFRS row (or none).
//! - Partition height picks component row 1a or 1b.
//! - The period uses "All other structural systems".
//!
//! ## Example
//!
//! ```rust
//! use fpcalc_core::calculations::partition::{calculate, PartitionInput};
//! use fpcalc_core::building::{BuildingMaterial, Occupancy};
//! use fpcalc_core::tables::ReferenceTables;
//!
//! let input = PartitionInput {
//!     occupancy: Occupancy::Office,
//!     material: BuildingMaterial::Steel,
//!     num_floors: 4,
//!     install_floor: Some(2),
//!     ..PartitionInput::new(1.2)
//! };
//!
//! let result = calculate(&input, ReferenceTables::builtin()?)?;
//! assert_eq!(result.building.height_ft, 48.0);
//! assert!(result.fp.fp() >= result.fp.coefficient.fp_min);
//! # Ok::<(), fpcalc_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use super::fp::{self, FpInput, FpResult};
use crate::building::{BuildingMaterial, Occupancy, PartitionHeight, RiskCategory, ALL_OTHER_STRUCTURAL_SYSTEMS};
use crate::errors::{CalcError, CalcResult};
use crate::tables::ReferenceTables;

/// Upper limit on the number of stories
pub const MAX_FLOORS: u32 = 100;

fn default_label() -> String {
    "Partition".to_string()
}

fn default_floors() -> u32 {
    5
}

/// Building and partition selections.
///
/// ## TOML Example
///
/// ```toml
/// label = "Level 3 corridor"
/// sds_g = 1.45
/// occupancy = "office"
/// material = "wood"
/// num_floors = 3
/// install_floor = 3
/// partition_height = "up_to_9_ft"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionInput {
    /// User label for this calculation
    #[serde(default = "default_label")]
    pub label: String,

    /// Short-period design spectral acceleration SDS (g)
    pub sds_g: f64,

    /// Building occupancy
    #[serde(default)]
    pub occupancy: Occupancy,

    /// Primary building material
    #[serde(default)]
    pub material: BuildingMaterial,

    /// Total number of stories (1 to 100)
    #[serde(default = "default_floors")]
    pub num_floors: u32,

    /// Highest floor with partitions (1 to `num_floors`); defaults to the top floor
    #[serde(default)]
    pub install_floor: Option<u32>,

    /// Partition wall height class
    #[serde(default)]
    pub partition_height: PartitionHeight,
}

impl PartitionInput {
    /// Default selections with the given SDS: hospital, unknown material,
    /// five stories, partitions taller than 9 ft on the top floor.
    pub fn new(sds_g: f64) -> Self {
        PartitionInput {
            label: default_label(),
            sds_g,
            occupancy: Occupancy::default(),
            material: BuildingMaterial::default(),
            num_floors: default_floors(),
            install_floor: None,
            partition_height: PartitionHeight::default(),
        }
    }

    /// Floor the partitions are installed on
    pub fn install_floor(&self) -> u32 {
        self.install_floor.unwrap_or(self.num_floors)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.sds_g.is_finite() || self.sds_g < 0.0 {
            return Err(CalcError::invalid_input(
                "sds_g",
                self.sds_g.to_string(),
                "SDS must be a non-negative number",
            ));
        }
        if self.num_floors == 0 || self.num_floors > MAX_FLOORS {
            return Err(CalcError::invalid_input(
                "num_floors",
                self.num_floors.to_string(),
                format!("Number of floors must be between 1 and {}", MAX_FLOORS),
            ));
        }
        let install_floor = self.install_floor();
        if install_floor == 0 || install_floor > self.num_floors {
            return Err(CalcError::invalid_input(
                "install_floor",
                install_floor.to_string(),
                format!("Installation floor must be between 1 and {}", self.num_floors),
            ));
        }
        Ok(())
    }

    /// Resolve the selections into the building values used by the calculation
    pub fn building(&self) -> BuildingSummary {
        let floor_height_ft = self.occupancy.floor_height_ft();
        BuildingSummary {
            risk_category: self.occupancy.risk_category(),
            importance_factor: self.occupancy.importance_factor(),
            floor_height_ft,
            height_ft: f64::from(self.num_floors) * floor_height_ft,
            attachment_height_ft: f64::from(self.install_floor()) * floor_height_ft,
            sfrs: self.material.sfrs_name().map(str::to_string),
            component: self.partition_height.component_name().to_string(),
            structure_type: ALL_OTHER_STRUCTURAL_SYSTEMS.to_string(),
        }
    }

    /// Build the explicit Fp input for these selections (Wp = 1.0).
    pub fn to_fp_input(&self) -> FpInput {
        let building = self.building();
        FpInput {
            label: self.label.clone(),
            sds_g: self.sds_g,
            ip: building.importance_factor,
            ie: building.importance_factor,
            height_ft: building.height_ft,
            attachment_height_ft: building.attachment_height_ft,
            wp: 1.0,
            sfrs: building.sfrs,
            component: Some(building.component),
            structure_type: Some(building.structure_type),
            location: None,
        }
    }
}

/// Building values derived from the selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSummary {
    /// Risk category of the occupancy
    pub risk_category: RiskCategory,
    /// Ie = Ip
    pub importance_factor: f64,
    /// Story height (ft)
    pub floor_height_ft: f64,
    /// Building height h (ft)
    pub height_ft: f64,
    /// Attachment height z (ft)
    pub attachment_height_ft: f64,
    /// SFRS row name, if any
    pub sfrs: Option<String>,
    /// Component row name
    pub component: String,
    /// Period table row name
    pub structure_type: String,
}

/// Results from a partition calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionResult {
    /// Resolved building values
    pub building: BuildingSummary,
    /// Fp results
    pub fp: FpResult,
}

/// Calculate Fp for a partition wall.
pub fn calculate(input: &PartitionInput, tables: &ReferenceTables) -> CalcResult<PartitionResult> {
    input.validate()?;
    let building = input.building();
    log::debug!(
        "{}: {} (RC {}), h = {} ft, z = {} ft",
        input.label,
        input.occupancy,
        building.risk_category,
        building.height_ft,
        building.attachment_height_ft
    );
    let fp = fp::calculate(&input.to_fp_input(), tables)?;
    Ok(PartitionResult { building, fp })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seismic::{AmplificationBasis, FpBound};
    use crate::tables::GradeLocation;

    fn tables() -> &'static ReferenceTables {
        ReferenceTables::builtin().unwrap()
    }

    #[test]
    fn test_default_selections() {
        let input = PartitionInput::new(1.0);
        assert_eq!(input.occupancy, Occupancy::Hospital);
        assert_eq!(input.material, BuildingMaterial::Other);
        assert_eq!(input.install_floor(), 5);

        let building = input.building();
        assert_eq!(building.height_ft, 80.0);
        assert_eq!(building.attachment_height_ft, 80.0);
        assert_eq!(building.risk_category, RiskCategory::IV);
        assert_eq!(building.sfrs, None);
    }

    #[test]
    fn test_hospital_unknown_system() {
        let result = calculate(&PartitionInput::new(1.0), tables()).unwrap();
        let fp = &result.fp;

        // No SFRS: zero overstrength path
        assert!(!fp.sfrs_selected);
        assert_eq!(fp.rmu, 1.3);

        // Ta from "All other structural systems" at h = 80 ft
        let ta = 0.02 * 80.0_f64.powf(0.75);
        assert!((fp.period.unwrap().ta - ta).abs() < 1e-12);
        assert_eq!(fp.height_factor.basis, AmplificationBasis::Period);
        let a1 = fp.height_factor.a1.unwrap();
        let a2 = fp.height_factor.a2.unwrap();
        assert!((fp.height_factor.hf - (1.0 + a1 + a2)).abs() < 1e-12);

        assert_eq!(fp.location, GradeLocation::AboveGrade);
        let expected = 0.4 * 1.0 * 1.5 * (fp.height_factor.hf / 1.3) * (fp.component.car / fp.component.rpo);
        assert!((fp.coefficient.fp_calculated - expected).abs() < 1e-12);
        assert!(fp.fp() >= fp.coefficient.fp_min && fp.fp() <= fp.coefficient.fp_max);
    }

    #[test]
    fn test_office_steel_lower_floor() {
        let input = PartitionInput {
            occupancy: Occupancy::Office,
            material: BuildingMaterial::Steel,
            num_floors: 10,
            install_floor: Some(4),
            partition_height: PartitionHeight::UpTo9Ft,
            ..PartitionInput::new(1.5)
        };
        let result = calculate(&input, tables()).unwrap();
        assert_eq!(result.building.height_ft, 120.0);
        assert_eq!(result.building.attachment_height_ft, 48.0);
        assert!(result.fp.sfrs_selected);
        assert_eq!(result.fp.sfrs.r, 3.25);
        assert_eq!(result.fp.sfrs.omega_0, 2.0);

        // sqrt(1.1 * 3.25 / (1.0 * 2.0)) = 1.337
        let rmu = (1.1_f64 * 3.25 / 2.0).sqrt();
        assert!((result.fp.rmu - rmu).abs() < 1e-12);
    }

    #[test]
    fn test_fp_input_mapping() {
        let input = PartitionInput {
            material: BuildingMaterial::Wood,
            ..PartitionInput::new(0.8)
        };
        let fp_input = input.to_fp_input();
        assert_eq!(fp_input.ip, 1.5);
        assert_eq!(fp_input.ie, 1.5);
        assert_eq!(fp_input.wp, 1.0);
        assert_eq!(fp_input.structure_type.as_deref(), Some(ALL_OTHER_STRUCTURAL_SYSTEMS));
        assert!(fp_input.sfrs.unwrap().starts_with("A16."));
        assert!(fp_input.component.unwrap().starts_with("1b."));
    }

    #[test]
    fn test_high_sds_stays_within_limits() {
        let input = PartitionInput::new(2.5);
        let result = calculate(&input, tables()).unwrap();
        let c = result.fp.coefficient;
        assert!((c.fp_max - 1.6 * 2.5 * 1.5).abs() < 1e-12);
        assert!(c.fp <= c.fp_max);
        assert_ne!(c.governing, FpBound::Minimum);
    }

    #[test]
    fn test_invalid_floors() {
        let mut input = PartitionInput::new(1.0);
        input.num_floors = 0;
        assert!(calculate(&input, tables()).is_err());

        let mut input = PartitionInput::new(1.0);
        input.num_floors = 101;
        assert!(calculate(&input, tables()).is_err());

        let mut input = PartitionInput::new(1.0);
        input.install_floor = Some(6);
        assert!(calculate(&input, tables()).is_err());

        let mut input = PartitionInput::new(1.0);
        input.install_floor = Some(0);
        assert!(calculate(&input, tables()).is_err());
    }

    #[test]
    fn test_negative_sds_rejected() {
        let input = PartitionInput::new(-1.0);
        let err = calculate(&input, tables()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_defaults() {
        let input: PartitionInput = serde_json::from_str(r#"{ "sds_g": 1.1 }"#).unwrap();
        assert_eq!(input, PartitionInput::new(1.1));

        let json = r#"{ "sds_g": 1.1, "occupancy": "office", "material": "masonry", "partition_height": "up_to_9_ft" }"#;
        let input: PartitionInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.occupancy, Occupancy::Office);
        assert_eq!(input.material, BuildingMaterial::Masonry);
        assert_eq!(input.partition_height, PartitionHeight::UpTo9Ft);
    }
}
