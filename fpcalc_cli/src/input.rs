//! Partition input from a TOML file merged with command-line flags.

use std::fs;
use std::path::Path;

use clap::Args;
use fpcalc_core::building::{BuildingMaterial, Occupancy, PartitionHeight};
use fpcalc_core::calculations::PartitionInput;
use fpcalc_core::{CalcError, CalcResult};
use serde::Deserialize;

/// Partition selections as read from a TOML file. Every field is optional.
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
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartitionFile {
    pub label: Option<String>,
    pub sds_g: Option<f64>,
    pub occupancy: Option<Occupancy>,
    pub material: Option<BuildingMaterial>,
    pub num_floors: Option<u32>,
    pub install_floor: Option<u32>,
    pub partition_height: Option<PartitionHeight>,
}

/// Partition flags; any given flag overrides the file value.
#[derive(Args, Debug, Clone, Default)]
pub struct PartitionOverrides {
    /// Design spectral acceleration SDS (g); prompted for when missing
    #[arg(long)]
    pub sds: Option<f64>,

    /// Occupancy: office or hospital
    #[arg(long)]
    pub occupancy: Option<Occupancy>,

    /// Building material: steel, concrete, masonry, wood or other
    #[arg(long)]
    pub material: Option<BuildingMaterial>,

    /// Number of stories (1-100)
    #[arg(long)]
    pub floors: Option<u32>,

    /// Highest floor with partitions (defaults to the top floor)
    #[arg(long)]
    pub install_floor: Option<u32>,

    /// Partition height: le9 or gt9
    #[arg(long)]
    pub partition_height: Option<PartitionHeight>,

    /// Calculation label
    #[arg(long)]
    pub label: Option<String>,
}

pub fn parse_partition_file(content: &str) -> CalcResult<PartitionFile> {
    toml::from_str(content).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })
}

pub fn load_partition_file(path: &Path) -> CalcResult<PartitionFile> {
    let content =
        fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    log::info!("Loaded partition input from {}", path.display());
    parse_partition_file(&content)
}

/// Parse an interactive SDS answer. An empty answer takes `default`.
pub fn parse_sds_answer(answer: &str, default: f64) -> CalcResult<f64> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .parse()
        .map_err(|_| CalcError::invalid_input("sds_g", answer, "SDS must be a number in g"))
}

/// Merge file values and flags into a [`PartitionInput`].
///
/// Flags win over the file. `prompt_sds` runs only when neither supplies SDS.
pub fn resolve_partition(
    file: PartitionFile,
    flags: PartitionOverrides,
    prompt_sds: impl FnOnce() -> CalcResult<f64>,
) -> CalcResult<PartitionInput> {
    let sds_g = match flags.sds.or(file.sds_g) {
        Some(sds_g) => sds_g,
        None => prompt_sds()?,
    };
    let mut input = PartitionInput::new(sds_g);

    if let Some(label) = flags.label.or(file.label) {
        input.label = label;
    }
    if let Some(occupancy) = flags.occupancy.or(file.occupancy) {
        input.occupancy = occupancy;
    }
    if let Some(material) = flags.material.or(file.material) {
        input.material = material;
    }
    if let Some(floors) = flags.floors.or(file.num_floors) {
        input.num_floors = floors;
    }
    input.install_floor = flags.install_floor.or(file.install_floor);
    if let Some(height) = flags.partition_height.or(file.partition_height) {
        input.partition_height = height;
    }
    Ok(input)
}
