//! # Component Factors
//!
//! Component amplification factor CAR and component strength factor Rpo,
//! per ASCE 7-22 Table 13.5-1.
//!
//! CAR depends on where the component is supported: at or below grade, or
//! above grade within the structure. Tables in the wild label the name column
//! either `"Component"` or `"Components"` (sometimes both); each row resolves
//! to a single [`ComponentRow::component`] field before matching, preferring
//! `"Component"`.

use serde::{Deserialize, Serialize};

use super::{find_row, NamedRow};

/// CAR used when the selected CAR column is empty or zero
pub const DEFAULT_CAR: f64 = 1.0;

/// Rpo used when the Rpo column is empty or zero
pub const DEFAULT_RPO: f64 = 1.5;

/// One row of the component table.
///
/// ## JSON Example
///
/// ```json
/// {
///   "Components": "1a. Interior nonstructural walls and partitions: Light frame <= 9 ft in height",
///   "CAR_below": 1.0,
///   "CAR_above": 1.0,
///   "Rpo": 1.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawComponentRow")]
pub struct ComponentRow {
    /// Component designation and description
    #[serde(rename = "Component")]
    pub component: String,

    /// CAR for components supported above grade
    #[serde(rename = "CAR_above", default)]
    pub car_above: Option<f64>,

    /// CAR for components supported at or below grade
    #[serde(rename = "CAR_below", default)]
    pub car_below: Option<f64>,

    /// Component strength factor Rpo
    #[serde(rename = "Rpo", default)]
    pub rpo: Option<f64>,
}

/// Component row as stored, with either name label.
#[derive(Deserialize)]
struct RawComponentRow {
    #[serde(rename = "Component", default)]
    component: Option<String>,
    #[serde(rename = "Components", default)]
    components: Option<String>,
    #[serde(rename = "CAR_above", default)]
    car_above: Option<f64>,
    #[serde(rename = "CAR_below", default)]
    car_below: Option<f64>,
    #[serde(rename = "Rpo", default)]
    rpo: Option<f64>,
}

impl TryFrom<RawComponentRow> for ComponentRow {
    type Error = String;

    fn try_from(raw: RawComponentRow) -> Result<Self, Self::Error> {
        let component = raw
            .component
            .or(raw.components)
            .ok_or_else(|| "component row has neither a `Component` nor a `Components` field".to_string())?;
        Ok(ComponentRow {
            component,
            car_above: raw.car_above,
            car_below: raw.car_below,
            rpo: raw.rpo,
        })
    }
}

impl NamedRow for ComponentRow {
    fn name(&self) -> &str {
        &self.component
    }
}

/// Where the component is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GradeLocation {
    /// Supported above grade, within the structure
    #[default]
    AboveGrade,
    /// Supported at or below grade
    AtOrBelowGrade,
}

impl GradeLocation {
    /// Above grade for any attachment height above the base.
    pub fn from_attachment_height(z_ft: f64) -> Self {
        if z_ft > 0.0 {
            GradeLocation::AboveGrade
        } else {
            GradeLocation::AtOrBelowGrade
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            GradeLocation::AboveGrade => "Supported Above Grade",
            GradeLocation::AtOrBelowGrade => "Supported At or Below Grade",
        }
    }
}

impl std::fmt::Display for GradeLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// CAR and Rpo for a selected component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentFactors {
    /// Component amplification factor
    pub car: f64,
    /// Component strength factor
    pub rpo: f64,
}

impl ComponentFactors {
    /// Returned when no component is selected or the name is not in the table
    pub const FALLBACK: ComponentFactors = ComponentFactors { car: 1.0, rpo: 1.0 };
}

/// Empty and zero cells count as missing.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Look up CAR and Rpo for a component.
///
/// A `None` key and an unknown name both return [`ComponentFactors::FALLBACK`].
/// On a match, CAR comes from the column for `location` (defaulting to
/// [`DEFAULT_CAR`]) and Rpo defaults to [`DEFAULT_RPO`].
pub fn component_factors(
    rows: &[ComponentRow],
    component: Option<&str>,
    location: GradeLocation,
) -> ComponentFactors {
    let Some(component) = component else {
        return ComponentFactors::FALLBACK;
    };

    let Some(row) = find_row(rows, component) else {
        log::warn!("Component '{}' not found, using CAR = 1.0, Rpo = 1.0", component);
        return ComponentFactors::FALLBACK;
    };

    let car = match location {
        GradeLocation::AboveGrade => row.car_above,
        GradeLocation::AtOrBelowGrade => row.car_below,
    };
    let factors = ComponentFactors {
        car: present(car).unwrap_or(DEFAULT_CAR),
        rpo: present(row.rpo).unwrap_or(DEFAULT_RPO),
    };
    log::debug!(
        "Component '{}' ({}): CAR = {}, Rpo = {}",
        row.component,
        location,
        factors.car,
        factors.rpo
    );
    factors
}
