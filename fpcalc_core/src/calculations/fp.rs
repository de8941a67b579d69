//! # Fp Calculation (Explicit Inputs)
//!
//! Runs the full Fp chain from explicit scalar inputs and table selections:
//!
//! ```text
//! SFRS lookup      ──> R, Ω₀ ──> Rμ ──┐
//! Component lookup ──> CAR, Rpo ──────┼──> Fp (bounded)
//! Period lookup    ──> Ta ──────> Hf ─┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fpcalc_core::calculations::fp::{calculate, FpInput};
//! use fpcalc_core::tables::ReferenceTables;
//!
//! let input = FpInput {
//!     label: "P-1".to_string(),
//!     sds_g: 1.0,
//!     ip: 1.5,
//!     ie: 1.5,
//!     height_ft: 60.0,
//!     attachment_height_ft: 60.0,
//!     wp: 1.0,
//!     sfrs: None,
//!     component: Some("1a. Interior nonstructural walls and partitions: Light frame <= 9 ft in height".to_string()),
//!     structure_type: None,
//!     location: None,
//! };
//!
//! // Hf = 3.5, Rμ = 1.3, CAR = 1.0, Rpo = 1.5
//! let result = calculate(&input, ReferenceTables::builtin()?)?;
//! assert!((result.fp() - 1.0769).abs() < 1e-4);
//! # Ok::<(), fpcalc_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{Equation, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::seismic::{
    ductility_factor, fp_coefficient, height_factor, AmplificationBasis, CoefficientInput, FpBound,
    FpCoefficient, HeightFactor,
};
use crate::tables::{
    approximate_period, component_factors, sfrs_factors, ApproximatePeriod, ComponentFactors,
    GradeLocation, ReferenceTables, SfrsFactors,
};

fn default_wp() -> f64 {
    1.0
}

/// Input parameters for an Fp calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "sds_g": 1.2,
///   "ip": 1.5,
///   "ie": 1.5,
///   "height_ft": 80.0,
///   "attachment_height_ft": 64.0,
///   "sfrs": "B3. Building frame system: Steel ordinary concentrically braced frames",
///   "component": "1b. Interior nonstructural walls and partitions: Light frame > 9 ft in height",
///   "structure_type": "All other structural systems"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FpInput {
    /// User label for this calculation (e.g., "P-1", "Level 4 partitions")
    #[serde(default)]
    pub label: String,

    /// Short-period design spectral acceleration SDS (g)
    pub sds_g: f64,

    /// Component importance factor Ip
    pub ip: f64,

    /// Structure importance factor Ie
    pub ie: f64,

    /// Average roof height of the structure above its base, h (ft)
    pub height_ft: f64,

    /// Height of the component attachment above the base, z (ft)
    pub attachment_height_ft: f64,

    /// Component weight Wp. 1.0 gives the per-unit-weight coefficient.
    #[serde(default = "default_wp")]
    pub wp: f64,

    /// SFRS table row name, `None` when no system is selected
    #[serde(default)]
    pub sfrs: Option<String>,

    /// Component table row name
    #[serde(default)]
    pub component: Option<String>,

    /// Period table row name
    #[serde(default)]
    pub structure_type: Option<String>,

    /// Support location; derived from the attachment height when `None`
    #[serde(default)]
    pub location: Option<GradeLocation>,
}

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(())
}

impl FpInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("sds_g", self.sds_g)?;
        if self.sds_g < 0.0 {
            return Err(CalcError::invalid_input(
                "sds_g",
                self.sds_g.to_string(),
                "SDS cannot be negative",
            ));
        }
        require_finite("ip", self.ip)?;
        if self.ip <= 0.0 {
            return Err(CalcError::invalid_input(
                "ip",
                self.ip.to_string(),
                "Component importance factor must be positive",
            ));
        }
        require_finite("ie", self.ie)?;
        if self.ie <= 0.0 {
            return Err(CalcError::invalid_input(
                "ie",
                self.ie.to_string(),
                "Structure importance factor must be positive",
            ));
        }
        require_finite("height_ft", self.height_ft)?;
        if self.height_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "height_ft",
                self.height_ft.to_string(),
                "Building height must be positive",
            ));
        }
        require_finite("attachment_height_ft", self.attachment_height_ft)?;
        if self.attachment_height_ft < 0.0 {
            return Err(CalcError::invalid_input(
                "attachment_height_ft",
                self.attachment_height_ft.to_string(),
                "Attachment height cannot be below the base",
            ));
        }
        require_finite("wp", self.wp)?;
        if self.wp < 0.0 {
            return Err(CalcError::invalid_input(
                "wp",
                self.wp.to_string(),
                "Component weight cannot be negative",
            ));
        }
        Ok(())
    }

    /// Support location used for CAR: explicit, or above grade when z > 0
    pub fn grade_location(&self) -> GradeLocation {
        self.location
            .unwrap_or_else(|| GradeLocation::from_attachment_height(self.attachment_height_ft))
    }
}

/// Results from an Fp calculation, with every intermediate value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FpResult {
    /// Label copied from the input
    pub label: String,

    /// R and Ω₀ used in Rμ
    pub sfrs: SfrsFactors,

    /// False when no SFRS was selected and the zero-overstrength path applied
    pub sfrs_selected: bool,

    /// Support location used for CAR
    pub location: GradeLocation,

    /// CAR and Rpo
    pub component: ComponentFactors,

    /// Approximate period, if a structure type resolved
    pub period: Option<ApproximatePeriod>,

    /// Height factor and shape coefficients
    pub height_factor: HeightFactor,

    /// Structure ductility reduction factor Rμ
    pub rmu: f64,

    /// Fp coefficient, limits and governing value
    pub coefficient: FpCoefficient,

    /// Fp × Wp, in the units of Wp
    pub design_force: f64,

    /// Equations applied, for audit
    pub equations: EquationTracker,
}

impl FpResult {
    /// Design coefficient Fp/Wp
    pub fn fp(&self) -> f64 {
        self.coefficient.fp
    }

    /// Which value governs Fp
    pub fn governing_condition(&self) -> FpBound {
        self.coefficient.governing
    }
}

/// Calculate the Fp coefficient.
///
/// # Returns
///
/// * `Ok(FpResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &FpInput, tables: &ReferenceTables) -> CalcResult<FpResult> {
    input.validate()?;
    let context = if input.label.is_empty() { "Fp" } else { input.label.as_str() };
    let mut equations = EquationTracker::new();

    let selected = sfrs_factors(&tables.sfrs, input.sfrs.as_deref());
    let sfrs_selected = selected.is_some();
    let sfrs = selected.unwrap_or(SfrsFactors::NOT_SELECTED);

    let location = input.grade_location();
    let component = component_factors(&tables.components, input.component.as_deref(), location);

    let period = approximate_period(&tables.periods, input.structure_type.as_deref(), input.height_ft);
    if period.is_some() {
        equations.record(Equation::ApproximatePeriod, context);
    }

    let height_factor = height_factor(input.attachment_height_ft, input.height_ft, period.map(|p| p.ta));
    match height_factor.basis {
        AmplificationBasis::Period => {
            equations.record(Equation::ShapeCoefficientA1, context);
            equations.record(Equation::ShapeCoefficientA2, context);
            equations.record(Equation::HeightFactorWithPeriod, context);
        }
        AmplificationBasis::HeightRatio => equations.record(Equation::HeightFactorWithoutPeriod, context),
        // Fixed value, no formula applied
        AmplificationBasis::DegenerateFallback => {}
    }

    let rmu = ductility_factor(sfrs.r, input.ie, sfrs.omega_0);
    equations.record(Equation::DuctilityReduction, context);

    let coefficient = fp_coefficient(&CoefficientInput {
        sds_g: input.sds_g,
        ip: input.ip,
        wp: input.wp,
        hf: height_factor.hf,
        rmu,
        car: component.car,
        rpo: component.rpo,
    });
    equations.record(Equation::DesignForce, context);
    equations.record(Equation::DesignForceMaximum, context);
    equations.record(Equation::DesignForceMinimum, context);

    log::info!("{}: Fp = {:.3} Wp ({})", context, coefficient.fp, coefficient.governing);

    Ok(FpResult {
        label: input.label.clone(),
        sfrs,
        sfrs_selected,
        location,
        component,
        period,
        height_factor,
        rmu,
        design_force: coefficient.fp * input.wp,
        coefficient,
        equations,
    })
}
