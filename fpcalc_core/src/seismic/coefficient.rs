//! # Fp Coefficient
//!
//! Assembles the seismic design force coefficient Fp/Wp and applies the
//! ASCE 7-22 upper and lower limits.
//!
//! ## Example
//!
//! ```rust
//! use fpcalc_core::seismic::{fp_coefficient, CoefficientInput, FpBound};
//!
//! let input = CoefficientInput {
//!     sds_g: 1.0,
//!     ip: 1.5,
//!     wp: 1.0,
//!     hf: 3.5,
//!     rmu: 1.3,
//!     car: 1.0,
//!     rpo: 1.5,
//! };
//! let fp = fp_coefficient(&input);
//! assert!((fp.fp - 1.0769).abs() < 1e-4);
//! assert_eq!(fp.governing, FpBound::Calculated);
//! ```

use serde::{Deserialize, Serialize};

/// Inputs to the Fp assembly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientInput {
    /// Design spectral acceleration SDS (g)
    pub sds_g: f64,
    /// Component importance factor Ip
    pub ip: f64,
    /// Component weight Wp.
    ///
    /// Not part of the coefficient: Fp here is per unit weight.
    pub wp: f64,
    /// Height factor Hf
    pub hf: f64,
    /// Structure ductility reduction factor Rμ
    pub rmu: f64,
    /// Component amplification factor CAR
    pub car: f64,
    /// Component strength factor Rpo
    pub rpo: f64,
}

/// Which value Fp ended up at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FpBound {
    /// The formula value, within limits
    Calculated,
    /// Raised to the lower limit
    Minimum,
    /// Capped at the upper limit
    Maximum,
}

impl FpBound {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            FpBound::Calculated => "Calculated",
            FpBound::Minimum => "Minimum (Eq. 13.3-3)",
            FpBound::Maximum => "Maximum (Eq. 13.3-2)",
        }
    }
}

impl std::fmt::Display for FpBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Fp coefficient with its unclamped intermediates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FpCoefficient {
    /// Design coefficient, within [fp_min, fp_max]
    pub fp: f64,
    /// 0.4 SDS Ip (Hf/Rμ)(CAR/Rpo)
    pub fp_calculated: f64,
    /// 0.3 SDS Ip
    pub fp_min: f64,
    /// 1.6 SDS Ip
    pub fp_max: f64,
    /// Which value governs
    pub governing: FpBound,
}

impl FpCoefficient {
    /// True if a code limit replaced the formula value
    pub fn is_clamped(&self) -> bool {
        self.governing != FpBound::Calculated
    }
}

/// Compute Fp and its limits.
pub fn fp_coefficient(input: &CoefficientInput) -> FpCoefficient {
    let base = input.sds_g * input.ip;
    let fp_calculated = 0.4 * base * (input.hf / input.rmu) * (input.car / input.rpo);
    let fp_min = 0.3 * base;
    let fp_max = 1.6 * base;

    // f64::clamp panics when min > max
    let fp = fp_calculated.min(fp_max).max(fp_min);
    let governing = if fp_calculated > fp_max {
        FpBound::Maximum
    } else if fp_calculated < fp_min {
        FpBound::Minimum
    } else {
        FpBound::Calculated
    };

    log::debug!(
        "Fp: calculated = {:.4}, min = {:.4}, max = {:.4} -> {:.4} ({})",
        fp_calculated,
        fp_min,
        fp_max,
        fp,
        governing
    );

    FpCoefficient {
        fp,
        fp_calculated,
        fp_min,
        fp_max,
        governing,
    }
}
