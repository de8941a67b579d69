//! # Height Factor Hf
//!
//! Amplification of floor acceleration with height in the structure.

use serde::{Deserialize, Serialize};

/// Hf returned when the period or the building height is not positive.
///
/// This equals the Ta-unknown formula at the roof, 1 + 2.5.
pub const HF_DEGENERATE: f64 = 3.5;

/// Which branch produced Hf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmplificationBasis {
    /// No period available: Hf = 1 + 2.5 (z/h)
    HeightRatio,
    /// Period-based shape: Hf = 1 + a1 (z/h) + a2 (z/h)^10
    Period,
    /// Ta ≤ 0 or h ≤ 0: fixed fallback value
    DegenerateFallback,
}

/// Height factor and its shape coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightFactor {
    /// Height factor Hf
    pub hf: f64,
    /// Shape coefficient a1, only on the period branch
    pub a1: Option<f64>,
    /// Shape coefficient a2, only on the period branch
    pub a2: Option<f64>,
    /// Branch that produced the result
    pub basis: AmplificationBasis,
}

/// Compute Hf for attachment height `z_ft` in a building of height `h_ft`.
///
/// `z_ft` is clamped to `h_ft`. With `ta` absent the height-ratio formula is
/// used as is, so callers must keep `h_ft > 0` on that path.
///
/// # Example
///
/// ```rust
/// use fpcalc_core::seismic::height_factor;
///
/// let roof = height_factor(60.0, 60.0, None);
/// assert_eq!(roof.hf, 3.5);
/// assert_eq!(roof.a1, None);
/// ```
pub fn height_factor(z_ft: f64, h_ft: f64, ta: Option<f64>) -> HeightFactor {
    let z_ft = if z_ft > h_ft { h_ft } else { z_ft };

    let Some(ta) = ta else {
        return HeightFactor {
            hf: 1.0 + 2.5 * (z_ft / h_ft),
            a1: None,
            a2: None,
            basis: AmplificationBasis::HeightRatio,
        };
    };

    if ta <= 0.0 || h_ft <= 0.0 {
        log::warn!("Degenerate height factor input (Ta = {}, h = {}), using Hf = {}", ta, h_ft, HF_DEGENERATE);
        return HeightFactor {
            hf: HF_DEGENERATE,
            a1: None,
            a2: None,
            basis: AmplificationBasis::DegenerateFallback,
        };
    }

    let a1 = (1.0 / ta).min(2.5);
    let a2 = (1.0 - (0.4 / ta).powi(2)).max(0.0);
    let ratio = z_ft / h_ft;
    HeightFactor {
        hf: 1.0 + a1 * ratio + a2 * ratio.powi(10),
        a1: Some(a1),
        a2: Some(a2),
        basis: AmplificationBasis::Period,
    }
}
