//! # Seismic Design Force Formulas
//!
//! Closed-form formulas for the horizontal seismic design force on a
//! nonstructural component, ASCE 7-22 Chapter 13:
//!
//! ```text
//! Hf  = 1 + a1 (z/h) + a2 (z/h)^10            (13.3-4)
//! a1  = 1/Ta ≤ 2.5
//! a2  = [1 - (0.4/Ta)^2] ≥ 0
//! Hf  = 1 + 2.5 (z/h)                         (13.3-5, Ta unknown)
//! Rμ  = [1.1 R / (Ie Ω₀)]^(1/2) ≥ 1.3          (13.3-6)
//! Fp  = 0.4 SDS Ip Wp (Hf/Rμ)(CAR/Rpo)        (13.3-1)
//! Fp ≥ 0.3 SDS Ip Wp                          (13.3-3)
//! Fp ≤ 1.6 SDS Ip Wp                          (13.3-2)
//! ```
//!
//! All functions are pure and infallible. Degenerate inputs fall through to
//! explicit fallback branches rather than errors.

pub mod amplification;
pub mod coefficient;
pub mod demand;

pub use amplification::{height_factor, AmplificationBasis, HeightFactor};
pub use coefficient::{fp_coefficient, CoefficientInput, FpBound, FpCoefficient};
pub use demand::{ductility_factor, RMU_MIN};

