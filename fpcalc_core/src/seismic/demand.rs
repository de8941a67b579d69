//! # Structure Ductility Reduction Factor Rμ

/// Lower limit on Rμ
pub const RMU_MIN: f64 = 1.3;

/// Rμ = sqrt(1.1 R / (Ie Ω₀)), not less than 1.3.
///
/// When Ie × Ω₀ is zero (no SFRS selected) the floor is returned directly.
/// Negative R is outside the contract; the NaN root also resolves to the floor.
///
/// # Example
///
/// ```rust
/// use fpcalc_core::seismic::ductility_factor;
///
/// assert_eq!(ductility_factor(0.0, 1.0, 0.0), 1.3);
/// assert!((ductility_factor(8.0, 1.0, 3.0) - 1.7127).abs() < 1e-3);
/// ```
pub fn ductility_factor(r: f64, ie: f64, omega_0: f64) -> f64 {
    let denominator = ie * omega_0;
    if denominator == 0.0 {
        log::debug!("Ie x Omega_0 = 0, Rmu = {}", RMU_MIN);
        return RMU_MIN;
    }
    (1.1 * r / denominator).sqrt().max(RMU_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_overstrength_returns_floor() {
        assert_eq!(ductility_factor(0.0, 1.0, 0.0), RMU_MIN);
        assert_eq!(ductility_factor(8.0, 1.5, 0.0), RMU_MIN);
        assert_eq!(ductility_factor(8.0, 0.0, 3.0), RMU_MIN);
    }

    #[test]
    fn test_general_case() {
        let rmu = ductility_factor(8.0, 1.0, 3.0);
        let expected = (1.1_f64 * 8.0 / 3.0).sqrt();
        assert!((rmu - expected).abs() < 1e-12);
        assert!(rmu > RMU_MIN);
    }

    #[test]
    fn test_floor_applies() {
        // sqrt(1.1 * 3.25 / (1.5 * 2.0)) = 1.09 -> 1.3
        assert_eq!(ductility_factor(3.25, 1.5, 2.0), RMU_MIN);
    }
}
