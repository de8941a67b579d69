//! Property tests for the Fp formula chain.

use fpcalc_core::calculations::fp::{calculate, FpInput};
use fpcalc_core::seismic::{ductility_factor, fp_coefficient, height_factor, AmplificationBasis, CoefficientInput, RMU_MIN};
use fpcalc_core::tables::{
    approximate_period, component_factors, sfrs_factors, ComponentRow, GradeLocation, PeriodRow, ReferenceTables, SfrsRow,
};
use proptest::prelude::*;

fn pad_and_recase(name: &str, left: usize, right: usize, upper: bool) -> String {
    let cased = if upper { name.to_uppercase() } else { name.to_lowercase() };
    format!("{}{}{}", " ".repeat(left), cased, " ".repeat(right))
}

proptest! {
    #[test]
    fn fp_always_within_limits(
        sds in 0.0f64..3.0,
        ip in 0.0f64..3.0,
        hf in 1.0f64..3.5,
        rmu in 1.3f64..4.0,
        car in 0.5f64..5.0,
        rpo in 0.5f64..3.0,
    ) {
        let fp = fp_coefficient(&CoefficientInput { sds_g: sds, ip, wp: 1.0, hf, rmu, car, rpo });
        prop_assert!(fp.fp >= fp.fp_min);
        prop_assert!(fp.fp <= fp.fp_max);
        prop_assert!((fp.fp_max - 16.0 / 3.0 * fp.fp_min).abs() < 1e-9);
        prop_assert!(fp.fp_min >= 0.0);
    }

    #[test]
    fn rmu_never_below_floor(r in 0.0f64..10.0, ie in 0.5f64..2.0, omega_0 in 0.0f64..4.0) {
        prop_assert!(ductility_factor(r, ie, omega_0) >= RMU_MIN);
    }

    #[test]
    fn zero_overstrength_gives_floor(r in 0.0f64..10.0, ie in 0.5f64..2.0) {
        prop_assert_eq!(ductility_factor(r, ie, 0.0), RMU_MIN);
    }

    #[test]
    fn attachment_above_roof_matches_roof(
        h in 1.0f64..500.0,
        excess in 0.0f64..500.0,
        ta in prop::option::of(0.05f64..5.0),
    ) {
        prop_assert_eq!(height_factor(h + excess, h, ta), height_factor(h, h, ta));
    }

    #[test]
    fn hf_at_base_is_unity(h in 1.0f64..500.0, ta in 0.05f64..5.0) {
        let result = height_factor(0.0, h, Some(ta));
        prop_assert_eq!(result.basis, AmplificationBasis::Period);
        prop_assert!((result.hf - 1.0).abs() < 1e-12);
    }

    #[test]
    fn hf_at_roof_sums_coefficients(h in 1.0f64..500.0, ta in 0.05f64..5.0) {
        let result = height_factor(h, h, Some(ta));
        let a1 = result.a1.unwrap();
        let a2 = result.a2.unwrap();
        prop_assert!((result.hf - (1.0 + a1 + a2)).abs() < 1e-12);
        prop_assert!(a1 <= 2.5);
        prop_assert!(a2 >= 0.0);
    }

    #[test]
    fn lookups_ignore_case_and_padding(left in 0usize..4, right in 0usize..4, upper in any::<bool>()) {
        let sfrs = vec![SfrsRow { system: "Steel Frame".to_string(), r: 8.0, omega_0: 3.0 }];
        let components = vec![ComponentRow {
            component: "Partition".to_string(),
            car_above: Some(2.2),
            car_below: None,
            rpo: Some(2.0),
        }];
        let periods = vec![PeriodRow { structure_type: "Steel moment-resisting frames".to_string(), ct: 0.028, x: 0.8 }];

        let key = pad_and_recase("Steel Frame", left, right, upper);
        prop_assert_eq!(sfrs_factors(&sfrs, Some(&key)), sfrs_factors(&sfrs, Some("steel frame")));
        prop_assert_eq!(sfrs_factors(&sfrs, Some(&key)).unwrap().r, 8.0);

        let key = pad_and_recase("Partition", left, right, upper);
        let factors = component_factors(&components, Some(&key), GradeLocation::AboveGrade);
        prop_assert_eq!(factors.car, 2.2);

        let key = pad_and_recase("Steel moment-resisting frames", left, right, upper);
        prop_assert!(approximate_period(&periods, Some(&key), 100.0).is_some());
    }
}

#[test]
fn end_to_end_unselected_building() {
    let input = FpInput {
        label: "E2E".to_string(),
        sds_g: 1.0,
        ip: 1.5,
        ie: 1.5,
        height_ft: 60.0,
        attachment_height_ft: 60.0,
        wp: 1.0,
        sfrs: None,
        component: Some("Not a component".to_string()),
        structure_type: None,
        location: None,
    };
    let result = calculate(&input, ReferenceTables::builtin().unwrap()).unwrap();

    assert_eq!(result.height_factor.hf, 3.5);
    assert_eq!(result.rmu, 1.3);
    assert_eq!(result.component.car, 1.0);
    assert_eq!(result.component.rpo, 1.0);
    // Rpo falls back to 1.0 on a miss: 0.4 * 1.5 * (3.5 / 1.3) = 1.615
    assert!((result.fp() - 0.4 * 1.5 * 3.5 / 1.3).abs() < 1e-12);
}

#[test]
fn end_to_end_max_clamp() {
    let fp = fp_coefficient(&CoefficientInput {
        sds_g: 1.0,
        ip: 1.5,
        wp: 1.0,
        hf: 3.5,
        rmu: 1.3,
        car: 5.0,
        rpo: 1.0,
    });
    assert!((fp.fp_calculated - 8.0769).abs() < 1e-3);
    assert!((fp.fp - 2.4).abs() < 1e-12);
}

#[test]
fn period_miss_takes_height_ratio_branch() {
    let tables = ReferenceTables::builtin().unwrap();
    let period = approximate_period(&tables.periods, Some("Tensegrity dome"), 60.0);
    assert_eq!(period, None);

    let hf = height_factor(30.0, 60.0, period.map(|p| p.ta));
    assert_eq!(hf.basis, AmplificationBasis::HeightRatio);
    assert!((hf.hf - 2.25).abs() < 1e-12);
}
