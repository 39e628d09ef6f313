//! 보간/외삽/단위/드라이버 선택의 성질 테스트.
use led_driver_calculator::led::{
    calculate, calculate_led_requirements, driver, recommend_driver_capacity, watts_per_meter,
    CalculationInput, DRIVER_CAPACITIES_A, POWER_DENSITY_TABLE,
};
use led_driver_calculator::units::LengthUnit;
use proptest::prelude::*;

proptest! {
    #[test]
    fn interpolation_stays_between_neighbours(idx in 0usize..8, offset in 0u32..1000) {
        let (lo, w_lo) = POWER_DENSITY_TABLE[idx];
        let (hi, w_hi) = POWER_DENSITY_TABLE[idx + 1];
        let density = lo + 1 + offset % (hi - lo - 1);
        let w = watts_per_meter(density);
        prop_assert!(w > w_lo && w < w_hi, "density {density}: {w} not in ({w_lo}, {w_hi})");
    }

    #[test]
    fn below_table_scales_with_density(density in 1u32..30) {
        let w = watts_per_meter(density);
        let expected = 2.4 * f64::from(density) / 30.0;
        prop_assert!((w - expected).abs() < 1e-12);
        prop_assert!(w < 2.4);
    }

    #[test]
    fn above_table_scales_with_density(density in 241u32..100_000) {
        let w = watts_per_meter(density);
        let expected = 19.2 * f64::from(density) / 240.0;
        prop_assert!((w - expected).abs() < 1e-9 * expected.max(1.0));
        prop_assert!(w > 19.2);
    }

    #[test]
    fn calculate_is_deterministic(
        voltage in 1.0f64..48.0,
        density in 30u32..=240,
        length in 0.01f64..50.0,
        pieces in 1u32..20,
    ) {
        let input = CalculationInput {
            voltage,
            density,
            length,
            pieces,
            length_unit: LengthUnit::Meter,
        };
        prop_assert_eq!(calculate(&input), calculate(&input));
    }

    #[test]
    fn centimeter_input_matches_meter_input(
        voltage in 5.0f64..48.0,
        density in 30u32..=240,
        length_cm in 1u32..10_000,
        pieces in 1u32..10,
    ) {
        let length_m = f64::from(length_cm) / 100.0;
        let cm = calculate_led_requirements(voltage, density, f64::from(length_cm), pieces, "cm");
        let m = calculate_led_requirements(voltage, density, length_m, pieces, "m");
        // 환산 오차로 반올림 경계가 한 칸 달라질 수 있다.
        prop_assert!((cm.power - m.power).abs() <= 0.0100001);
        prop_assert!((cm.current - m.current).abs() <= 0.0100001);
        prop_assert!((cm.total_length_meters - m.total_length_meters).abs() <= 0.0100001);
    }

    #[test]
    fn driver_capacity_never_decreases(a in 0.0f64..50.0, b in 0.0f64..50.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let cap_low = driver::capacity_of(&recommend_driver_capacity(low));
        let cap_high = driver::capacity_of(&recommend_driver_capacity(high));
        prop_assert!(cap_low <= cap_high, "{low} → {cap_low:?}, {high} → {cap_high:?}");
    }

    #[test]
    fn selected_driver_covers_required_current(required in 0.0f64..33.0) {
        let label = recommend_driver_capacity(required);
        let cap = driver::capacity_of(&label).unwrap_or(0.0);
        prop_assert!(cap >= required);
        prop_assert!(DRIVER_CAPACITIES_A.contains(&cap));
        prop_assert!(!label.contains("multiple"));
    }

    #[test]
    fn above_largest_driver_recommends_multiple(required in 33.0001f64..1000.0) {
        prop_assert_eq!(
            recommend_driver_capacity(required),
            "33A (multiple drivers recommended)"
        );
    }
}
