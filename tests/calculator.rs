//! 계산 코어 회귀 테스트. 알려진 입력/출력 조합과 표 경계값을 확인한다.
use led_driver_calculator::led::{
    calculate, calculate_led_requirements, driver, max_run_length, recommend_driver_capacity,
    recommend_wire_gauge, round2, watts_per_meter, CalculationInput, MAX_RUN_SENTINEL_M,
};
use led_driver_calculator::units::LengthUnit;

fn assert_close(label: &str, actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1e-9,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.3e})"
    );
}

#[test]
fn basic_single_strip() {
    // 60 LEDs/m = 4.8 W/m, 5 m → 24 W, 12 V → 2 A
    let r = calculate_led_requirements(12.0, 60, 5.0, 1, "m");
    assert_close("power", r.power, 24.0);
    assert_close("current", r.current, 2.0);
    assert_close("recommended", r.recommended, 2.4);
    assert_close("total_length", r.total_length_meters, 5.0);
    assert_close("max_run", r.max_run, 6.0);
    assert_eq!(r.wire_gauge, "22 AWG");
    assert_eq!(r.standard_driver, "3A");
}

#[test]
fn multiple_strips_scale_power() {
    let r = calculate_led_requirements(24.0, 120, 2.0, 3, "m");
    assert_close("power", r.power, 57.6);
    assert_close("current", r.current, 2.4);
    assert_close("recommended", r.recommended, 2.88);
    assert_close("total_length", r.total_length_meters, 6.0);
    assert_close("max_run", r.max_run, 10.0);
}

#[test]
fn high_density_rounds_current() {
    let r = calculate_led_requirements(12.0, 144, 1.0, 1, "m");
    assert_close("power", r.power, 11.5);
    assert_close("current", r.current, 0.96);
    assert_close("recommended", r.recommended, 1.15);
    assert_close("max_run", r.max_run, 12.52);
}

#[test]
fn fractional_length_rounding() {
    // 2.4 W/m × 3.33 m × 2 = 15.984 W, 5 V → 3.1968 A
    let r = calculate_led_requirements(5.0, 30, 3.33, 2, "m");
    assert_close("power", r.power, 15.98);
    assert_close("current", r.current, 3.2);
    assert_close("recommended", r.recommended, 3.84);
    assert_close("total_length", r.total_length_meters, 6.66);
    assert_close("max_run", r.max_run, 1.56);
    assert_eq!(r.wire_gauge, "20 AWG");
    assert_eq!(r.standard_driver, "5A");
}

#[test]
fn table_densities_are_exact() {
    assert_close("30", watts_per_meter(30), 2.4);
    assert_close("144", watts_per_meter(144), 11.5);
    assert_close("150", watts_per_meter(150), 12.0);
    assert_close("240", watts_per_meter(240), 19.2);
}

#[test]
fn densities_between_keys_interpolate() {
    // 90 (7.2) ↔ 120 (9.6)
    assert_close("100", watts_per_meter(100), 8.0);
    // 144 (11.5) ↔ 150 (12.0)
    assert_close("147", watts_per_meter(147), 11.75);
}

#[test]
fn densities_outside_table_scale_proportionally() {
    assert_close("15", watts_per_meter(15), 1.2);
    assert_close("300", watts_per_meter(300), 24.0);
    assert!(watts_per_meter(29) < 2.4);
    assert!(watts_per_meter(241) > 19.2);
}

#[test]
fn wire_gauge_breakpoints_are_exclusive() {
    assert_eq!(recommend_wire_gauge(0.0), "22 AWG");
    assert_eq!(recommend_wire_gauge(2.99), "22 AWG");
    assert_eq!(recommend_wire_gauge(3.0), "20 AWG");
    assert_eq!(recommend_wire_gauge(6.99), "18 AWG");
    assert_eq!(recommend_wire_gauge(7.0), "16 AWG");
    assert_eq!(recommend_wire_gauge(10.0), "14 AWG");
    assert_eq!(recommend_wire_gauge(19.99), "12 AWG");
    assert_eq!(recommend_wire_gauge(20.0), "10 AWG or thicker");
    assert_eq!(recommend_wire_gauge(250.0), "10 AWG or thicker");
}

#[test]
fn driver_capacity_picks_first_fit() {
    assert_eq!(recommend_driver_capacity(3.0), "3A");
    assert_eq!(recommend_driver_capacity(3.01), "5A");
    assert_eq!(recommend_driver_capacity(8.0), "8.5A");
    assert_eq!(recommend_driver_capacity(12.5), "12.5A");
    assert_eq!(recommend_driver_capacity(16.0), "16.5A");
    assert_eq!(recommend_driver_capacity(33.0), "33A");
    assert_eq!(
        recommend_driver_capacity(33.01),
        "33A (multiple drivers recommended)"
    );
    assert_eq!(driver::capacity_of("16.5A"), Some(16.5));
    assert_eq!(
        driver::capacity_of("33A (multiple drivers recommended)"),
        Some(33.0)
    );
}

#[test]
fn max_run_sentinel_for_non_positive_current() {
    assert_close("zero", max_run_length(12.0, 0.0), MAX_RUN_SENTINEL_M);
    assert_close("negative", max_run_length(12.0, -1.5), MAX_RUN_SENTINEL_M);
    // 12 V × 5% = 0.6 V, 2 A × 0.05 Ω/m → 6 m
    assert_close("normal", max_run_length(12.0, 2.0), 6.0);
}

#[test]
fn zero_density_hits_sentinel_through_calculate() {
    let r = calculate_led_requirements(12.0, 0, 5.0, 1, "m");
    assert_close("power", r.power, 0.0);
    assert_close("current", r.current, 0.0);
    assert_close("max_run", r.max_run, 100.0);
    assert_eq!(r.standard_driver, "3A");
}

#[test]
fn centimeters_match_meters() {
    let cm = calculate_led_requirements(12.0, 60, 100.0, 2, "cm");
    let m = calculate_led_requirements(12.0, 60, 1.0, 2, "m");
    assert_eq!(cm, m);
}

#[test]
fn feet_and_inches_normalize() {
    let ft = calculate(&CalculationInput {
        voltage: 12.0,
        density: 60,
        length: 10.0,
        pieces: 1,
        length_unit: LengthUnit::Foot,
    });
    assert_close("ft length", ft.total_length_meters, 3.05);
    let inch = calculate(&CalculationInput {
        voltage: 12.0,
        density: 60,
        length: 100.0,
        pieces: 1,
        length_unit: LengthUnit::Inch,
    });
    assert_close("in length", inch.total_length_meters, 2.54);
}

#[test]
fn unknown_unit_code_is_treated_as_meters() {
    let unknown = calculate_led_requirements(12.0, 60, 5.0, 1, "yd");
    let meters = calculate_led_requirements(12.0, 60, 5.0, 1, "m");
    assert_eq!(unknown, meters);
    assert_eq!(LengthUnit::from_code_or_meter("furlong"), LengthUnit::Meter);
    assert_eq!(LengthUnit::from_code("furlong"), None);
}

#[test]
fn heavy_load_needs_multiple_drivers() {
    // 19.2 W/m × 20 m = 384 W, 12 V → 32 A, ×1.2 = 38.4 A
    let r = calculate_led_requirements(12.0, 240, 20.0, 1, "m");
    assert_close("current", r.current, 32.0);
    assert_eq!(r.wire_gauge, "10 AWG or thicker");
    assert_eq!(r.standard_driver, "33A (multiple drivers recommended)");
}

#[test]
fn result_serializes_with_contract_keys() {
    let r = calculate_led_requirements(12.0, 60, 5.0, 1, "m");
    let v = serde_json::to_value(&r).expect("serialize");
    for key in [
        "power",
        "current",
        "recommended",
        "total_length_meters",
        "wire_gauge",
        "max_run",
        "standard_driver",
    ] {
        assert!(v.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn rounding_follows_exact_decimal_value_with_ties_to_even() {
    assert_eq!(round2(0.125), 0.12);
    assert_eq!(round2(0.375), 0.38);
    assert_eq!(round2(2.125), 2.12);
    // 0.015, 1.005는 2진 값이 반보다 약간 작다
    assert_eq!(round2(0.015), 0.01);
    assert_eq!(round2(1.005), 1.0);
    assert_eq!(round2(2.675), 2.67);
    assert_eq!(round2(24.0), 24.0);
}

#[test]
fn tie_lengths_round_like_reference_values() {
    for (length, expected) in [(0.125, 0.12), (2.125, 2.12), (0.015, 0.01)] {
        let r = calculate_led_requirements(12.0, 60, length, 1, "m");
        assert_eq!(r.total_length_meters, expected, "length {length}");
    }
}
