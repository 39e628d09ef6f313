use serde::{Deserialize, Serialize};

use super::driver::recommend_driver_capacity;
use super::power_density::watts_per_meter;
use super::voltage_drop::max_run_length;
use super::wire_gauge::recommend_wire_gauge;
use crate::units::{to_meters, LengthUnit};

/// 드라이버 권장 전류에 적용하는 고정 여유율 (20%).
pub const SAFETY_MARGIN: f64 = 1.2;

/// LED 스트립 사이징 입력값.
///
/// 전압/길이/개수가 0보다 크다는 조건은 호출자가 보장한다
/// (`request` 모듈의 검증을 거친 값으로 가정).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 공급 전압 [V]
    pub voltage: f64,
    /// LED 밀도 [LEDs/m]. 30~240 범위로 보정되어 있다.
    pub density: u32,
    /// 스트립 1개 길이 (length_unit 기준)
    pub length: f64,
    /// 스트립 개수
    pub pieces: u32,
    #[serde(default)]
    pub length_unit: LengthUnit,
}

/// 사이징 결과. 수치는 모두 소수 둘째 자리로 반올림된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 총 소비전력 [W]
    pub power: f64,
    /// 소비 전류 [A]
    pub current: f64,
    /// 여유율 20% 반영 권장 전류 [A]
    pub recommended: f64,
    pub total_length_meters: f64,
    pub wire_gauge: String,
    /// 전압강하 5% 기준 최대 길이 [m]
    pub max_run: f64,
    pub standard_driver: String,
}

/// 소수 둘째 자리 반올림.
///
/// 2진 값의 정확한 10진 전개를 기준으로 반올림하며, 정확히 반인 경우는 짝수 쪽으로
/// 보낸다 (0.125 → 0.12, 0.375 → 0.38). `{:.2}` 포매터가 이 규칙을 따른다.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// 전력/전류/배선/드라이버/최대 길이를 한 번에 계산한다.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let length_m = to_meters(input.length, input.length_unit);
    let pieces = f64::from(input.pieces);

    let total_watts = watts_per_meter(input.density) * length_m * pieces;
    let current = total_watts / input.voltage;
    let recommended = current * SAFETY_MARGIN;

    CalculationResult {
        power: round2(total_watts),
        current: round2(current),
        recommended: round2(recommended),
        total_length_meters: round2(length_m * pieces),
        wire_gauge: recommend_wire_gauge(current).to_string(),
        max_run: round2(max_run_length(input.voltage, current)),
        standard_driver: recommend_driver_capacity(recommended),
    }
}

/// 단위를 코드 문자열(m/cm/in/ft)로 받는 편의 진입점. 모르는 코드는 미터로 취급한다.
pub fn calculate_led_requirements(
    voltage: f64,
    density: u32,
    length: f64,
    pieces: u32,
    length_unit: &str,
) -> CalculationResult {
    calculate(&CalculationInput {
        voltage,
        density,
        length,
        pieces,
        length_unit: LengthUnit::from_code_or_meter(length_unit),
    })
}
