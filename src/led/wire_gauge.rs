/// (전류 상한[A, 미포함], 권장 AWG) 구간표. 상한 오름차순.
pub const WIRE_GAUGE_BREAKPOINTS: &[(f64, &str)] = &[
    (3.0, "22 AWG"),
    (5.0, "20 AWG"),
    (7.0, "18 AWG"),
    (10.0, "16 AWG"),
    (15.0, "14 AWG"),
    (20.0, "12 AWG"),
];

/// 마지막 구간 이상의 전류에 대한 권장값.
pub const WIRE_GAUGE_FALLBACK: &str = "10 AWG or thicker";

/// 전류[A]에 맞는 배선 굵기를 반환한다.
pub fn recommend_wire_gauge(current: f64) -> &'static str {
    WIRE_GAUGE_BREAKPOINTS
        .iter()
        .find(|(upper, _)| current < *upper)
        .map(|(_, label)| *label)
        .unwrap_or(WIRE_GAUGE_FALLBACK)
}
