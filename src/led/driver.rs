/// 표준 정전압 드라이버 용량[A]. 오름차순.
pub const DRIVER_CAPACITIES_A: &[f64] = &[3.0, 5.0, 8.5, 10.0, 12.5, 16.5, 20.0, 25.0, 30.0, 33.0];

/// 여유율이 반영된 전류[A] 이상인 가장 작은 표준 용량을 `"{용량}A"` 형식으로 반환한다.
///
/// 모든 표준 용량을 넘으면 최대 용량과 함께 복수 드라이버 사용을 안내한다.
/// f64 Display 특성상 정수 용량은 `10A`, 소수 용량은 `8.5A` 로 표기된다.
pub fn recommend_driver_capacity(required_current: f64) -> String {
    if let Some(capacity) = DRIVER_CAPACITIES_A
        .iter()
        .find(|cap| required_current <= **cap)
    {
        return format!("{capacity}A");
    }
    let largest = DRIVER_CAPACITIES_A[DRIVER_CAPACITIES_A.len() - 1];
    format!("{largest}A (multiple drivers recommended)")
}

/// 권장 문자열에서 용량 값[A]만 추출한다. 정렬/비교용.
pub fn capacity_of(label: &str) -> Option<f64> {
    label.split('A').next()?.trim().parse().ok()
}
