/// 허용 전압강하 비율 (5%).
pub const ALLOWED_DROP_RATIO: f64 = 0.05;

/// 스트립 저항 근사값 [Ω/m]. 실제 값은 제품에 따라 다르다.
pub const STRIP_RESISTANCE_OHM_PER_M: f64 = 0.05;

/// 부하 전류가 0 이하일 때 반환하는 최대 길이[m]. 사실상 제한 없음을 뜻한다.
pub const MAX_RUN_SENTINEL_M: f64 = 100.0;

/// 전압강하 기준 최대 배선 길이[m]를 추정한다 (V = I·R, 저항 일정 가정).
pub fn max_run_length(voltage: f64, current: f64) -> f64 {
    let drop_limit = voltage * ALLOWED_DROP_RATIO;
    if current > 0.0 {
        drop_limit / (current * STRIP_RESISTANCE_OHM_PER_M)
    } else {
        MAX_RUN_SENTINEL_M
    }
}
