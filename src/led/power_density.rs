/// 밀도(LEDs/m)별 미터당 소비전력(W/m) 보정표. 키 오름차순이어야 한다.
pub const POWER_DENSITY_TABLE: &[(u32, f64)] = &[
    (30, 2.4),
    (60, 4.8),
    (90, 7.2),
    (120, 9.6),
    (144, 11.5),
    (150, 12.0),
    (180, 14.4),
    (210, 16.8),
    (240, 19.2),
];

fn table_value(density: u32) -> Option<f64> {
    POWER_DENSITY_TABLE
        .iter()
        .find(|(d, _)| *d == density)
        .map(|(_, w)| *w)
}

/// LED 밀도에 해당하는 미터당 소비전력[W/m]을 구한다.
///
/// - 표에 있는 밀도는 표 값을 그대로 쓴다.
/// - 최소 키보다 작거나 최대 키보다 크면 경계 값을 밀도 비율로 비례 환산한다.
///   (보간이 아니라 비례 외삽이며, 물리적으로 검증된 모델은 아니다.)
/// - 두 키 사이는 선형 보간한다.
pub fn watts_per_meter(density: u32) -> f64 {
    if let Some(w) = table_value(density) {
        return w;
    }

    let (min_key, min_w) = POWER_DENSITY_TABLE[0];
    let (max_key, max_w) = POWER_DENSITY_TABLE[POWER_DENSITY_TABLE.len() - 1];

    if density < min_key {
        return min_w * (f64::from(density) / f64::from(min_key));
    }
    if density > max_key {
        return max_w * (f64::from(density) / f64::from(max_key));
    }

    // 여기서는 min_key < density < max_key 이므로 양쪽 이웃이 반드시 존재한다.
    let (lower, w_lower) = POWER_DENSITY_TABLE
        .iter()
        .rev()
        .find(|(d, _)| *d <= density)
        .copied()
        .unwrap_or((min_key, min_w));
    let (upper, w_upper) = POWER_DENSITY_TABLE
        .iter()
        .find(|(d, _)| *d >= density)
        .copied()
        .unwrap_or((max_key, max_w));

    if lower == upper {
        return w_lower;
    }
    let ratio = f64::from(density - lower) / f64::from(upper - lower);
    w_lower + ratio * (w_upper - w_lower)
}
