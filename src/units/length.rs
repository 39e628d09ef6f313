use serde::{Deserialize, Serialize};

/// 스트립 길이 입력 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Meter,
        LengthUnit::Centimeter,
        LengthUnit::Inch,
        LengthUnit::Foot,
    ];

    /// 1 단위당 미터 환산 계수.
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }

    /// 단위 코드(m/cm/in/ft)를 엄격하게 해석한다. 모르는 코드는 None.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "m" => Some(LengthUnit::Meter),
            "cm" => Some(LengthUnit::Centimeter),
            "in" => Some(LengthUnit::Inch),
            "ft" => Some(LengthUnit::Foot),
            _ => None,
        }
    }

    /// 모르는 단위 코드는 미터로 간주한다.
    ///
    /// 오류로 바꾸지 않고 그대로 둔 동작이다. 입력 검증을 거치지 않은
    /// 호출자는 잘못된 단위로 길이가 과소/과대 산정될 수 있다.
    pub fn from_code_or_meter(code: &str) -> Self {
        Self::from_code(code).unwrap_or(LengthUnit::Meter)
    }
}

/// 길이를 미터로 환산한다.
pub fn to_meters(value: f64, unit: LengthUnit) -> f64 {
    value * unit.meters_per_unit()
}

