//! 계산기 앞단의 요청 경계.
//!
//! JSON 요청 본문을 검증해 [`CalculationInput`]으로 바꾸고, 결과에 언어별 라벨을
//! 붙여 JSON 응답으로 만든다. 계산 코어는 검증을 다시 하지 않으므로 범위 검사는
//! 모두 여기서 끝낸다.

use std::ops::RangeInclusive;

use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::i18n::{keys, InvalidLanguage, Language, Translator};
use crate::led::{calculate, round2, CalculationInput, CalculationResult};
use crate::units::{to_meters, LengthUnit};

/// 필수 입력 필드. 누락 검사 순서이기도 하다.
pub const REQUIRED_FIELDS: [&str; 4] = ["voltage", "density", "length", "pieces"];

/// 요청 경계에서 허용하는 밀도 범위 [LEDs/m].
pub const DENSITY_RANGE: RangeInclusive<i64> = 30..=240;

/// 입력 검증 실패. 메시지는 응답 본문의 `error` 값으로 그대로 나간다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid input types")]
    InvalidType,
    #[error("Values must be greater than zero")]
    NonPositive,
    #[error("Density must be between 30 and 240 LEDs/meter")]
    DensityOutOfRange,
    #[error("Invalid length unit")]
    InvalidLengthUnit,
}

/// 요청 처리 오류.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Language(#[from] InvalidLanguage),
    /// 검증을 통과한 뒤 발생한 예기치 않은 오류
    #[error("{0}")]
    Internal(String),
}

impl RequestError {
    /// HTTP 상태 코드 대응값.
    pub fn status(&self) -> u16 {
        match self {
            RequestError::Validation(_) | RequestError::Language(_) => 400,
            RequestError::Internal(_) => 500,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        RequestError::Internal(value.to_string())
    }
}

/// 응답. `body`는 성공 시 결과+라벨, 실패 시 `{"error": ...}` 이다.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    fn from_error(err: &RequestError) -> Self {
        Self {
            status: err.status(),
            body: json!({ "error": err.to_string() }),
        }
    }
}

/// 결과 화면에 붙는 라벨 묶음.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultMessages {
    pub results_title: String,
    pub power_label: String,
    pub current_label: String,
    pub recommended_label: String,
    pub watt_unit: String,
    pub amp_unit: String,
    pub length_unit: String,
    pub total_length_label: String,
    pub meter_unit: String,
    pub wire_gauge_label: String,
    pub max_run_label: String,
    pub standard_driver_label: String,
}

impl ResultMessages {
    pub fn new(tr: &Translator) -> Self {
        let t = |key: &str| tr.t(key).to_string();
        Self {
            results_title: t(keys::RESULTS_TITLE),
            power_label: t(keys::POWER_LABEL),
            current_label: t(keys::CURRENT_LABEL),
            recommended_label: t(keys::RECOMMENDED_LABEL),
            watt_unit: t(keys::WATT_UNIT),
            amp_unit: t(keys::AMP_UNIT),
            length_unit: t(keys::LENGTH_UNIT),
            total_length_label: t(keys::TOTAL_LENGTH_LABEL),
            meter_unit: t(keys::METER_UNIT),
            wire_gauge_label: t(keys::WIRE_GAUGE_LABEL),
            max_run_label: t(keys::MAX_RUN_LABEL),
            standard_driver_label: t(keys::STANDARD_DRIVER_LABEL),
        }
    }
}

/// 성공 응답 본문.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub result: CalculationResult,
    pub messages: ResultMessages,
}

/// 실수 필드를 해석한다. 숫자 또는 숫자 문자열만 허용하고 NaN/무한대는 거부한다.
fn parse_float(value: &Value) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::InvalidType)
}

/// 정수 필드를 해석한다. 소수 숫자는 0 방향으로 버림하고, 문자열은 정수 표기만 허용한다.
fn parse_int(value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            n.as_f64()
                .filter(|v| v.is_finite() && v.abs() < i64::MAX as f64)
                .map(|v| v.trunc() as i64)
                .ok_or(ValidationError::InvalidType)
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidType),
        _ => Err(ValidationError::InvalidType),
    }
}

fn field<'a>(
    obj: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, ValidationError> {
    obj.get(name).ok_or(ValidationError::MissingField(name))
}

/// 요청 본문을 검증해 계산 입력으로 변환한다.
///
/// 검사 순서: 본문 형식 → 필수 필드 → 타입 → 양수 → 밀도 범위 → 길이 단위.
pub fn validate(body: &Value) -> Result<CalculationInput, ValidationError> {
    let obj = body.as_object().ok_or(ValidationError::InvalidBody)?;
    for name in REQUIRED_FIELDS {
        field(obj, name)?;
    }

    let voltage = parse_float(field(obj, "voltage")?)?;
    let density = parse_int(field(obj, "density")?)?;
    let length = parse_float(field(obj, "length")?)?;
    let pieces = parse_int(field(obj, "pieces")?)?;

    if voltage <= 0.0 || length <= 0.0 || pieces <= 0 {
        return Err(ValidationError::NonPositive);
    }
    if !DENSITY_RANGE.contains(&density) {
        return Err(ValidationError::DensityOutOfRange);
    }
    let length_unit = match obj.get("length_unit") {
        None => LengthUnit::Meter,
        Some(Value::String(code)) => {
            LengthUnit::from_code(code).ok_or(ValidationError::InvalidLengthUnit)?
        }
        Some(_) => return Err(ValidationError::InvalidLengthUnit),
    };

    Ok(CalculationInput {
        voltage,
        density: u32::try_from(density).map_err(|_| ValidationError::InvalidType)?,
        length,
        pieces: u32::try_from(pieces).map_err(|_| ValidationError::InvalidType)?,
        length_unit,
    })
}

/// 검증 후 계산하고 라벨이 붙은 응답 본문을 만든다.
pub fn process_calculate(
    body: &Value,
    tr: &Translator,
) -> Result<CalculationResponse, RequestError> {
    let input = validate(body)?;
    let result = calculate(&input);
    debug!(
        voltage = input.voltage,
        density = input.density,
        length = input.length,
        pieces = input.pieces,
        unit = input.length_unit.code(),
        power = result.power,
        current = result.current,
        "calculation done"
    );
    Ok(CalculationResponse {
        result,
        messages: ResultMessages::new(tr),
    })
}

/// 계산 요청을 처리해 상태 코드와 JSON 본문을 반환한다.
pub fn handle_calculate(body: &Value, tr: &Translator) -> Response {
    let outcome = process_calculate(body, tr)
        .and_then(|resp| serde_json::to_value(resp).map_err(RequestError::from));
    match outcome {
        Ok(body) => Response { status: 200, body },
        Err(err) => {
            match &err {
                RequestError::Internal(msg) => error!(%msg, "calculation error"),
                other => warn!(error = %other, "rejected calculation request"),
            }
            Response::from_error(&err)
        }
    }
}

/// 원문 JSON 문자열을 처리한다. 파싱 실패는 본문 형식 오류로 취급한다.
pub fn handle_calculate_str(raw: &str, tr: &Translator) -> Response {
    match serde_json::from_str::<Value>(raw) {
        Ok(body) => handle_calculate(&body, tr),
        Err(e) => {
            warn!(error = %e, "request body is not valid JSON");
            Response::from_error(&RequestError::from(ValidationError::InvalidBody))
        }
    }
}

/// 언어 전환 요청을 검증한다. en/hi만 허용한다.
pub fn switch_language(code: &str) -> Result<Language, RequestError> {
    Ok(Language::parse(code)?)
}

/// 입력 중 실시간으로 보여주는 총 길이.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthPreview {
    pub total_length_meters: f64,
    /// 미터 단위 1개 입력이면 입력값과 같으므로 숨긴다.
    pub visible: bool,
}

/// 입력창 문자열로부터 총 길이[m]를 미리 계산한다.
///
/// 길이를 해석할 수 없으면 0, 개수를 해석할 수 없거나 0이면 1개로 본다.
/// 개수는 앞부분 정수만 취한다 (`"2.5"` → 2).
pub fn total_length_preview(length: &str, pieces: &str, unit: LengthUnit) -> LengthPreview {
    let length = length
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);
    let pieces = leading_int(pieces).filter(|p| *p != 0).unwrap_or(1);
    LengthPreview {
        total_length_meters: round2(to_meters(length, unit) * pieces as f64),
        visible: unit != LengthUnit::Meter || pieces > 1,
    }
}

fn leading_int(text: &str) -> Option<i64> {
    let t = text.trim();
    let end = t
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(t.len());
    t[..end].parse().ok()
}
