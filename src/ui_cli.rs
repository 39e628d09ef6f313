use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, length_unit_key, Language, Translator};
use crate::request::{self, CalculationResponse, RequestError};
use crate::units::LengthUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Settings,
    Exit,
}

/// 설정 메뉴에서 바뀐 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    Language(Language),
    DefaultUnit(LengthUnit),
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    main_menu_from(tr, &mut io::stdin().lock())
}

/// `input`에서 메뉴 선택을 읽는다. 입력이 끝나면(EOF) 종료로 본다.
pub fn main_menu_from<R: BufRead>(
    tr: &Translator,
    input: &mut R,
) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let Some(sel) = read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 계산 메뉴를 처리한다. 빈 입력은 설정의 기본값을 사용한다.
///
/// 입력은 문자열 그대로 요청 경계에 넘겨 검증을 한 곳에서 처리한다.
pub fn handle_calculate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- {} --", tr.t(keys::INPUT_PARAMETERS));
    let d = &cfg.defaults;
    let voltage = read_or_default(tr.t(keys::VOLTAGE_LABEL), &d.voltage.to_string())?;
    let density = read_or_default(tr.t(keys::DENSITY_LABEL), &d.density.to_string())?;
    let length = read_or_default(tr.t(keys::LENGTH_LABEL), &d.length.to_string())?;
    println!("{}", unit_choices(tr));
    let unit = read_line(tr.t(keys::PROMPT_UNIT_SELECT))?;
    let unit = match unit.trim() {
        "" => d.length_unit.code().to_string(),
        other => other.to_string(),
    };
    let pieces = read_or_default(tr.t(keys::PIECES_LABEL), &d.pieces.to_string())?;

    let body = json!({
        "voltage": voltage,
        "density": density,
        "length": length,
        "pieces": pieces,
        "length_unit": unit,
    });
    match request::process_calculate(&body, tr) {
        Ok(resp) => print_result(&resp),
        Err(RequestError::Validation(e)) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 바뀐 항목이 있으면 `cfg`에 반영하고 반환한다.
pub fn handle_settings(
    tr: &Translator,
    cfg: &mut Config,
) -> Result<Option<SettingsChange>, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        tr.language_code()
    );
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_UNIT),
        cfg.defaults.length_unit.code()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let change = match sel.trim() {
        "" => None,
        "1" => Some(set_language(cfg, "en")?),
        "2" => Some(set_language(cfg, "hi")?),
        "3" => {
            let unit = read_line(tr.t(keys::PROMPT_UNIT_SELECT))?;
            match LengthUnit::from_code(&unit) {
                Some(u) => {
                    cfg.defaults.length_unit = u;
                    Some(SettingsChange::DefaultUnit(u))
                }
                None => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    None
                }
            }
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            None
        }
    };
    Ok(change)
}

fn set_language(cfg: &mut Config, code: &str) -> Result<SettingsChange, AppError> {
    let lang = request::switch_language(code)?;
    cfg.language = lang.as_code().to_string();
    Ok(SettingsChange::Language(lang))
}

/// 라벨이 붙은 계산 결과를 출력한다.
pub fn print_result(resp: &CalculationResponse) {
    let m = &resp.messages;
    let r = &resp.result;
    println!("\n== {} ==", m.results_title);
    println!("{}: {:.2} {}", m.power_label, r.power, m.watt_unit);
    println!("{}: {:.2} {}", m.current_label, r.current, m.amp_unit);
    println!("{}: {:.2} {}", m.recommended_label, r.recommended, m.amp_unit);
    println!(
        "{}: {:.2} {}",
        m.total_length_label, r.total_length_meters, m.meter_unit
    );
    println!("{}: {}", m.wire_gauge_label, r.wire_gauge);
    println!("{}: {:.2} {}", m.max_run_label, r.max_run, m.meter_unit);
    println!("{}: {}", m.standard_driver_label, r.standard_driver);
}

/// 단위 선택지 안내 문자열 (예: `m=meters cm=centimeters ...`).
pub fn unit_choices(tr: &Translator) -> String {
    LengthUnit::ALL
        .iter()
        .map(|u| format!("{}={}", u.code(), tr.t(length_unit_key(*u))))
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    Ok(read_line_from(&mut io::stdin().lock(), prompt)?.unwrap_or_default())
}

/// 한 줄을 읽는다. EOF면 `None`.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

fn read_or_default(label: &str, default: &str) -> Result<Value, AppError> {
    let s = read_line(&format!("{label} [{default}]: "))?;
    let s = s.trim();
    Ok(Value::String(if s.is_empty() {
        default.to_string()
    } else {
        s.to_string()
    }))
}
