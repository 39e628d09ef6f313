use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;
use thiserror::Error;
use tracing::{debug, warn};

use crate::units::LengthUnit;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "app.title";
    pub const APP_DESCRIPTION: &str = "app.description";
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const LANGUAGE_LABEL: &str = "language.label";
    pub const LANGUAGE_ENGLISH: &str = "language.english";
    pub const LANGUAGE_HINDI: &str = "language.hindi";

    pub const INPUT_PARAMETERS: &str = "input.parameters";
    pub const VOLTAGE_LABEL: &str = "input.voltage_label";
    pub const DENSITY_LABEL: &str = "input.density_label";
    pub const LENGTH_LABEL: &str = "input.length_label";
    pub const LENGTH_UNIT_LABEL: &str = "input.length_unit_label";
    pub const PIECES_LABEL: &str = "input.pieces_label";
    pub const CALCULATE_BUTTON: &str = "input.calculate_button";
    pub const REAL_TIME_LENGTH: &str = "input.real_time_length";

    pub const RESULTS_TITLE: &str = "result.title";
    pub const POWER_LABEL: &str = "result.power_label";
    pub const CURRENT_LABEL: &str = "result.current_label";
    pub const RECOMMENDED_LABEL: &str = "result.recommended_label";
    pub const TOTAL_LENGTH_LABEL: &str = "result.total_length_label";
    pub const WIRE_GAUGE_LABEL: &str = "result.wire_gauge_label";
    pub const MAX_RUN_LABEL: &str = "result.max_run_label";
    pub const STANDARD_DRIVER_LABEL: &str = "result.standard_driver_label";

    pub const WATT_UNIT: &str = "unit.watt";
    pub const AMP_UNIT: &str = "unit.amp";
    pub const LENGTH_UNIT: &str = "unit.length";
    pub const METER_UNIT: &str = "unit.meter";
    pub const CENTIMETER_UNIT: &str = "unit.centimeter";
    pub const INCH_UNIT: &str = "unit.inch";
    pub const FOOT_UNIT: &str = "unit.foot";

    pub const USAGE_TIPS_TITLE: &str = "tips.title";
    pub const USAGE_TIPS_BODY: &str = "tips.body";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_UNIT_SELECT: &str = "prompt.unit_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_UNIT: &str = "settings.current_unit";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

/// 길이 단위의 표시 이름 키.
pub fn length_unit_key(unit: LengthUnit) -> &'static str {
    match unit {
        LengthUnit::Meter => keys::METER_UNIT,
        LengthUnit::Centimeter => keys::CENTIMETER_UNIT,
        LengthUnit::Inch => keys::INCH_UNIT,
        LengthUnit::Foot => keys::FOOT_UNIT,
    }
}

/// 내장 번들이 있는 언어.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Hi,
}

/// 지원하지 않는 언어 코드.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid language")]
pub struct InvalidLanguage(pub String);

impl Language {
    /// 언어 코드를 엄격하게 해석한다. 정확히 `en` 또는 `hi`만 허용한다.
    ///
    /// 로케일 문자열(`hi-IN` 등)은 [`resolve_language`]에서 먼저 정규화한다.
    pub fn parse(code: &str) -> Result<Self, InvalidLanguage> {
        match code {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            _ => Err(InvalidLanguage(code.to_string())),
        }
    }

    /// 알 수 없는 코드는 영어로 폴백한다.
    fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or(Language::En)
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/hi)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang))
            .or_else(|| load_overrides("locales", lang));
        if pack_dir.is_some() && overrides.is_none() {
            warn!(
                lang = lang_code,
                ?pack_dir,
                "language pack not found, using built-in strings"
            );
        }
        Self { lang, overrides }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 언어팩에 덮어쓴 문자열이 있으면 반환한다.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 해당 언어 → 영어 → 키 자체 순으로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::Hi => hi(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        built_in.unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("hi") => Some("hi".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "en" => Some("en".into()),
        "hi" => Some("hi".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩(`<dir>/<en|hi>.toml`)을 로드한다. 중첩 테이블은 `a.b` 형태의 키로 펼친다.
fn load_overrides(dir: &str, lang: Language) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{}.toml", lang.as_code()));
    let content = fs::read_to_string(&path).ok()?;
    debug!(path = %path.display(), "loading language pack");
    parse_toml_to_map(&content)
}

/// TOML 문자열을 평탄한 키-문자열 맵으로 변환한다. 문자열이 아닌 값은 무시한다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "LED Driver Calculator",
        APP_DESCRIPTION => "Calculate power requirements for LED strips",
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        LANGUAGE_LABEL => "Language",
        LANGUAGE_ENGLISH => "English",
        LANGUAGE_HINDI => "Hindi",
        INPUT_PARAMETERS => "Input Parameters",
        VOLTAGE_LABEL => "Voltage (V)",
        DENSITY_LABEL => "LED Density (LEDs/m)",
        LENGTH_LABEL => "Strip Length",
        LENGTH_UNIT_LABEL => "Length Unit",
        PIECES_LABEL => "Number of Strips",
        CALCULATE_BUTTON => "Calculate",
        REAL_TIME_LENGTH => "Total Length in Meters",
        RESULTS_TITLE => "Calculation Results",
        POWER_LABEL => "Total Power",
        CURRENT_LABEL => "Current Draw",
        RECOMMENDED_LABEL => "Recommended Driver",
        TOTAL_LENGTH_LABEL => "Total Length",
        WIRE_GAUGE_LABEL => "Recommended Wire",
        MAX_RUN_LABEL => "Maximum Run Length",
        STANDARD_DRIVER_LABEL => "Standard Driver",
        WATT_UNIT => "Watts",
        AMP_UNIT => "Amps",
        LENGTH_UNIT => "Unit",
        METER_UNIT => "meters",
        CENTIMETER_UNIT => "centimeters",
        INCH_UNIT => "inches",
        FOOT_UNIT => "feet",
        USAGE_TIPS_TITLE => "Usage Tips",
        USAGE_TIPS_BODY => {
            "Pick a driver rated at or above the recommended current. \
             Feed long runs from both ends or in parallel when the strip \
             exceeds the maximum run length."
        }
        MAIN_MENU_TITLE => "\n=== LED Driver Calculator ===",
        MAIN_MENU_CALCULATE => "1) Calculate",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_UNIT_SELECT => "Length unit (m/cm/in/ft, enter for default): ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_UNIT => "Default length unit:",
        SETTINGS_OPTIONS => "1) English  2) Hindi  3) Default length unit",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}

fn hi(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_TITLE => "एलईडी ड्राइवर कैलकुलेटर",
        APP_DESCRIPTION => "एलईडी स्ट्रिप्स के लिए पावर आवश्यकताओं की गणना करें",
        ERROR_PREFIX => "त्रुटि",
        APP_EXIT => "प्रोग्राम बंद हो रहा है।",
        LANGUAGE_LABEL => "भाषा",
        LANGUAGE_ENGLISH => "अंग्रेज़ी",
        LANGUAGE_HINDI => "हिन्दी",
        INPUT_PARAMETERS => "इनपुट पैरामीटर",
        VOLTAGE_LABEL => "वोल्टेज (V)",
        DENSITY_LABEL => "एलईडी घनत्व (एलईडी/मी)",
        LENGTH_LABEL => "स्ट्रिप लंबाई",
        LENGTH_UNIT_LABEL => "लंबाई इकाई",
        PIECES_LABEL => "स्ट्रिप्स की संख्या",
        CALCULATE_BUTTON => "गणना करें",
        REAL_TIME_LENGTH => "मीटर में कुल लंबाई",
        RESULTS_TITLE => "गणना परिणाम",
        POWER_LABEL => "कुल वाटेज",
        CURRENT_LABEL => "विद्युत धारा",
        RECOMMENDED_LABEL => "अनुशंसित ड्राइवर",
        TOTAL_LENGTH_LABEL => "कुल लंबाई",
        WIRE_GAUGE_LABEL => "अनुशंसित तार",
        MAX_RUN_LABEL => "अधिकतम रन लंबाई",
        STANDARD_DRIVER_LABEL => "मानक ड्राइवर",
        WATT_UNIT => "वाट",
        AMP_UNIT => "एम्पियर",
        LENGTH_UNIT => "इकाई",
        METER_UNIT => "मीटर",
        CENTIMETER_UNIT => "सेंटीमीटर",
        INCH_UNIT => "इंच",
        FOOT_UNIT => "फीट",
        USAGE_TIPS_TITLE => "उपयोग के टिप्स",
        USAGE_TIPS_BODY => {
            "अनुशंसित धारा के बराबर या उससे अधिक रेटिंग वाला ड्राइवर चुनें। \
             स्ट्रिप अधिकतम रन लंबाई से लंबी हो तो दोनों सिरों से या समानांतर में बिजली दें।"
        }
        MAIN_MENU_TITLE => "\n=== एलईडी ड्राइवर कैलकुलेटर ===",
        MAIN_MENU_CALCULATE => "1) गणना करें",
        MAIN_MENU_SETTINGS => "2) सेटिंग्स",
        MAIN_MENU_EXIT => "0) बाहर निकलें",
        PROMPT_MENU_SELECT => "मेनू चुनें: ",
        PROMPT_UNIT_SELECT => "लंबाई इकाई (m/cm/in/ft, डिफ़ॉल्ट के लिए एंटर): ",
        INVALID_SELECTION_RETRY => "अमान्य इनपुट। कृपया फिर से प्रयास करें।",
        ERROR_INVALID_NUMBER => "कृपया एक संख्या दर्ज करें।",
        SETTINGS_HEADING => "\n-- सेटिंग्स --",
        SETTINGS_CURRENT_LANGUAGE => "वर्तमान भाषा:",
        SETTINGS_CURRENT_UNIT => "डिफ़ॉल्ट लंबाई इकाई:",
        SETTINGS_OPTIONS => "1) अंग्रेज़ी  2) हिन्दी  3) डिफ़ॉल्ट लंबाई इकाई",
        SETTINGS_PROMPT_CHANGE => "बदलने के लिए संख्या दर्ज करें (रद्द करने के लिए एंटर): ",
        SETTINGS_INVALID => "अमान्य इनपुट; सेटिंग्स नहीं बदलीं।",
        SETTINGS_SAVED => "सेटिंग्स सहेजी गईं।",
        _ => return None,
    })
}
