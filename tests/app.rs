//! 대화형 CLI 흐름 테스트: 설정 변경 뒤 번역기, 메뉴 입력 종료.
use led_driver_calculator::app::translator_after_change;
use led_driver_calculator::i18n::{keys, Language, Translator};
use led_driver_calculator::ui_cli::{main_menu_from, MenuChoice, SettingsChange};
use led_driver_calculator::units::LengthUnit;

#[test]
fn unit_change_keeps_active_language() {
    // --lang hi 로 시작했고 설정 파일의 language 는 "auto" 인 상황
    let hi = Translator::new("hi");
    let change = SettingsChange::DefaultUnit(LengthUnit::Centimeter);
    let tr = translator_after_change(&hi, change, None);
    assert_eq!(tr.language(), Language::Hi);
    assert_eq!(tr.t(keys::SETTINGS_SAVED), "सेटिंग्स सहेजी गईं।");
}

#[test]
fn language_change_switches_translator() {
    let hi = Translator::new("hi");
    let tr = translator_after_change(&hi, SettingsChange::Language(Language::En), None);
    assert_eq!(tr.language(), Language::En);
    assert_eq!(tr.t(keys::SETTINGS_SAVED), "Settings saved.");
}

#[test]
fn end_of_input_exits_main_menu() {
    let tr = Translator::new("en");
    let mut empty: &[u8] = b"";
    assert_eq!(main_menu_from(&tr, &mut empty).expect("menu"), MenuChoice::Exit);

    // 잘못된 입력 뒤 EOF 도 무한 반복 없이 종료한다.
    let mut junk: &[u8] = b"x\n";
    assert_eq!(main_menu_from(&tr, &mut junk).expect("menu"), MenuChoice::Exit);
}

#[test]
fn menu_reads_selection_after_retry() {
    let tr = Translator::new("en");
    let mut input: &[u8] = b"9\n2\n";
    assert_eq!(main_menu_from(&tr, &mut input).expect("menu"), MenuChoice::Settings);
    let mut input: &[u8] = b"1\n";
    assert_eq!(main_menu_from(&tr, &mut input).expect("menu"), MenuChoice::Calculate);
}
