use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::request::RequestError;
use crate::ui_cli;
use crate::ui_cli::{MenuChoice, SettingsChange};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 요청 검증/처리 오류
    #[error("{0}")]
    Request(#[from] RequestError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 설정이 바뀌면 저장하고 번역기를 다시 만든다.
pub fn run(config: &mut Config, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, config)?,
            MenuChoice::Settings => {
                if let Some(change) = ui_cli::handle_settings(tr, config)? {
                    config.save()?;
                    let pack_dir = config.language_pack_dir.as_deref();
                    *tr = translator_after_change(tr, change, pack_dir);
                    info!(language = tr.language_code(), ?change, "settings updated");
                    println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 설정 변경 뒤 사용할 번역기.
///
/// 언어를 직접 바꾼 경우에만 언어가 달라진다. 단위만 바꿨다면 `--lang`이나 시스템
/// 로케일로 정해진 현재 언어를 유지한다.
pub fn translator_after_change(
    current: &Translator,
    change: SettingsChange,
    pack_dir: Option<&str>,
) -> Translator {
    let lang = match change {
        SettingsChange::Language(lang) => lang,
        SettingsChange::DefaultUnit(_) => current.language(),
    };
    Translator::new_with_pack(lang.as_code(), pack_dir)
}
