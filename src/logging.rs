//! tracing 구독자 초기화.

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// `RUST_LOG` 이 있으면 그 값을, 없으면 설정의 로그 레벨을 사용한다.
///
/// 대화형 출력과 섞이지 않도록 로그는 stderr로 보낸다. 두 번째 호출은 무시된다.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
