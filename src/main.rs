use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use led_driver_calculator::{app, config, i18n, logging, request, ui_cli};

/// LED 스트립 드라이버/배선 사이징 CLI.
#[derive(Debug, Parser)]
#[command(name = "led_driver_calculator_cli", version, about)]
struct Cli {
    /// 표시 언어 (auto/en/hi)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 인자로 받은 값으로 한 번 계산한다.
    Calc {
        #[arg(long)]
        voltage: f64,
        #[arg(long)]
        density: i64,
        #[arg(long)]
        length: f64,
        #[arg(long, default_value_t = 1)]
        pieces: i64,
        /// m / cm / in / ft
        #[arg(long, default_value = "m")]
        unit: String,
        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// JSON 요청 본문을 읽어 응답 JSON을 출력한다. 파일이 없으면 stdin.
    Json { file: Option<PathBuf> },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    logging::init(cfg.log_level);

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        None => app::run(&mut cfg, &mut tr)?,
        Some(Command::Calc {
            voltage,
            density,
            length,
            pieces,
            unit,
            json,
        }) => {
            let body = json!({
                "voltage": voltage,
                "density": density,
                "length": length,
                "pieces": pieces,
                "length_unit": unit,
            });
            if json {
                let resp = request::handle_calculate(&body, &tr);
                println!("{}", serde_json::to_string_pretty(&resp.body)?);
                if !resp.is_success() {
                    std::process::exit(2);
                }
            } else {
                let resp = request::process_calculate(&body, &tr)?;
                ui_cli::print_result(&resp);
            }
        }
        Some(Command::Json { file }) => {
            let raw = match file {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let resp = request::handle_calculate_str(&raw, &tr);
            println!("{}", serde_json::to_string_pretty(&resp.body)?);
            if !resp.is_success() {
                std::process::exit(2);
            }
        }
    }
    Ok(())
}
