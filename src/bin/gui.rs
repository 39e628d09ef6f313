#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use led_driver_calculator::{
    config, i18n,
    i18n::keys,
    logging,
    request::{self, CalculationResponse, RequestError, ResultMessages},
    units::LengthUnit,
};
use serde_json::{json, Value};
use std::{env, fs, path::Path};
use tracing::{info, warn};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/hi)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        eprintln!("Config error: {e}");
        config::Config::default()
    });
    logging::init(app_cfg.log_level);
    let resolved = i18n::resolve_language(
        cli_lang.as_deref().unwrap_or("auto"),
        Some(app_cfg.language.as_str()),
    );
    app_cfg.language = resolved;

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([560.0, 720.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "LED Driver Calculator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui 기본 폰트 뒤에 대체 폰트로 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 힌디어(데바나가리)를 표시하기 위해 시스템 폰트를 찾아 등록한다.
/// 1) assets/fonts/ 아래 Noto Sans Devanagari
/// 2) Windows Nirmala UI / Mangal
/// 3) Linux Noto / Lohit 패키지 경로
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/NotoSansDevanagari-Regular.ttf".into(),
        "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf".into(),
        "/usr/share/fonts/noto/NotoSansDevanagari-Regular.ttf".into(),
        "/usr/share/fonts/truetype/lohit-devanagari/Lohit-Devanagari.ttf".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.push(fonts.join("Nirmala.ttf"));
        candidates.push(fonts.join("mangal.ttf"));
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "devanagari_font");
            info!(path = %p.display(), "devanagari font loaded");
            return Ok(());
        }
    }
    Err("No Devanagari font found; Hindi labels may not render.".to_string())
}

fn fmt2(v: f64) -> String {
    format!("{v:.2}")
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    voltage: String,
    density: String,
    length: String,
    pieces: String,
    unit: LengthUnit,
    result: Option<CalculationResponse>,
    error: Option<String>,
    status: Option<String>,
    show_tips: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let tr = i18n::Translator::new_with_pack(
            &config.language,
            config.language_pack_dir.as_deref(),
        );
        let d = config.defaults.clone();
        Self {
            config,
            tr,
            voltage: d.voltage.to_string(),
            density: d.density.to_string(),
            length: d.length.to_string(),
            pieces: d.pieces.to_string(),
            unit: d.length_unit,
            result: None,
            error: None,
            status: None,
            show_tips: false,
        }
    }

    /// 입력창 문자열을 요청 본문으로 묶는다. 검증은 요청 경계에서 한다.
    fn request_body(&self) -> Value {
        json!({
            "voltage": self.voltage,
            "density": self.density,
            "length": self.length,
            "pieces": self.pieces,
            "length_unit": self.unit.code(),
        })
    }

    fn run_calculation(&mut self) {
        match request::process_calculate(&self.request_body(), &self.tr) {
            Ok(resp) => {
                self.result = Some(resp);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
    }

    /// 언어를 바꾸고 번역기를 다시 만든다. 기존 결과는 수치를 그대로 두고 라벨만 바꾼다.
    fn set_language(&mut self, code: &str) -> Result<(), RequestError> {
        let lang = request::switch_language(code)?;
        self.config.language = lang.as_code().to_string();
        self.tr = i18n::Translator::new_with_pack(
            &self.config.language,
            self.config.language_pack_dir.as_deref(),
        );
        if let Some(resp) = self.result.as_mut() {
            resp.messages = ResultMessages::new(&self.tr);
        }
        Ok(())
    }

    fn switch_and_save(&mut self, code: &str) {
        if let Err(e) = self.set_language(code) {
            self.status = Some(e.to_string());
            return;
        }
        self.status = match self.config.save() {
            Ok(()) => None,
            Err(e) => Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))),
        };
    }

    fn input_ui(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::INPUT_PARAMETERS));
        egui::Grid::new("inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::VOLTAGE_LABEL));
                ui.text_edit_singleline(&mut self.voltage);
                ui.end_row();

                ui.label(tr.t(keys::DENSITY_LABEL));
                ui.text_edit_singleline(&mut self.density);
                ui.end_row();

                ui.label(tr.t(keys::LENGTH_LABEL));
                ui.text_edit_singleline(&mut self.length);
                ui.end_row();

                ui.label(tr.t(keys::LENGTH_UNIT_LABEL));
                egui::ComboBox::from_id_source("length_unit")
                    .selected_text(tr.t(i18n::length_unit_key(self.unit)))
                    .show_ui(ui, |ui| {
                        for u in LengthUnit::ALL {
                            ui.selectable_value(&mut self.unit, u, tr.t(i18n::length_unit_key(u)));
                        }
                    });
                ui.end_row();

                ui.label(tr.t(keys::PIECES_LABEL));
                ui.text_edit_singleline(&mut self.pieces);
                ui.end_row();
            });

        let preview = request::total_length_preview(&self.length, &self.pieces, self.unit);
        if preview.visible {
            ui.label(format!(
                "{}: {} {}",
                tr.t(keys::REAL_TIME_LENGTH),
                fmt2(preview.total_length_meters),
                tr.t(keys::METER_UNIT)
            ));
        }

        ui.add_space(6.0);
        if ui.button(tr.t(keys::CALCULATE_BUTTON)).clicked() {
            self.run_calculation();
        }
    }

    fn result_ui(&self, ui: &mut egui::Ui) {
        if let Some(err) = &self.error {
            ui.colored_label(egui::Color32::LIGHT_RED, err.as_str());
        }
        let Some(resp) = &self.result else {
            return;
        };
        let m = &resp.messages;
        let r = &resp.result;
        ui.separator();
        ui.heading(m.results_title.as_str());
        egui::Grid::new("results")
            .num_columns(2)
            .striped(true)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                let rows = [
                    (&m.power_label, format!("{} {}", fmt2(r.power), m.watt_unit)),
                    (&m.current_label, format!("{} {}", fmt2(r.current), m.amp_unit)),
                    (
                        &m.recommended_label,
                        format!("{} {}", fmt2(r.recommended), m.amp_unit),
                    ),
                    (
                        &m.total_length_label,
                        format!("{} {}", fmt2(r.total_length_meters), m.meter_unit),
                    ),
                    (&m.wire_gauge_label, r.wire_gauge.clone()),
                    (&m.max_run_label, format!("{} {}", fmt2(r.max_run), m.meter_unit)),
                    (&m.standard_driver_label, r.standard_driver.clone()),
                ];
                for (label, value) in rows {
                    ui.label(label.as_str());
                    ui.strong(value);
                    ui.end_row();
                }
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                ui.label(tr.t(keys::LANGUAGE_LABEL));
                let current = tr.language();
                if ui
                    .selectable_label(current == i18n::Language::En, tr.t(keys::LANGUAGE_ENGLISH))
                    .clicked()
                {
                    self.switch_and_save("en");
                }
                if ui
                    .selectable_label(current == i18n::Language::Hi, tr.t(keys::LANGUAGE_HINDI))
                    .clicked()
                {
                    self.switch_and_save("hi");
                }
                ui.separator();
                ui.checkbox(&mut self.show_tips, tr.t(keys::USAGE_TIPS_TITLE));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(tr.t(keys::APP_DESCRIPTION));
            if let Some(status) = &self.status {
                ui.colored_label(egui::Color32::YELLOW, status.as_str());
            }
            if self.show_tips {
                let tips = egui::RichText::new(tr.t(keys::USAGE_TIPS_BODY)).small();
                ui.add(egui::Label::new(tips).wrap(true));
            }
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.input_ui(ui);
                self.result_ui(ui);
            });
        });
    }
}
