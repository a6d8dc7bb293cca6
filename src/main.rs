// MailSift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Configuration loading and validation
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use mailsift::app;

pub use mailsift::core;
pub use mailsift::platform;
pub use mailsift::ui;
pub use mailsift::util;

use clap::Parser;

/// MailSift - Desktop client for a remote email classification service.
///
/// Paste an email, send it to the classifier, and see the predicted
/// category with per-category probability bars.
#[derive(Parser, Debug)]
#[command(name = "MailSift", version, about)]
struct Cli {
    /// Base URL of the classification service (overrides config.toml).
    #[arg(short = 'e', long = "endpoint")]
    endpoint: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Apply the configured body font size across the egui text styles.
fn apply_font_size(ctx: &egui::Context, size: f32) {
    let mut style = (*ctx.style()).clone();
    for (text_style, font_id) in style.text_styles.iter_mut() {
        font_id.size = match text_style {
            egui::TextStyle::Heading => size * 1.4,
            egui::TextStyle::Small => size * 0.8,
            _ => size,
        };
    }
    ctx.set_style(style);
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load configuration first so the config
    // log level can feed logging init. Tracing events emitted before init
    // are discarded; config warnings are carried in the returned list and
    // logged below.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (mut config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    // Initialise logging subsystem
    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "MailSift starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Endpoint priority: CLI override > config > default constant.
    if let Some(ref endpoint) = cli.endpoint {
        config.endpoint = endpoint.trim().trim_end_matches('/').to_string();
    }

    tracing::info!(endpoint = %config.endpoint, "Classification service selected");

    // Create application state
    let state = app::state::AppState::new(&config, cli.debug);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            apply_font_size(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::MailSiftApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch MailSift GUI: {e}");
        std::process::exit(1);
    }
}
