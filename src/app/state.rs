// MailSift - app/state.rs
//
// Application state management: the single store of everything the UI
// shows. Owned by the eframe::App implementation; panels read and mutate
// it, update() consumes the pending-action flags each frame.

use crate::core::render::ResultsView;
use crate::platform::config::AppConfig;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Base URL of the classification service (CLI > config > default).
    pub endpoint: String,

    /// Raw contents of the email input field.
    pub input_text: String,

    /// Status message for the status bar.
    pub status_message: String,

    /// Current results view. `None` means the results region is hidden.
    pub results: Option<ResultsView>,

    /// Whether a classification request is currently in flight.
    pub classify_in_progress: bool,

    /// Set by the compose panel when the user asks to classify.
    pub pending_classify: bool,

    /// Set by the compose panel when the user asks to clear.
    pub pending_clear: bool,

    /// Set by the compose panel when the user asks for a server check.
    pub pending_server_check: bool,

    /// Body font size in points, from config.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from validated configuration.
    pub fn new(config: &AppConfig, debug_mode: bool) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            input_text: String::new(),
            status_message: "Ready. Paste an email to classify.".to_string(),
            results: None,
            classify_in_progress: false,
            pending_classify: false,
            pending_clear: false,
            pending_server_check: false,
            font_size: config.font_size,
            debug_mode,
        }
    }

    /// Reset all visible state: empty input, empty status, no predicted
    /// line, no probability rows, results hidden. Idempotent; touches no
    /// network state (the in-flight token is invalidated by the caller).
    pub fn clear(&mut self) {
        self.input_text.clear();
        self.status_message.clear();
        self.results = None;
        self.classify_in_progress = false;
    }
}
