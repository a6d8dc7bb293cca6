// MailSift - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels and manages the classify lifecycle.

use crate::app::classify::ClassifyManager;
use crate::app::state::AppState;
use crate::core::model::ClassifyProgress;
use crate::core::render::ResultsView;
use crate::core::submission::prepare_submission;
use crate::ui;

/// The MailSift application.
pub struct MailSiftApp {
    pub state: AppState,
    pub classify_manager: ClassifyManager,
}

impl MailSiftApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            classify_manager: ClassifyManager::new(),
        }
    }
}

impl eframe::App for MailSiftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for request outcomes. Classify outcomes are applied only
        // when their token is still current; anything else is stale
        // (superseded or cleared) and is dropped.
        let messages = self.classify_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                ClassifyProgress::Completed { request_id, result } => {
                    if self.classify_manager.take_if_current(request_id) {
                        tracing::info!(
                            request_id,
                            predicted = %result.predicted_class,
                            "Classification complete"
                        );
                        self.state.results = Some(ResultsView::from_result(&result));
                        self.state.status_message = "Done.".to_string();
                        self.state.classify_in_progress = false;
                    } else {
                        tracing::debug!(request_id, "Stale classification outcome discarded");
                    }
                }
                ClassifyProgress::Failed { request_id, error } => {
                    if self.classify_manager.take_if_current(request_id) {
                        tracing::warn!(request_id, error = %error, "Classification failed");
                        self.state.status_message = format!("Error: {error}");
                        self.state.classify_in_progress = false;
                    } else {
                        tracing::debug!(request_id, "Stale classification failure discarded");
                    }
                }
                ClassifyProgress::ServerChecked { status } => {
                    self.state.status_message = match status {
                        Ok(s) => {
                            tracing::info!(model_status = %s.model_status, "Server check ok");
                            format!("Server reachable. Model status: {}.", s.model_status)
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Server check failed");
                            format!("Error: {e}")
                        }
                    };
                }
            }
        }
        // Repaint while a request is in flight so the outcome appears
        // promptly even without input events.
        if had_messages || self.state.classify_in_progress {
            ctx.request_repaint();
        }

        // ---- Handle flags set by panels ----
        // pending_classify: run the input gate, then hand off to the manager.
        if std::mem::take(&mut self.state.pending_classify) {
            match prepare_submission(&self.state.input_text) {
                Ok(submission) => {
                    self.state.status_message = "Classifying...".to_string();
                    self.state.results = None;
                    self.state.classify_in_progress = true;
                    self.classify_manager
                        .start_classify(&self.state.endpoint, submission);
                }
                Err(_) => {
                    self.state.status_message = "Please enter an email.".to_string();
                }
            }
        }

        // pending_clear: reset visible state and drop interest in any
        // in-flight request so its late outcome cannot repopulate the UI.
        if std::mem::take(&mut self.state.pending_clear) {
            self.classify_manager.invalidate_in_flight();
            self.state.clear();
        }

        // pending_server_check: untokenised status-line-only request.
        if std::mem::take(&mut self.state.pending_server_check) {
            self.state.status_message = "Checking server...".to_string();
            self.classify_manager.check_server(&self.state.endpoint);
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.classify_in_progress {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.state.endpoint)
                            .monospace()
                            .size(11.5),
                    );
                });
            });
        });

        // Central panel: input on top, results beneath.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui::panels::compose::render(ui, &mut self.state);
                    ui::panels::results::render(ui, &self.state);
                });
        });
    }
}
