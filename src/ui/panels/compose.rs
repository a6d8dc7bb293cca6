// MailSift - ui/panels/compose.rs
//
// Email input panel: the text area and the action buttons.
// Panels never talk to the network; they set pending flags that the
// update loop consumes.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the input area and action row.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Email Classification");
    ui.add_space(4.0);

    ui.add(
        egui::TextEdit::multiline(&mut state.input_text)
            .desired_rows(theme::INPUT_ROWS)
            .desired_width(f32::INFINITY)
            .hint_text("Paste the email text here..."),
    );

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Classify").clicked() {
            state.pending_classify = true;
        }
        if ui.button("Clear").clicked() {
            state.pending_clear = true;
        }
        ui.separator();
        if ui.button("Check Server").clicked() {
            state.pending_server_check = true;
        }
    });
}
