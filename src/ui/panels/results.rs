// MailSift - ui/panels/results.rs
//
// Results region: predicted-class line plus one bar row per category.
// Pure presentation over the ResultsView; hidden while state.results
// is None.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the results region, if results are present.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(view) = &state.results else {
        return;
    };

    ui.add_space(8.0);
    ui.separator();
    ui.strong(&view.predicted_line);
    ui.add_space(4.0);

    if view.missing_probabilities {
        ui.label("Classifier did not return probabilities.");
        return;
    }

    egui::Grid::new("probability_rows")
        .num_columns(3)
        .min_col_width(theme::LABEL_COLUMN_WIDTH)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for row in &view.rows {
                ui.label(&row.label);
                ui.add(
                    egui::ProgressBar::new(row.fill_fraction())
                        .desired_width(theme::BAR_WIDTH)
                        .fill(theme::category_colour(&row.label)),
                );
                ui.monospace(row.percent_text());
                ui.end_row();
            }
        });
}
