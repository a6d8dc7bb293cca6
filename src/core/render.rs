// MailSift - core/render.rs
//
// Pure view-model for the results region. Decision logic (ordering,
// rounding, fallback) lives here so the egui panel only paints.

use crate::core::model::ClassificationResult;

/// One renderable probability entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow {
    /// Category label as sent by the server.
    pub label: String,

    /// Probability in [0, 1].
    pub value: f64,
}

impl ProbabilityRow {
    /// Bar fill as a whole percent, `round(value * 100)`.
    pub fn fill_percent(&self) -> u8 {
        display_percent(self.value).round().clamp(0.0, 100.0) as u8
    }

    /// Bar fill as a fraction of the bar track.
    pub fn fill_fraction(&self) -> f32 {
        f32::from(self.fill_percent()) / 100.0
    }

    /// Percentage text, `value * 100` to one decimal place.
    pub fn percent_text(&self) -> String {
        format!("{:.1}%", display_percent(self.value))
    }
}

/// Probability as a percent, snapped to the wire precision.
///
/// Wire probabilities carry at most four decimal places (the service
/// rounds before sending), so the nominal decimal value is recovered
/// before the two display roundings are applied. Without the snap,
/// 0.845 sits just below 84.5 in binary floating point.
fn display_percent(value: f64) -> f64 {
    (value * 10_000.0).round() / 100.0
}

/// Everything the results region shows, derived once per applied result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    /// The predicted-class line, e.g. "Predicted class: Spam".
    pub predicted_line: String,

    /// Bar rows sorted by probability descending; ties keep the server
    /// response's order (stable sort over the preserved key order).
    pub rows: Vec<ProbabilityRow>,

    /// The server returned no distribution at all; the panel shows the
    /// fixed fallback text instead of rows. An empty distribution is not
    /// "missing": it renders zero rows and no fallback.
    pub missing_probabilities: bool,
}

impl ResultsView {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let missing_probabilities = result.probabilities.is_none();

        let mut rows: Vec<ProbabilityRow> = result
            .probabilities
            .iter()
            .flatten()
            .map(|(label, value)| ProbabilityRow {
                label: label.clone(),
                value: *value,
            })
            .collect();
        rows.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Self {
            predicted_line: format!("Predicted class: {}", result.predicted_class),
            rows,
            missing_probabilities,
        }
    }
}
