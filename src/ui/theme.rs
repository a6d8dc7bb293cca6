// MailSift - ui/theme.rs
//
// Category colour mapping and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Bar colour for a category label. Labels are server-defined; anything
/// unrecognised gets the neutral colour.
pub fn category_colour(label: &str) -> Color32 {
    match label {
        "Spam" => Color32::from_rgb(220, 38, 38),           // Red 600
        "Urgent" => Color32::from_rgb(217, 119, 6),         // Amber 600
        "Complaint" => Color32::from_rgb(234, 88, 12),      // Orange 600
        "Action Request" => Color32::from_rgb(37, 99, 235), // Blue 600
        "Information" => Color32::from_rgb(22, 163, 74),    // Green 600
        _ => Color32::from_rgb(107, 114, 128),              // Gray 500
    }
}

/// Layout constants.
pub const INPUT_ROWS: usize = 10;
pub const BAR_WIDTH: f32 = 220.0;
pub const LABEL_COLUMN_WIDTH: f32 = 120.0;
