use eframe::egui::{RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – load summary
// ---------------------------------------------------------------------------

/// Render the status strip above the plot.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{}*.dat", state.file_prefix)).strong());

        ui.separator();

        ui.label(format!(
            "{} segment files, {} samples",
            state.segment_count,
            state.series.sample_count()
        ));

        ui.separator();

        let (min, max) = state.series.value_range();
        ui.label(format!("value range {min:.4} to {max:.4}"));
    });
}
