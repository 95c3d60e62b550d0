use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the padded series as one connected line over the normalised axis.
pub fn series_plot(ui: &mut Ui, state: &AppState) {
    let points: PlotPoints = state.series.points().into_iter().collect();

    let line = Line::new(points)
        .name(format!("{}*.dat", state.file_prefix))
        .color(Color32::LIGHT_BLUE)
        .width(1.5);

    Plot::new("series_plot")
        .x_axis_label("Position")
        .y_axis_label("Sample")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}
