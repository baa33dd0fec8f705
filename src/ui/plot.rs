use eframe::egui::{Color32, Id, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::TraceColors;
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Comparison charts (central panel)
// ---------------------------------------------------------------------------

/// Id shared by both charts so panning/zooming one moves the other's x-axis.
const LINK_GROUP: &str = "comparison_x";

/// Render the overlay chart above the difference chart for the current column.
pub fn comparison_plots(ui: &mut Ui, state: &ViewerState, colors: &TraceColors) {
    let view = state.view();
    let col = &view.column;
    let first_label = &state.dataset.first.label;
    let second_label = &state.dataset.second.label;

    // Title rows plus spacing eat into the available height.
    let chart_height = ((ui.available_height() - 60.0) / 2.0).max(80.0);

    // Ids include the cursor so every column starts with freshly fitted bounds.
    let cursor = state.cursor();
    let link = Id::new((LINK_GROUP, cursor));

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{col} Comparison")).strong());
    });
    Plot::new(("overlay_plot", cursor))
        .legend(Legend::default())
        .x_axis_label("Sample Index")
        .y_axis_label(col.as_str())
        .height(chart_height)
        .show_grid(true)
        .link_axis(link, [true, false])
        .link_cursor(link, [true, false])
        .show(ui, |plot_ui| {
            plot_ui.line(trace(&view.first, format!("{col} ({first_label})"), colors.first));
            plot_ui.line(trace(&view.second, format!("{col} ({second_label})"), colors.second));
        });

    ui.add_space(8.0);

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(format!("{col} Difference")).strong());
    });
    Plot::new(("difference_plot", cursor))
        .legend(Legend::default())
        .x_axis_label("Sample Index")
        .y_axis_label(format!("Difference ({col})"))
        .height(chart_height)
        .show_grid(true)
        .link_axis(link, [true, false])
        .link_cursor(link, [true, false])
        .show(ui, |plot_ui| {
            plot_ui.line(trace(
                &view.diff,
                format!("{second_label} - {first_label}"),
                colors.difference,
            ));
        });
}

/// A line over `values` with the row position as x.
fn trace(values: &[f64], name: String, color: Color32) -> Line<'_> {
    let points: PlotPoints = values
        .iter()
        .enumerate()
        .map(|(i, &y)| [i as f64, y])
        .collect();

    Line::new(points).name(name).color(color).width(1.5)
}
