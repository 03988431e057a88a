use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::filter::FilteredView;
use crate::summary::papers_per_year;

// ---------------------------------------------------------------------------
// Papers per year of the current filtered view
// ---------------------------------------------------------------------------

/// Bar chart of the filtered view's yearly counts. Recomputed every frame
/// from the view, so it always agrees with the summary counters.
pub fn papers_per_year_chart(ui: &mut Ui, view: &FilteredView<'_>) {
    let counts = papers_per_year(view);
    if counts.is_empty() {
        ui.label("No papers match the current filters.");
        return;
    }

    let bars: Vec<Bar> = counts
        .iter()
        .map(|(&year, &n)| Bar::new(year as f64, n as f64).name(year.to_string()))
        .collect();

    let chart = BarChart::new(bars)
        .name("Papers")
        .color(Color32::LIGHT_BLUE)
        .width(0.8);

    Plot::new("papers_per_year")
        .height(220.0)
        .x_axis_label("Publication year")
        .y_axis_label("Papers")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
