use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.label("Use the filters below to customize the dataset view:");
    ui.separator();

    year_range_controls(ui, state);
    ui.separator();
    journal_controls(ui, state);
}

fn year_range_controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Select Publication Year Range");

    let (Some(bounds), Some(current)) = (state.dataset.year_bounds(), state.filters.year_range)
    else {
        ui.label("No dated papers in the dataset.");
        return;
    };

    let mut from = current.min();
    let mut to = current.max();
    let bounds_range = bounds.min()..=bounds.max();

    let from_changed = ui
        .add(egui::Slider::new(&mut from, bounds_range.clone()).text("from"))
        .changed();
    let to_changed = ui
        .add(egui::Slider::new(&mut to, bounds_range).text("to"))
        .changed();

    if from_changed || to_changed {
        // Dragging one handle past the other pushes it along.
        if from_changed && from > to {
            to = from;
        } else if to_changed && to < from {
            from = to;
        }
        state.set_year_range(from, to);
    }
}

fn journal_controls(ui: &mut Ui, state: &mut AppState) {
    let n_selected = state.filters.journals.len();
    let n_total = state.dataset.journals().len();
    ui.strong(format!("Select Journal(s)  ({n_selected}/{n_total})"));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_journals();
        }
        if ui.small_button("None").clicked() {
            state.select_no_journals();
        }
        if ui.small_button("Reset filters").clicked() {
            state.reset_filters();
        }
    });

    ui.add(
        egui::TextEdit::singleline(&mut state.journal_query)
            .hint_text("Search journals…"),
    );

    // Collect toggles first; the option list borrows the dataset.
    let mut toggled: Vec<String> = Vec::new();
    ScrollArea::vertical()
        .id_salt("journal_list")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for journal in state.journal_options() {
                let mut checked = state.filters.journals.contains(journal);
                if ui.checkbox(&mut checked, RichText::new(journal)).changed() {
                    toggled.push(journal.to_string());
                }
            }
        });

    for journal in toggled {
        state.toggle_journal(&journal);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status strip above the dashboard.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} papers loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));
        ui.separator();
        let missing = state
            .assets
            .iter()
            .filter(|a| a.status.warning().is_some())
            .count();
        if missing > 0 {
            ui.label(
                RichText::new(format!("{missing} chart image(s) missing"))
                    .color(egui::Color32::YELLOW),
            );
        }
    });
}
