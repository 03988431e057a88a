use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::assets::{AssetStatus, ResolvedAsset};
use crate::data::filter::FilteredView;
use crate::state::AppState;
use crate::ui::plot;

const TITLE: &str = "🧬 Cord-19 COVID-19 Research Explorer";

const FEATURES: [&str; 3] = [
    "Filter data by year and journal",
    "View summary statistics and visualizations",
    "Analyze trends in COVID-19 research over time",
];

const INSIGHTS: [(&str, &str); 4] = [
    (
        "Publications Over Time:",
        "Shows how COVID-19 research output has changed annually.",
    ),
    (
        "Top Journals:",
        "Identifies the journals with the most publications.",
    ),
    (
        "Word Cloud:",
        "Highlights common keywords in research paper titles.",
    ),
    (
        "Source Distribution:",
        "Displays which sources contributed most to the dataset.",
    ),
];

// ---------------------------------------------------------------------------
// Central panel – one top-to-bottom render pass
// ---------------------------------------------------------------------------

/// Render the dashboard body. Reads `state` only.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let view = state.view();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            header(ui);
            ui.separator();

            ui.heading("Sample of Filtered Data");
            ui.label(format!(
                "Here are the first {} rows of the filtered dataset:",
                state.sample_rows
            ));
            sample_table(ui, &view, state.sample_rows);
            ui.add_space(8.0);

            summary_section(ui, state, &view);
            ui.add_space(8.0);

            ui.heading("📈 Visualizations");
            for asset in &state.assets {
                visualization(ui, asset);
                ui.add_space(8.0);
            }

            ui.heading("🔍 Summary Insights");
            for (topic, text) in INSIGHTS {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    ui.label("•");
                    ui.label(RichText::new(topic).strong());
                    ui.label(text);
                });
            }
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Dashboard loaded successfully! Use the filters on the left to customize the data view.",
                )
                .color(Color32::from_rgb(80, 180, 100)),
            );
        });
}

fn header(ui: &mut Ui) {
    ui.heading(RichText::new(TITLE).size(26.0));
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("This dashboard allows you to");
        ui.label(RichText::new("explore the Cord-19 dataset").strong());
        ui.label(", which contains a large collection of research papers related to");
        ui.label(RichText::new("COVID-19 and coronaviruses").strong());
        ui.label(".");
    });
    ui.label(RichText::new("Features:").strong());
    for feature in FEATURES {
        ui.label(format!("• {feature}"));
    }
}

fn sample_table(ui: &mut Ui, view: &FilteredView<'_>, rows: usize) {
    if view.is_empty() {
        ui.label("No papers match the current filters.");
        return;
    }

    let columns = view.dataset().columns();
    let sample: Vec<_> = view.head(rows).collect();

    ui.push_id("sample_table", |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .vscroll(false)
                .columns(Column::auto().at_most(320.0).clip(true), columns.len())
                .header(20.0, |mut header| {
                    for name in columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for record in &sample {
                        body.row(18.0, |mut row| {
                            for name in columns {
                                row.col(|ui: &mut Ui| {
                                    ui.label(record.cell(name).to_string());
                                });
                            }
                        });
                    }
                });
        });
    });
}

fn summary_section(ui: &mut Ui, state: &AppState, view: &FilteredView<'_>) {
    let summary = state.summary();
    ui.heading("Dataset Summary");
    ui.label(RichText::new(summary.total_line()).strong());
    ui.label(RichText::new(summary.journals_line()).strong());
    ui.label(RichText::new(summary.year_line()).strong());
    ui.add_space(4.0);
    plot::papers_per_year_chart(ui, view);
}

fn visualization(ui: &mut Ui, asset: &ResolvedAsset) {
    let vis = &asset.visualization;
    ui.label(RichText::new(vis.heading).size(18.0).strong());

    match &asset.status {
        AssetStatus::Found(_) => {
            if let Some(uri) = asset.status.image_uri() {
                ui.add(
                    egui::Image::new(uri)
                        .max_width(ui.available_width())
                        .maintain_aspect_ratio(true),
                );
            }
            ui.label(RichText::new(vis.caption).italics().weak());
        }
        AssetStatus::Missing(_) => {
            if let Some(warning) = asset.status.warning() {
                ui.label(RichText::new(format!("⚠ {warning}")).color(Color32::YELLOW));
            }
        }
    }
}
