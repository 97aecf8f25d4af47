use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export;
use crate::data::pivot::pivot;
use crate::state::{AppState, ChartKind, DashboardState, StatusLine};

// ---------------------------------------------------------------------------
// Left side panel – per-section controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            section_controls(ui, "chip", &mut state.chip);
            ui.add_space(8.0);
            ui.separator();
            section_controls(ui, "memory", &mut state.memory);
        });
}

fn section_controls(ui: &mut Ui, id: &str, dash: &mut DashboardState) {
    ui.strong(dash.title);
    ui.add_space(4.0);

    // ---- Year range (each bound clamped to the domain, not to the other:
    // a transiently inverted pair just shows the empty-range state) ----
    let (lo, hi) = dash.year_domain();
    let mut range_changed = false;
    range_changed |= ui
        .add(egui::Slider::new(&mut dash.year_range.0, lo..=hi).text("From"))
        .changed();
    range_changed |= ui
        .add(egui::Slider::new(&mut dash.year_range.1, lo..=hi).text("To"))
        .changed();
    if range_changed {
        dash.refilter();
    }

    // ---- Chart type ----
    ui.add_space(4.0);
    ui.label("Chart type");
    egui::ComboBox::from_id_salt(format!("{id}_chart_kind"))
        .selected_text(dash.chart.label())
        .show_ui(ui, |ui: &mut Ui| {
            for kind in ChartKind::ALL {
                if ui.selectable_label(dash.chart == kind, kind.label()).clicked() {
                    dash.chart = kind;
                }
            }
        });

    // ---- Metric ----
    ui.add_space(4.0);
    ui.label("Metric");
    for metric in dash.dataset.metrics.clone() {
        ui.radio_value(&mut dash.metric, metric, metric.label());
    }

    ui.add_space(4.0);
    ui.checkbox(&mut dash.show_table, "Show data table");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            ui.menu_button("Export", |ui: &mut Ui| {
                export_menu(ui, state);
            });
        });

        ui.separator();

        ui.label(format!(
            "chip: {}/{} rows · memory: {}/{} rows",
            state.chip.view.len(),
            state.chip.dataset.len(),
            state.memory.view.len(),
            state.memory.dataset.len()
        ));

        ui.separator();

        if let Some(status) = &state.status_message {
            let text = RichText::new(&status.text);
            if status.error {
                ui.label(text.color(Color32::RED));
            } else {
                ui.label(text.weak());
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Export actions
// ---------------------------------------------------------------------------

enum ExportKind {
    RowsCsv,
    RowsJson,
    PivotCsv,
}

fn export_menu(ui: &mut Ui, state: &mut AppState) {
    let mut request: Option<(bool, ExportKind)> = None;

    ui.label(RichText::new("Chip market").small());
    if ui.button("Filtered rows (CSV)").clicked() {
        request = Some((true, ExportKind::RowsCsv));
    }
    if ui.button("Filtered rows (JSON)").clicked() {
        request = Some((true, ExportKind::RowsJson));
    }
    if ui.button("Pivot table (CSV)").clicked() {
        request = Some((true, ExportKind::PivotCsv));
    }

    ui.separator();
    ui.label(RichText::new("Memory production").small());
    if ui.button("Filtered rows (CSV)").clicked() {
        request = Some((false, ExportKind::RowsCsv));
    }
    if ui.button("Filtered rows (JSON)").clicked() {
        request = Some((false, ExportKind::RowsJson));
    }
    if ui.button("Pivot table (CSV)").clicked() {
        request = Some((false, ExportKind::PivotCsv));
    }

    if let Some((chip, kind)) = request {
        let dash = if chip { &state.chip } else { &state.memory };
        if let Some(status) = run_export(dash, kind) {
            state.status_message = Some(status);
        }
        ui.close_menu();
    }
}

/// Ask for a destination and run one export; `None` when the user cancels
/// the dialog.
fn run_export(dash: &DashboardState, kind: ExportKind) -> Option<StatusLine> {
    let (extension, suffix) = match kind {
        ExportKind::RowsCsv => ("csv", "rows"),
        ExportKind::RowsJson => ("json", "rows"),
        ExportKind::PivotCsv => ("csv", "pivot"),
    };
    let path: PathBuf = rfd::FileDialog::new()
        .set_title("Export data")
        .add_filter(extension.to_uppercase(), &[extension])
        .set_file_name(format!("{}-{suffix}.{extension}", dash.dataset.name))
        .save_file()?;

    let result = match kind {
        ExportKind::RowsCsv => export::write_view_csv(&dash.view, &dash.dataset.metrics, &path),
        ExportKind::RowsJson => export::write_view_json(&dash.view, &dash.dataset.metrics, &path),
        ExportKind::PivotCsv => export::write_pivot_csv(&pivot(&dash.view, dash.metric), &path),
    };

    match result {
        Ok(()) => Some(StatusLine::info(format!("Exported {}", path.display()))),
        Err(e) => {
            log::error!("Export failed: {e:#}");
            Some(StatusLine::error(format!("Error: {e:#}")))
        }
    }
}
