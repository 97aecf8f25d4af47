use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::pivot::PivotTable;

// ---------------------------------------------------------------------------
// Pivot table (years as rows, categories as columns)
// ---------------------------------------------------------------------------

/// Render a pivot table. Absent cells show an em dash so a data gap never
/// reads as a zero.
pub fn pivot_table(ui: &mut Ui, id: &str, table: &PivotTable) {
    if table.is_empty() {
        ui.weak("No data in the selected year range.");
        return;
    }

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(60.0))
            .columns(Column::remainder().at_least(80.0), table.categories.len())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Year");
                });
                for cat in &table.categories {
                    header.col(|ui| {
                        ui.strong(*cat);
                    });
                }
            })
            .body(|mut body| {
                for year in table.years() {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label(year.to_string());
                        });
                        for cat in &table.categories {
                            row.col(|ui| match table.display_cell(year, cat) {
                                Some(v) => {
                                    ui.label(format!("{v:.2}"));
                                }
                                None => {
                                    ui.label(RichText::new("—").weak());
                                }
                            });
                        }
                    });
                }
            });
    });
}
