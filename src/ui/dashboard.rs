use eframe::egui::{RichText, Ui};

use crate::data::filter::{latest_period, LatestPeriod};
use crate::data::model::Metric;
use crate::data::pivot::pivot;
use crate::state::DashboardState;

use super::{plot, table};

// ---------------------------------------------------------------------------
// One dashboard section: heading, stat tiles, chart, optional table
// ---------------------------------------------------------------------------

pub fn section(ui: &mut Ui, id: &str, subtitle: &str, dash: &DashboardState) {
    ui.heading(dash.title);
    ui.weak(subtitle);
    ui.add_space(6.0);

    stats_row(ui, dash);
    ui.add_space(8.0);

    plot::section_chart(ui, &format!("{id}_chart"), dash);

    if dash.show_table {
        ui.add_space(8.0);
        ui.strong(format!("{} by year", dash.metric));
        let pivoted = pivot(&dash.view, dash.metric);
        table::pivot_table(ui, &format!("{id}_table"), &pivoted);
    }
}

// ---------------------------------------------------------------------------
// Key statistics
// ---------------------------------------------------------------------------

/// Headline tiles for the latest year of the filtered range. An empty range
/// surfaces as an explicit notice instead of stale or partial numbers.
fn stats_row(ui: &mut Ui, dash: &DashboardState) {
    let latest = match latest_period(&dash.view) {
        Ok(latest) => latest,
        Err(e) => {
            ui.weak(e.to_string());
            return;
        }
    };

    ui.horizontal(|ui: &mut Ui| {
        for cat in dash.dataset.categories.iter().take(3) {
            stat_tile(
                ui,
                &format!("{cat} {}", metric_noun(dash.stat_metric)),
                latest.value_of(cat, dash.stat_metric),
                dash.stat_metric,
                latest.year,
            );
        }
        total_tile(ui, &latest, dash.total_metric);
    });
}

fn stat_tile(ui: &mut Ui, title: &str, value: Option<f64>, metric: Metric, year: i32) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(title).small());
            let text = match value {
                Some(v) => format_stat(metric, v),
                // Lookup came back empty; show a gap, not a zero.
                None => "–".to_string(),
            };
            ui.label(RichText::new(text).strong().size(20.0));
            ui.small(year.to_string());
        });
    });
}

fn total_tile(ui: &mut Ui, latest: &LatestPeriod, metric: Metric) {
    let title = match metric {
        Metric::Revenue => "Total Market Size",
        Metric::UnitsProduced => "Total Production",
        Metric::MarketShare => "Total Share",
    };
    stat_tile(ui, title, Some(latest.total(metric)), metric, latest.year);
}

fn metric_noun(metric: Metric) -> &'static str {
    match metric {
        Metric::MarketShare => "Market Share",
        Metric::Revenue => "Revenue",
        Metric::UnitsProduced => "Production",
    }
}

fn format_stat(metric: Metric, v: f64) -> String {
    match metric {
        Metric::MarketShare => format!("{v:.1}%"),
        Metric::Revenue => format!("${v:.1}B"),
        Metric::UnitsProduced => format!("{v:.1}B chips"),
    }
}
