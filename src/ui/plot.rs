use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points,
    Polygon, Text, VLine,
};

use crate::data::filter::latest_period;
use crate::data::pivot::pivot;
use crate::state::{ChartKind, DashboardState};

const CHART_HEIGHT: f32 = 340.0;

// ---------------------------------------------------------------------------
// Chart dispatch
// ---------------------------------------------------------------------------

/// Render a section's chart for its current view, metric, and chart kind.
pub fn section_chart(ui: &mut Ui, id: &str, dash: &DashboardState) {
    if dash.view.is_empty() {
        empty_notice(ui);
        return;
    }
    match dash.chart {
        ChartKind::Bar => grouped_bars(ui, id, dash),
        ChartKind::Line => trend_lines(ui, id, dash),
        ChartKind::PieLatest => pie_latest(ui, id, dash),
        ChartKind::StackedArea => stacked_area(ui, id, dash),
    }
}

fn empty_notice(ui: &mut Ui) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.weak("No data in the selected year range.");
    });
    ui.add_space(16.0);
}

/// Dashed vertical marker at the market-redefinition boundary.
fn era_marker_line(x: f64) -> VLine {
    VLine::new(x)
        .color(Color32::ORANGE)
        .style(LineStyle::dashed_loose())
        .name("Market redefinition")
}

// ---------------------------------------------------------------------------
// Bar chart (grouped per category)
// ---------------------------------------------------------------------------

fn grouped_bars(ui: &mut Ui, id: &str, dash: &DashboardState) {
    let n = dash.view.categories.len().max(1);
    let width = 0.8 / n as f64;

    let mut charts = Vec::with_capacity(n);
    for (i, cat) in dash.view.categories.iter().enumerate() {
        let offset = (i as f64 - (n as f64 - 1.0) / 2.0) * width;
        let bars: Vec<Bar> = dash
            .view
            .rows
            .iter()
            .filter(|r| r.category == *cat)
            .filter_map(|r| {
                r.value(dash.metric)
                    .map(|v| Bar::new(r.year as f64 + offset, v).width(width))
            })
            .collect();
        charts.push(
            BarChart::new(bars)
                .name(*cat)
                .color(dash.colors.color_for(cat)),
        );
    }

    Plot::new(id.to_owned())
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label(dash.metric.label())
        .show(ui, |plot_ui| {
            if let Some(x) = dash.era_marker() {
                plot_ui.vline(era_marker_line(x));
            }
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Line chart (one trend per category, with markers)
// ---------------------------------------------------------------------------

fn trend_lines(ui: &mut Ui, id: &str, dash: &DashboardState) {
    Plot::new(id.to_owned())
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label(dash.metric.label())
        .show(ui, |plot_ui| {
            if let Some(x) = dash.era_marker() {
                plot_ui.vline(era_marker_line(x));
            }
            for cat in &dash.view.categories {
                let color = dash.colors.color_for(cat);
                let series: Vec<[f64; 2]> = dash
                    .view
                    .rows
                    .iter()
                    .filter(|r| r.category == *cat)
                    .filter_map(|r| r.value(dash.metric).map(|v| [r.year as f64, v]))
                    .collect();

                let points: PlotPoints = series.clone().into();
                plot_ui.line(Line::new(points).name(*cat).color(color).width(2.0));
                plot_ui.points(
                    Points::new(PlotPoints::from(series))
                        .name(*cat)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Pie chart (latest year in the filtered range)
// ---------------------------------------------------------------------------

fn pie_latest(ui: &mut Ui, id: &str, dash: &DashboardState) {
    // The empty view is caught by the dispatcher, but selection can still
    // fail to produce anything drawable (all-zero period).
    let latest = match latest_period(&dash.view) {
        Ok(latest) => latest,
        Err(_) => {
            empty_notice(ui);
            return;
        }
    };
    let total = latest.total(dash.metric);
    if total <= 0.0 {
        empty_notice(ui);
        return;
    }

    Plot::new(id.to_owned())
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // Start at 12 o'clock and sweep clockwise.
            let mut start = std::f64::consts::FRAC_PI_2;
            for row in &latest.rows {
                let Some(value) = row.value(dash.metric) else {
                    continue;
                };
                if value <= 0.0 {
                    continue;
                }
                let sweep = value / total * std::f64::consts::TAU;
                let color = dash.colors.color_for(row.category);

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(sector_points(start, sweep)))
                        .name(row.category)
                        .fill_color(color.gamma_multiply(0.85))
                        .stroke(Stroke::new(1.0, color)),
                );

                // Percentage label at the sector's midpoint.
                let mid = start - sweep / 2.0;
                let share = value / total * 100.0;
                let category = row.category;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    format!("{category}\n{share:.1}%"),
                ));

                start -= sweep;
            }
        });
}

/// Unit-circle sector outline from `start` sweeping `sweep` radians clockwise.
fn sector_points(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = ((sweep / std::f64::consts::TAU) * 64.0).ceil().max(2.0) as usize;
    let mut pts: Vec<[f64; 2]> = Vec::with_capacity(steps + 2);
    pts.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start - sweep * i as f64 / steps as f64;
        pts.push([angle.cos(), angle.sin()]);
    }
    pts
}

// ---------------------------------------------------------------------------
// Stacked area chart (cumulative bands in category order)
// ---------------------------------------------------------------------------

fn stacked_area(ui: &mut Ui, id: &str, dash: &DashboardState) {
    let table = pivot(&dash.view, dash.metric);
    let years = table.years();

    // Cumulative upper boundary per year; a missing cell contributes nothing.
    let mut lower = vec![0.0f64; years.len()];
    let mut bands = Vec::with_capacity(table.categories.len());
    for cat in &table.categories {
        let upper: Vec<f64> = years
            .iter()
            .enumerate()
            .map(|(k, &year)| lower[k] + table.cell(year, cat).unwrap_or(0.0))
            .collect();

        let mut pts: Vec<[f64; 2]> = Vec::with_capacity(years.len() * 2);
        for (k, &year) in years.iter().enumerate() {
            pts.push([year as f64, lower[k]]);
        }
        for (k, &year) in years.iter().enumerate().rev() {
            pts.push([year as f64, upper[k]]);
        }

        let color = dash.colors.color_for(cat);
        bands.push(
            Polygon::new(PlotPoints::from(pts))
                .name(*cat)
                .fill_color(color.gamma_multiply(0.55))
                .stroke(Stroke::new(1.5, color)),
        );
        lower = upper;
    }

    Plot::new(id.to_owned())
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label(dash.metric.label())
        .show(ui, |plot_ui| {
            if let Some(x) = dash.era_marker() {
                plot_ui.vline(era_marker_line(x));
            }
            for band in bands {
                plot_ui.polygon(band);
            }
        });
}
