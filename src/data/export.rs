use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::filter::FilteredView;
use super::model::Metric;
use super::pivot::PivotTable;

// ---------------------------------------------------------------------------
// Filtered-row export (long form, exact values)
// ---------------------------------------------------------------------------

/// One exported row. Metric columns are flattened next to the fixed fields so
/// the JSON shape matches the CSV layout.
#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(flatten)]
    values: BTreeMap<&'static str, f64>,
    #[serde(rename = "Market Type", skip_serializing_if = "Option::is_none")]
    market_type: Option<&'static str>,
}

fn export_rows<'a>(view: &'a FilteredView, metrics: &[Metric]) -> Vec<ExportRow<'a>> {
    view.rows
        .iter()
        .map(|row| ExportRow {
            year: row.year,
            category: row.category,
            values: metrics
                .iter()
                .filter_map(|&m| row.value(m).map(|v| (m.label(), v)))
                .collect(),
            market_type: row.era.map(|e| e.label()),
        })
        .collect()
}

/// Write the view's rows as CSV, one line per (year, category), exact values.
pub fn write_view_csv(view: &FilteredView, metrics: &[Metric], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    let has_era = view.rows.iter().any(|r| r.era.is_some());
    let mut header = vec!["Year".to_string(), "Category".to_string()];
    header.extend(metrics.iter().map(|m| m.label().to_string()));
    if has_era {
        header.push("Market Type".to_string());
    }
    writer.write_record(&header).context("writing CSV header")?;

    for row in &view.rows {
        let mut record = vec![row.year.to_string(), row.category.to_string()];
        for &metric in metrics {
            record.push(row.value(metric).map(|v| v.to_string()).unwrap_or_default());
        }
        if has_era {
            record.push(row.era.map(|e| e.label().to_string()).unwrap_or_default());
        }
        writer.write_record(&record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    log::info!("Exported {} rows to {}", view.len(), path.display());
    Ok(())
}

/// Write the view's rows as a pretty-printed JSON array of records.
pub fn write_view_json(view: &FilteredView, metrics: &[Metric], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, &export_rows(view, metrics))
        .context("serializing rows to JSON")?;

    log::info!("Exported {} rows to {}", view.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Pivot-table export (wide form, display-rounded)
// ---------------------------------------------------------------------------

/// Write a pivot table as CSV: years as rows, categories as columns, cells
/// rounded the way the on-screen table shows them. Absent cells stay empty so
/// a gap never masquerades as a zero.
pub fn write_pivot_csv(table: &PivotTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut header = vec!["Year".to_string()];
    header.extend(table.categories.iter().map(|c| c.to_string()));
    writer.write_record(&header).context("writing CSV header")?;

    for year in table.years() {
        let mut record = vec![year.to_string()];
        for cat in &table.categories {
            record.push(
                table
                    .display_cell(year, cat)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;

    log::info!(
        "Exported pivot table ({}) to {}",
        table.metric,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::{chip_market, memory_production};
    use crate::data::filter::filter_years;
    use crate::data::pivot::pivot;

    #[test]
    fn view_csv_round_trips_through_the_csv_reader() {
        let ds = chip_market();
        let view = filter_years(&ds, 2023, 2023);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chip.csv");

        write_view_csv(&view, &ds.metrics, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(
            headers,
            vec![
                "Year",
                "Category",
                "Market Share (%)",
                "Revenue (Billions USD)",
                "Market Type",
            ]
        );

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 4);
        assert_eq!(&records[0][0], "2023");
        assert_eq!(&records[0][1], "NVIDIA");
        assert_eq!(&records[0][2], "65");
        assert_eq!(&records[0][4], "AI Accelerator");
    }

    #[test]
    fn view_json_produces_record_objects() {
        let ds = memory_production();
        let view = filter_years(&ds, 2025, 2025);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memory.json");

        write_view_json(&view, &ds.metrics, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0]["Year"], 2025);
        assert_eq!(records[0]["Category"], "Samsung");
        assert_eq!(records[0]["Units Produced (Billions)"], 49.7);
        // Memory rows carry no era label, so the field is omitted entirely.
        assert!(records[0].get("Market Type").is_none());
    }

    #[test]
    fn pivot_csv_leaves_absent_cells_empty() {
        let ds = chip_market();
        let mut view = filter_years(&ds, 2024, 2025);
        // Simulate a data gap.
        view.rows.retain(|r| !(r.year == 2024 && r.category == "AMD"));

        let table = pivot(&view, crate::data::model::Metric::MarketShare);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pivot.csv");
        write_pivot_csv(&table, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        // Header: Year, NVIDIA, Intel, AMD, Others — AMD is column 3.
        assert_eq!(&records[0][0], "2024");
        assert_eq!(&records[0][3], "");
        assert_eq!(&records[1][3], "6.5");
    }
}
