use std::collections::BTreeMap;

use super::filter::FilteredView;
use super::model::Metric;

// ---------------------------------------------------------------------------
// PivotTable – long form (one row per year × category) to wide form
// ---------------------------------------------------------------------------

/// One metric of a [`FilteredView`] reshaped to a year-by-category grid for
/// tabular display. Years ascend; columns follow the dataset's category
/// enumeration order.
///
/// Cells hold the exact source values. An absent cell stays absent (`None`),
/// so a data gap is distinguishable from a true zero; rounding happens only
/// in [`PivotTable::display_cell`] and never touches the stored values.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    pub metric: Metric,
    /// Column order, inherited from the source view.
    pub categories: Vec<&'static str>,
    cells: BTreeMap<i32, BTreeMap<&'static str, f64>>,
}

/// Reshape a view into a [`PivotTable`] for one metric.
///
/// Should the source ever contain duplicate (year, category) pairs, the last
/// row in source order wins; the well-formed datasets never exercise this,
/// but the policy is deterministic and pinned by a test.
pub fn pivot(view: &FilteredView, metric: Metric) -> PivotTable {
    let mut cells: BTreeMap<i32, BTreeMap<&'static str, f64>> = BTreeMap::new();
    for row in &view.rows {
        if let Some(value) = row.value(metric) {
            cells.entry(row.year).or_default().insert(row.category, value);
        }
    }
    PivotTable {
        metric,
        categories: view.categories.clone(),
        cells,
    }
}

/// Round to two decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl PivotTable {
    /// Years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.cells.keys().copied().collect()
    }

    /// Exact cell value, or `None` when the (year, category) pair has no data.
    pub fn cell(&self, year: i32, category: &str) -> Option<f64> {
        self.cells.get(&year)?.get(category).copied()
    }

    /// Cell value rounded to two decimals, for table rendering and export.
    pub fn display_cell(&self, year: i32, category: &str) -> Option<f64> {
        self.cell(year, category).map(round2)
    }

    /// Sum of all category values in one year's row.
    pub fn row_total(&self, year: i32) -> f64 {
        self.cells
            .get(&year)
            .map(|row| row.values().sum())
            .unwrap_or(0.0)
    }

    /// Whether the table has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::Row;

    fn view(rows: Vec<(i32, &'static str, f64)>) -> FilteredView {
        FilteredView {
            rows: rows
                .into_iter()
                .map(|(year, category, v)| Row {
                    year,
                    category,
                    values: BTreeMap::from([(Metric::Revenue, v)]),
                    era: None,
                })
                .collect(),
            categories: vec!["X", "Y"],
        }
    }

    #[test]
    fn well_formed_view_pivots_without_gaps() {
        let table = pivot(
            &view(vec![
                (2021, "X", 1.25),
                (2021, "Y", 2.5),
                (2022, "X", 3.0),
                (2022, "Y", 4.0),
            ]),
            Metric::Revenue,
        );
        assert_eq!(table.years(), vec![2021, 2022]);
        for year in table.years() {
            for cat in &table.categories {
                assert!(table.cell(year, cat).is_some());
            }
        }
        assert_eq!(table.cell(2021, "Y"), Some(2.5));
    }

    #[test]
    fn missing_pair_stays_absent_not_zero() {
        let table = pivot(
            &view(vec![(2021, "X", 1.0), (2022, "X", 2.0), (2022, "Y", 3.0)]),
            Metric::Revenue,
        );
        assert_eq!(table.cell(2021, "Y"), None);
        assert_eq!(table.cell(2022, "Y"), Some(3.0));
    }

    #[test]
    fn duplicate_pair_resolves_last_write_wins() {
        let table = pivot(
            &view(vec![(2021, "X", 1.0), (2021, "Y", 5.0), (2021, "X", 9.0)]),
            Metric::Revenue,
        );
        assert_eq!(table.cell(2021, "X"), Some(9.0));
    }

    #[test]
    fn rounding_is_display_only() {
        let table = pivot(&view(vec![(2021, "X", 7.456), (2021, "Y", 2.0)]), Metric::Revenue);
        assert_eq!(table.cell(2021, "X"), Some(7.456));
        assert_eq!(table.display_cell(2021, "X"), Some(7.46));
        // Re-reading after display rounding still yields the exact value.
        assert_eq!(table.cell(2021, "X"), Some(7.456));
    }

    #[test]
    fn row_total_matches_raw_sum() {
        let source = view(vec![(2021, "X", 1.1), (2021, "Y", 2.2), (2022, "X", 3.3), (2022, "Y", 4.4)]);
        let table = pivot(&source, Metric::Revenue);
        for year in table.years() {
            let raw: f64 = source
                .rows
                .iter()
                .filter(|r| r.year == year)
                .filter_map(|r| r.value(Metric::Revenue))
                .sum();
            assert!((table.row_total(year) - raw).abs() < 1e-9);
        }
    }

    #[test]
    fn pivot_is_idempotent_under_reflattening() {
        let table = pivot(
            &view(vec![
                (2021, "X", 1.0),
                (2021, "Y", 2.0),
                (2022, "X", 3.0),
                (2022, "Y", 4.0),
            ]),
            Metric::Revenue,
        );

        // Flatten back to long form, then pivot again.
        let mut flat = Vec::new();
        for year in table.years() {
            for cat in &table.categories {
                if let Some(v) = table.cell(year, cat) {
                    flat.push((year, *cat, v));
                }
            }
        }
        let again = pivot(&view(flat), Metric::Revenue);
        assert_eq!(again, table);
    }
}
