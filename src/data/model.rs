use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Metric – an enumerated value column
// ---------------------------------------------------------------------------

/// A value column a dataset can carry. Closed enumeration: the UI can only
/// offer metrics the dataset declares, so an unknown metric name is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    MarketShare,
    Revenue,
    UnitsProduced,
}

impl Metric {
    /// Column header used in the UI and in exported files.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::MarketShare => "Market Share (%)",
            Metric::Revenue => "Revenue (Billions USD)",
            Metric::UnitsProduced => "Units Produced (Billions)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// MarketEra – non-filtering annotation on chip-market rows
// ---------------------------------------------------------------------------

/// Which market definition a chip-market row was measured under. Carried as
/// an annotation only: filtering and aggregation never consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketEra {
    /// Discrete GPU market (gaming, workstation, early ML).
    GeneralGpu,
    /// AI workloads moving to data centers; figures interpolated.
    Transition,
    /// Dedicated AI accelerator market.
    AiAccelerator,
}

impl MarketEra {
    pub fn label(&self) -> &'static str {
        match self {
            MarketEra::GeneralGpu => "General GPU",
            MarketEra::Transition => "Transition",
            MarketEra::AiAccelerator => "AI Accelerator",
        }
    }
}

impl fmt::Display for MarketEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Row – one (year, category) observation
// ---------------------------------------------------------------------------

/// A single observation: one category in one year, with a value for every
/// metric the dataset carries. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub year: i32,
    pub category: &'static str,
    /// Metric → value. `BTreeMap` so iteration order is stable.
    pub values: BTreeMap<Metric, f64>,
    /// Market-era annotation (chip dataset only).
    pub era: Option<MarketEra>,
}

impl Row {
    /// Value of a metric, if the row carries it.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete immutable source table
// ---------------------------------------------------------------------------

/// A fixed source table, built once at startup and only ever read.
///
/// Invariant: every (year, category) pair appears exactly once, every row
/// carries every declared metric, and all values are non-negative.
/// [`Dataset::validate`] checks this and reports the first violation.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Short name used in log messages and export file names.
    pub name: &'static str,
    /// Category enumeration in domain display order (not alphabetical).
    pub categories: Vec<&'static str>,
    /// Metrics every row carries, in display order.
    pub metrics: Vec<Metric>,
    /// All rows, grouped by year in source order.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest and largest year present, or `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.rows.iter().map(|r| r.year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }

    /// x-position of the first era change, halfway between the last year of
    /// the old era and the first year of the new one. `None` when no row is
    /// annotated or the era never changes.
    pub fn era_boundary(&self) -> Option<f64> {
        let mut prev: Option<(i32, MarketEra)> = None;
        for row in &self.rows {
            let era = row.era?;
            if let Some((prev_year, prev_era)) = prev {
                if era != prev_era && row.year != prev_year {
                    return Some((prev_year + row.year) as f64 / 2.0);
                }
            }
            prev = Some((row.year, era));
        }
        None
    }

    /// Check the dataset invariant, returning the first violation found.
    pub fn validate(&self) -> Result<(), DataError> {
        let declared: BTreeSet<&str> = self.categories.iter().copied().collect();
        let mut seen: BTreeMap<i32, BTreeSet<&str>> = BTreeMap::new();

        for row in &self.rows {
            if !declared.contains(row.category) {
                return Err(DataError::UnknownCategory {
                    dataset: self.name,
                    category: row.category.to_string(),
                });
            }
            if !seen.entry(row.year).or_default().insert(row.category) {
                return Err(DataError::DuplicateRow {
                    year: row.year,
                    category: row.category.to_string(),
                });
            }
            for &metric in &self.metrics {
                match row.value(metric) {
                    None => {
                        return Err(DataError::MissingMetric {
                            year: row.year,
                            category: row.category.to_string(),
                            metric,
                        });
                    }
                    Some(v) if v < 0.0 => {
                        return Err(DataError::NegativeValue {
                            year: row.year,
                            category: row.category.to_string(),
                            metric,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        // Every year must cover the full category enumeration.
        for (year, cats) in &seen {
            if let Some(missing) = self.categories.iter().find(|c| !cats.contains(*c)) {
                return Err(DataError::MissingRow {
                    year: *year,
                    category: missing.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DataError – the core error taxonomy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// Latest-period selection on a view with no rows (e.g. the year range
    /// excludes all data). Consumers surface this as a "no data" state.
    #[error("no rows in the selected year range")]
    EmptySelection,

    #[error("duplicate row for {category} in {year}")]
    DuplicateRow { year: i32, category: String },

    #[error("{category} has no row for {year}")]
    MissingRow { year: i32, category: String },

    #[error("row {category}/{year} is missing '{metric}'")]
    MissingMetric {
        year: i32,
        category: String,
        metric: Metric,
    },

    #[error("row {category}/{year} has a negative '{metric}'")]
    NegativeValue {
        year: i32,
        category: String,
        metric: Metric,
    },

    #[error("dataset '{dataset}' does not list category '{category}'")]
    UnknownCategory {
        dataset: &'static str,
        category: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, category: &'static str, share: f64) -> Row {
        Row {
            year,
            category,
            values: BTreeMap::from([(Metric::MarketShare, share)]),
            era: None,
        }
    }

    fn dataset(rows: Vec<Row>) -> Dataset {
        Dataset {
            name: "test",
            categories: vec!["A", "B"],
            metrics: vec![Metric::MarketShare],
            rows,
        }
    }

    #[test]
    fn validate_accepts_well_formed_table() {
        let ds = dataset(vec![
            row(2020, "A", 60.0),
            row(2020, "B", 40.0),
            row(2021, "A", 55.0),
            row(2021, "B", 45.0),
        ]);
        assert_eq!(ds.validate(), Ok(()));
        assert_eq!(ds.year_bounds(), Some((2020, 2021)));
    }

    #[test]
    fn validate_rejects_duplicate_pair() {
        let ds = dataset(vec![row(2020, "A", 60.0), row(2020, "A", 40.0)]);
        assert_eq!(
            ds.validate(),
            Err(DataError::DuplicateRow {
                year: 2020,
                category: "A".into(),
            })
        );
    }

    #[test]
    fn validate_rejects_gap_in_category_coverage() {
        let ds = dataset(vec![
            row(2020, "A", 60.0),
            row(2020, "B", 40.0),
            row(2021, "A", 55.0),
        ]);
        assert_eq!(
            ds.validate(),
            Err(DataError::MissingRow {
                year: 2021,
                category: "B".into(),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_value() {
        let ds = dataset(vec![row(2020, "A", -1.0), row(2020, "B", 40.0)]);
        assert!(matches!(
            ds.validate(),
            Err(DataError::NegativeValue { year: 2020, .. })
        ));
    }

    #[test]
    fn era_boundary_sits_between_differing_years() {
        let mut rows = vec![
            row(2017, "A", 50.0),
            row(2017, "B", 50.0),
            row(2018, "A", 50.0),
            row(2018, "B", 50.0),
        ];
        rows[0].era = Some(MarketEra::GeneralGpu);
        rows[1].era = Some(MarketEra::GeneralGpu);
        rows[2].era = Some(MarketEra::Transition);
        rows[3].era = Some(MarketEra::Transition);
        let ds = dataset(rows);
        assert_eq!(ds.era_boundary(), Some(2017.5));
    }

    #[test]
    fn era_boundary_absent_without_annotations() {
        let ds = dataset(vec![row(2020, "A", 1.0), row(2020, "B", 2.0)]);
        assert_eq!(ds.era_boundary(), None);
    }
}
