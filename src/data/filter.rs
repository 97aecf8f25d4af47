use super::model::{DataError, Dataset, Metric, Row};

// ---------------------------------------------------------------------------
// FilteredView – year-bounded projection of a dataset
// ---------------------------------------------------------------------------

/// The rows of a dataset whose year falls in a closed interval, in source
/// order. Rebuilt on every control change and never mutated; an empty view is
/// a normal state that every consumer must handle.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub rows: Vec<Row>,
    /// Category enumeration inherited from the source dataset.
    pub categories: Vec<&'static str>,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Select the rows with `min_year <= year <= max_year`, preserving source
/// order. An inverted or out-of-domain range yields an empty view rather than
/// an error; the empty state is handled downstream.
pub fn filter_years(dataset: &Dataset, min_year: i32, max_year: i32) -> FilteredView {
    FilteredView {
        rows: dataset
            .rows
            .iter()
            .filter(|r| r.year >= min_year && r.year <= max_year)
            .cloned()
            .collect(),
        categories: dataset.categories.clone(),
    }
}

// ---------------------------------------------------------------------------
// Latest-period selection
// ---------------------------------------------------------------------------

/// The rows of the most recent year in a view.
#[derive(Debug, Clone)]
pub struct LatestPeriod {
    pub year: i32,
    pub rows: Vec<Row>,
}

impl LatestPeriod {
    /// A category's value for a metric. `None` when the category has no row
    /// in this period or the row lacks the metric; callers check before use.
    pub fn value_of(&self, category: &str, metric: Metric) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .and_then(|r| r.value(metric))
    }

    /// Sum of a metric across all categories in this period.
    pub fn total(&self, metric: Metric) -> f64 {
        self.rows.iter().filter_map(|r| r.value(metric)).sum()
    }
}

/// Select the rows of the maximum year in the view.
///
/// "Maximum year" is undefined on an empty view, so that case is an explicit
/// [`DataError::EmptySelection`] instead of a silent empty result.
pub fn latest_period(view: &FilteredView) -> Result<LatestPeriod, DataError> {
    let year = view
        .rows
        .iter()
        .map(|r| r.year)
        .max()
        .ok_or(DataError::EmptySelection)?;

    Ok(LatestPeriod {
        year,
        rows: view.rows.iter().filter(|r| r.year == year).cloned().collect(),
    })
}
