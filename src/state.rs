use crate::color::CategoryColors;
use crate::data::catalog;
use crate::data::filter::{filter_years, FilteredView};
use crate::data::model::{Dataset, Metric};

// ---------------------------------------------------------------------------
// Chart kind selector
// ---------------------------------------------------------------------------

/// How a dashboard section draws its filtered rows. Consumed by the
/// presentation layer only; the data layer never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    /// Pie of the most recent year in the filtered range.
    PieLatest,
    StackedArea,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::PieLatest,
        ChartKind::StackedArea,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::PieLatest => "Pie Chart (Latest Year)",
            ChartKind::StackedArea => "Stacked Area Chart",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-section dashboard state
// ---------------------------------------------------------------------------

/// Controls and cached view for one dashboard section. The dataset itself is
/// immutable; every control change rebuilds `view` via [`Self::refilter`].
pub struct DashboardState {
    pub title: &'static str,
    pub dataset: Dataset,
    pub colors: CategoryColors,

    /// Selected (from, to) years, each clamped to the dataset's year domain.
    /// The pair may be transiently inverted; that simply yields an empty view.
    pub year_range: (i32, i32),
    pub metric: Metric,
    pub chart: ChartKind,
    pub show_table: bool,

    /// Rows passing the current year range (cached).
    pub view: FilteredView,

    /// Metric shown on the per-category stat tiles.
    pub stat_metric: Metric,
    /// Metric summed for the total stat tile.
    pub total_metric: Metric,
}

impl DashboardState {
    pub fn new(
        title: &'static str,
        dataset: Dataset,
        stat_metric: Metric,
        total_metric: Metric,
    ) -> Self {
        if let Err(e) = dataset.validate() {
            log::warn!("Dataset '{}' violates its invariant: {e}", dataset.name);
        }
        let (min, max) = dataset.year_bounds().unwrap_or((0, 0));
        let metric = dataset.metrics.first().copied().unwrap_or(stat_metric);
        let view = filter_years(&dataset, min, max);
        let colors = CategoryColors::for_categories(&dataset.categories);

        log::info!(
            "Dataset '{}': {} rows, {} categories, years {min}–{max}",
            dataset.name,
            dataset.len(),
            dataset.categories.len()
        );

        Self {
            title,
            dataset,
            colors,
            year_range: (min, max),
            metric,
            chart: ChartKind::Bar,
            show_table: false,
            view,
            stat_metric,
            total_metric,
        }
    }

    /// The dataset's full year domain (slider bounds).
    pub fn year_domain(&self) -> (i32, i32) {
        self.dataset.year_bounds().unwrap_or((0, 0))
    }

    /// Recompute the cached view after a control change.
    pub fn refilter(&mut self) {
        self.view = filter_years(&self.dataset, self.year_range.0, self.year_range.1);
    }

    /// Where to draw the market-redefinition marker, if the dataset has one
    /// and the selected range covers the first year under the new definition.
    pub fn era_marker(&self) -> Option<f64> {
        let boundary = self.dataset.era_boundary()?;
        let first_new_year = boundary.ceil() as i32;
        let (min, max) = self.year_range;
        (min..=max).contains(&first_new_year).then_some(boundary)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// A line for the top-bar status area.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: true,
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub chip: DashboardState,
    pub memory: DashboardState,

    /// Status / error message shown in the top bar.
    pub status_message: Option<StatusLine>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            chip: DashboardState::new(
                "AI Chip Market Share",
                catalog::chip_market(),
                Metric::MarketShare,
                Metric::Revenue,
            ),
            memory: DashboardState::new(
                "Memory Chip Production",
                catalog::memory_production(),
                Metric::UnitsProduced,
                Metric::UnitsProduced,
            ),
            status_message: None,
        }
    }
}
