//! End-to-end properties of the filter → latest/pivot pipeline over the
//! compiled-in datasets.

use silicon_trends::data::catalog::{chip_market, memory_production};
use silicon_trends::data::filter::{filter_years, latest_period};
use silicon_trends::data::model::{DataError, Metric};
use silicon_trends::data::pivot::pivot;

#[test]
fn filter_count_matches_source_for_every_subrange() {
    let ds = chip_market();
    let (lo, hi) = ds.year_bounds().unwrap();
    for min in lo..=hi {
        for max in min..=hi {
            let view = filter_years(&ds, min, max);
            let expected = ds
                .rows
                .iter()
                .filter(|r| r.year >= min && r.year <= max)
                .count();
            assert_eq!(view.len(), expected, "range {min}–{max}");
            assert!(view.rows.iter().all(|r| (min..=max).contains(&r.year)));
        }
    }
}

#[test]
fn single_year_yields_one_row_per_category() {
    assert_eq!(filter_years(&chip_market(), 2023, 2023).len(), 4);
    assert_eq!(filter_years(&memory_production(), 2023, 2023).len(), 6);
}

#[test]
fn latest_period_is_the_maximum_filtered_year() {
    let ds = memory_production();
    let view = filter_years(&ds, 2018, 2022);
    let latest = latest_period(&view).unwrap();
    assert_eq!(latest.year, 2022);
    assert!(latest.rows.iter().all(|r| r.year == 2022));
    assert_eq!(latest.rows.len(), ds.categories.len());
}

#[test]
fn chip_2023_shares_match_the_reported_split() {
    let view = filter_years(&chip_market(), 2023, 2023);
    let latest = latest_period(&view).unwrap();
    assert_eq!(latest.value_of("NVIDIA", Metric::MarketShare), Some(65.0));
    assert_eq!(latest.value_of("Intel", Metric::MarketShare), Some(22.0));
    assert_eq!(latest.value_of("AMD", Metric::MarketShare), Some(11.0));
    assert_eq!(latest.value_of("Others", Metric::MarketShare), Some(2.0));
    assert!((latest.total(Metric::MarketShare) - 100.0).abs() < 1e-9);
}

#[test]
fn out_of_domain_range_is_empty_and_latest_is_rejected() {
    let view = filter_years(&chip_market(), 2026, 2030);
    assert!(view.is_empty());
    assert!(matches!(
        latest_period(&view),
        Err(DataError::EmptySelection)
    ));
}

#[test]
fn memory_2025_production_total_matches_the_annotated_projection() {
    let view = filter_years(&memory_production(), 2016, 2025);
    let latest = latest_period(&view).unwrap();
    assert_eq!(latest.year, 2025);
    assert_eq!(latest.rows.len(), 6);
    assert!((latest.total(Metric::UnitsProduced) - 138.0).abs() <= 1.0);
}

#[test]
fn chip_2024_market_size_sums_to_fifty_billion() {
    let view = filter_years(&chip_market(), 2015, 2024);
    let latest = latest_period(&view).unwrap();
    assert_eq!(latest.year, 2024);
    assert!((latest.total(Metric::Revenue) - 50.0).abs() < 1e-9);
}

#[test]
fn pivot_conserves_yearly_totals() {
    let ds = memory_production();
    let view = filter_years(&ds, 2016, 2025);
    let table = pivot(&view, Metric::Revenue);
    for year in table.years() {
        let raw: f64 = view
            .rows
            .iter()
            .filter(|r| r.year == year)
            .filter_map(|r| r.value(Metric::Revenue))
            .sum();
        assert!((table.row_total(year) - raw).abs() < 1e-9, "{year}");
    }
}

#[test]
fn pivot_orders_years_ascending_and_columns_by_enumeration() {
    let ds = chip_market();
    let view = filter_years(&ds, 2019, 2025);
    let table = pivot(&view, Metric::MarketShare);

    let years = table.years();
    assert_eq!(years, (2019..=2025).collect::<Vec<_>>());
    // Domain display order, not alphabetical.
    assert_eq!(table.categories, vec!["NVIDIA", "Intel", "AMD", "Others"]);
    for year in years {
        for cat in &table.categories {
            assert!(table.cell(year, cat).is_some(), "{year}/{cat}");
        }
    }
}
