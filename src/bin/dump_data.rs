//! Write both full datasets to CSV in the working directory, for use
//! outside the dashboard.

use std::path::PathBuf;

use anyhow::Result;

use silicon_trends::data::catalog::{chip_market, memory_production};
use silicon_trends::data::export::write_view_csv;
use silicon_trends::data::filter::filter_years;

fn main() -> Result<()> {
    env_logger::init();

    for dataset in [chip_market(), memory_production()] {
        let (min, max) = dataset.year_bounds().unwrap_or((0, 0));
        let view = filter_years(&dataset, min, max);
        let path = PathBuf::from(format!("{}.csv", dataset.name));
        write_view_csv(&view, &dataset.metrics, &path)?;
        println!("Wrote {} rows to {}", view.len(), path.display());
    }
    Ok(())
}
