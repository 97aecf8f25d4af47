//! Silicon Trends: a native dashboard over two compiled-in datasets,
//! AI-chip market share and memory-chip production.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
