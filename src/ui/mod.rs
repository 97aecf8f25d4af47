/// Presentation layer: control panels, charts, and tables over the data
/// layer. Everything here reads the cached view and draws; the only state
/// mutations are control changes flowing back through `AppState`.

pub mod dashboard;
pub mod panels;
pub mod plot;
pub mod table;
