/// Data layer: core types, the compiled-in catalog, filtering, and pivoting.
///
/// Architecture:
/// ```text
///   ┌──────────┐
///   │ catalog   │  compiled-in tables → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year range → FilteredView, latest period
///   └──────────┘
///        │
///        ├───────────────┐
///        ▼               ▼
///   ┌──────────┐    ┌──────────┐
///   │  pivot    │    │  export   │  CSV / JSON on demand
///   └──────────┘    └──────────┘
/// ```
///
/// Everything below `catalog` is a pure function of (immutable dataset,
/// current control values); nothing here holds mutable state.

pub mod catalog;
pub mod export;
pub mod filter;
pub mod model;
pub mod pivot;
