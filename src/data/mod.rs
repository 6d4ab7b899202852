/// Data layer: core types, loading, and validation.
///
/// Architecture:
/// ```text
///  rangetest .csv logs
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<RawRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  payload / presence / range checks → Vec<ValidSample>
///   └──────────┘
///        │
///        ▼
///   point layers + heat aggregation (crate::layers)
/// ```
pub mod filter;
pub mod loader;
pub mod model;
