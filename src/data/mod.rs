/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  LaunchTable  │  Vec<LaunchRecord>, derived filter options
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply site/payload predicates → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
