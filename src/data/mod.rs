/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  chicago.csv / new_york_city.csv / washington.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, derive month/weekday/hour → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Trip>, schema capability flags
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply month/weekday predicates → new Dataset
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
