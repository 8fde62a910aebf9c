/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  restaurants.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RestaurantSet
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ RestaurantSet │  Vec<RestaurantRecord>, source row order
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply threshold predicates → filtered indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
