/// Data layer: core types, loading, and coercion.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawDataset (text cells, file order)
///   └──────────┘
///        │   shared, read-only
///        ▼
///   ┌──────────┐
///   │  coerce   │  requested columns → f64, one FlowerSet per pipeline
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  FlowerSet    │  Vec<Flower>, typed measurements + species
///   └──────────────┘
/// ```

pub mod coerce;
pub mod loader;
pub mod model;
