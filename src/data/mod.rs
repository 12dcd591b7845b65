/// Data layer: core types, loading, caching and the dashboard views.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → ListeningDataset (timestamps detected)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache   │  one Arc<ListeningDataset> per path
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  stats   │   │   mood   │  read-only views over the dataset
///   └──────────┘   └──────────┘
///        │              │
///        └──────┬───────┘
///               ▼
///         ┌──────────┐
///         │  report  │  everything one interaction needs
///         └──────────┘
/// ```

pub mod cache;
pub mod loader;
pub mod model;
pub mod mood;
pub mod report;
pub mod stats;
