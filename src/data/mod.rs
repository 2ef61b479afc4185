/// Data layer: records, loading, normalization and search.
///
/// Architecture:
/// ```text
///   data.csv
///      │
///      ▼
///   ┌──────────┐
///   │  loader  │  read file (optionally on a worker thread)
///   └──────────┘
///      │ text
///      ▼
///   ┌──────────┐
///   │  parse   │  CSV rows → normalized Records + ParseReport
///   └──────────┘
///      │ Catalog
///      ▼
///   ┌──────────┐
///   │  filter  │  search term → matching indices
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parse;
