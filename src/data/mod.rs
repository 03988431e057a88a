/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  cleaned_metadata.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV, coerce dates, default journals → Dataset
///   └──────────┘
///        │  (DatasetCache: read once, shared as Arc<Dataset>)
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<PaperRecord>, journal list, year bounds
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year range + journal set → FilteredView
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
