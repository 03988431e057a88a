use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Journal name given to records whose `journal` cell is empty.
pub const UNKNOWN_JOURNAL: &str = "Unknown";

/// Name of the derived year column appended after the CSV columns.
pub const PUBLISH_YEAR_COLUMN: &str = "publish_year";
pub const PUBLISH_TIME_COLUMN: &str = "publish_time";
pub const JOURNAL_COLUMN: &str = "journal";
pub const TITLE_COLUMN: &str = "title";

/// Cell contents read as missing, the same set pandas' `read_csv` uses by
/// default. The empty string is included.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell counts as missing. Matching is exact, not trimmed.
pub fn is_na(raw: &str) -> bool {
    NA_TOKENS.contains(&raw)
}

// ---------------------------------------------------------------------------
// MetadataValue – a single pass-through cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell for columns the explorer does not interpret.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Null,
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => write!(f, "{s}"),
            MetadataValue::Integer(i) => write!(f, "{i}"),
            MetadataValue::Float(v) => write!(f, "{v}"),
            MetadataValue::Bool(b) => write!(f, "{b}"),
            MetadataValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            MetadataValue::Null => write!(f, "<null>"),
        }
    }
}

impl MetadataValue {
    /// Infer the narrowest type for a raw CSV cell. Missing cells are null.
    pub fn infer(s: &str) -> Self {
        if is_na(s) {
            return MetadataValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return MetadataValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return MetadataValue::Float(f);
        }
        if s == "true" || s == "false" {
            return MetadataValue::Bool(s == "true");
        }
        MetadataValue::String(s.to_string())
    }

    /// Keep a free-text cell as a string even when it looks numeric.
    pub fn text(s: &str) -> Self {
        if is_na(s) {
            MetadataValue::Null
        } else {
            MetadataValue::String(s.to_string())
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::String(s) => Some(s),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// PaperRecord – one row of the metadata CSV
// ---------------------------------------------------------------------------

/// One paper. `journal` and `publish_year` are fixed at construction so the
/// year always matches `publish_time`. A missing journal (any [`NA_TOKENS`]
/// entry) becomes [`UNKNOWN_JOURNAL`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaperRecord {
    journal: String,
    publish_time: Option<NaiveDate>,
    publish_year: Option<i32>,
    /// Every other CSV column: column_name → value.
    metadata: BTreeMap<String, MetadataValue>,
}

impl PaperRecord {
    pub fn new(
        journal: Option<String>,
        publish_time: Option<NaiveDate>,
        metadata: BTreeMap<String, MetadataValue>,
    ) -> Self {
        let journal = journal
            .filter(|j| !is_na(j))
            .unwrap_or_else(|| UNKNOWN_JOURNAL.to_string());
        Self {
            journal,
            publish_time,
            publish_year: publish_time.map(|d| d.year()),
            metadata,
        }
    }

    pub fn journal(&self) -> &str {
        &self.journal
    }

    pub fn publish_time(&self) -> Option<NaiveDate> {
        self.publish_time
    }

    pub fn publish_year(&self) -> Option<i32> {
        self.publish_year
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.get(TITLE_COLUMN).and_then(MetadataValue::as_str)
    }

    /// Value of any column, including the interpreted and derived ones.
    pub fn cell(&self, column: &str) -> MetadataValue {
        match column {
            JOURNAL_COLUMN => MetadataValue::String(self.journal.clone()),
            TITLE_COLUMN => self
                .title()
                .map(|t| MetadataValue::String(t.to_string()))
                .unwrap_or(MetadataValue::Null),
            PUBLISH_TIME_COLUMN => self
                .publish_time()
                .map(MetadataValue::Date)
                .unwrap_or(MetadataValue::Null),
            PUBLISH_YEAR_COLUMN => self
                .publish_year
                .map(|y| MetadataValue::Integer(y.into()))
                .unwrap_or(MetadataValue::Null),
            other => self
                .metadata
                .get(other)
                .cloned()
                .unwrap_or(MetadataValue::Null),
        }
    }
}

// ---------------------------------------------------------------------------
// YearRange
// ---------------------------------------------------------------------------

/// Inclusive range of publication years, always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Clamp both ends into `bounds`.
    pub fn clamp_to(&self, bounds: YearRange) -> Self {
        Self::new(
            self.min.clamp(bounds.min, bounds.max),
            self.max.clamp(bounds.min, bounds.max),
        )
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded metadata table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed journal and year indices.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<PaperRecord>,
    /// CSV column order, with the derived year column appended.
    columns: Vec<String>,
    /// Distinct journals in order of first appearance.
    journals: Vec<String>,
    year_bounds: Option<YearRange>,
}

impl Dataset {
    /// Build indices from loaded records. `csv_columns` is the header order.
    pub fn from_records(csv_columns: Vec<String>, records: Vec<PaperRecord>) -> Self {
        let mut columns = csv_columns;
        if !columns.iter().any(|c| c == PUBLISH_YEAR_COLUMN) {
            columns.push(PUBLISH_YEAR_COLUMN.to_string());
        }

        let mut seen = HashSet::new();
        let mut journals = Vec::new();
        let mut year_bounds: Option<YearRange> = None;

        for rec in &records {
            if seen.insert(rec.journal()) {
                journals.push(rec.journal().to_string());
            }
            if let Some(year) = rec.publish_year() {
                year_bounds = Some(match year_bounds {
                    Some(b) => YearRange::new(b.min.min(year), b.max.max(year)),
                    None => YearRange::new(year, year),
                });
            }
        }

        Dataset {
            records,
            columns,
            journals,
            year_bounds,
        }
    }

    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn journals(&self) -> &[String] {
        &self.journals
    }

    /// Observed min/max publish year; `None` if no record is dated.
    pub fn year_bounds(&self) -> Option<YearRange> {
        self.year_bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
