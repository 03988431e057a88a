use std::collections::BTreeSet;

use super::model::{Dataset, PaperRecord, YearRange};

// ---------------------------------------------------------------------------
// Filter parameters: year range + selected journals
// ---------------------------------------------------------------------------

/// What the user has selected in the side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    /// `None` only when the dataset has no dated record at all.
    pub year_range: Option<YearRange>,
    pub journals: BTreeSet<String>,
}

impl FilterParams {
    /// Full observed year range and every journal selected.
    pub fn defaults(dataset: &Dataset) -> Self {
        Self {
            year_range: dataset.year_bounds(),
            journals: dataset.journals().iter().cloned().collect(),
        }
    }

    /// A record passes when its year is inside the range and its journal is
    /// selected. Undated records never pass.
    pub fn matches(&self, record: &PaperRecord) -> bool {
        let in_range = match (self.year_range, record.publish_year()) {
            (Some(range), Some(year)) => range.contains(year),
            _ => false,
        };
        in_range && self.journals.contains(record.journal())
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Rows of a [`Dataset`] that pass a [`FilterParams`], in dataset order.
/// Borrows the dataset; holds only indices.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn from_indices(dataset: &'a Dataset, indices: Vec<usize>) -> Self {
        Self { dataset, indices }
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a PaperRecord> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    /// First `n` rows of the view.
    pub fn head(&self, n: usize) -> impl Iterator<Item = &'a PaperRecord> + '_ {
        self.iter().take(n)
    }
}

/// Return indices of records that pass `params`.
pub fn filtered_indices(dataset: &Dataset, params: &FilterParams) -> Vec<usize> {
    if params.journals.is_empty() || params.year_range.is_none() {
        return Vec::new();
    }
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| params.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Apply `params` to `dataset`.
pub fn apply<'a>(dataset: &'a Dataset, params: &FilterParams) -> FilteredView<'a> {
    FilteredView::from_indices(dataset, filtered_indices(dataset, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_dataset;
    use proptest::prelude::*;

    fn two_rows() -> Dataset {
        let text = "title,journal,publish_time,source\n\
                    A,,2020-03-01,X\n\
                    B,Nature,not-a-date,Y\n";
        read_dataset(csv::Reader::from_reader(text.as_bytes())).expect("load")
    }

    fn sample() -> Dataset {
        let text = "title,journal,publish_time\n\
                    a,Lancet,2018-01-01\n\
                    b,BMJ,2019-06-01\n\
                    c,Lancet,2020-02-02\n\
                    d,,2021\n\
                    e,BMJ,2022-12-31\n";
        read_dataset(csv::Reader::from_reader(text.as_bytes())).expect("load")
    }

    #[test]
    fn two_row_example_filters_to_row_a() {
        let ds = two_rows();
        let params = FilterParams {
            year_range: Some(YearRange::new(2020, 2020)),
            journals: ["Unknown".to_string()].into_iter().collect(),
        };
        let view = apply(&ds, &params);
        assert_eq!(view.iter().next().and_then(|r| r.title()), Some("A"));
        assert_eq!(view.into_indices(), [0]);
    }

    #[test]
    fn defaults_select_every_dated_record() {
        let ds = sample();
        let view = apply(&ds, &FilterParams::defaults(&ds));
        assert_eq!(view.len(), ds.len());
    }

    #[test]
    fn undated_records_never_match() {
        let ds = two_rows();
        let view = apply(&ds, &FilterParams::defaults(&ds));
        assert_eq!(view.into_indices(), [0]);
    }

    #[test]
    fn empty_journal_selection_is_empty_view() {
        let ds = sample();
        let params = FilterParams {
            journals: BTreeSet::new(),
            ..FilterParams::defaults(&ds)
        };
        assert!(apply(&ds, &params).is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = sample();
        let params = FilterParams {
            year_range: Some(YearRange::new(2019, 2021)),
            ..FilterParams::defaults(&ds)
        };
        assert_eq!(apply(&ds, &params).into_indices(), [1, 2, 3]);
    }

    #[test]
    fn journal_subset() {
        let ds = sample();
        let params = FilterParams {
            journals: ["BMJ".to_string()].into_iter().collect(),
            ..FilterParams::defaults(&ds)
        };
        let titles: Vec<_> = apply(&ds, &params).iter().filter_map(|r| r.title()).collect();
        assert_eq!(titles, ["b", "e"]);
    }

    #[test]
    fn head_limits_rows() {
        let ds = sample();
        let view = apply(&ds, &FilterParams::defaults(&ds));
        assert_eq!(view.head(2).count(), 2);
        assert_eq!(view.head(50).count(), 5);
    }

    #[test]
    fn undated_dataset_yields_empty_view() {
        let text = "journal,publish_time\nJ,unknown\n";
        let ds = read_dataset(csv::Reader::from_reader(text.as_bytes())).expect("load");
        let params = FilterParams::defaults(&ds);
        assert_eq!(params.year_range, None);
        assert!(apply(&ds, &params).is_empty());
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(
            a in 2015i32..2025,
            b in 2015i32..2025,
            mask in proptest::collection::vec(any::<bool>(), 3),
        ) {
            let ds = sample();
            let journals = ds
                .journals()
                .iter()
                .zip(&mask)
                .filter(|(_, keep)| **keep)
                .map(|(j, _)| j.clone())
                .collect();
            let params = FilterParams { year_range: Some(YearRange::new(a, b)), journals };

            let first = filtered_indices(&ds, &params);
            let second = filtered_indices(&ds, &params);
            prop_assert_eq!(&first, &second);

            for &i in &first {
                prop_assert!(params.matches(&ds.records()[i]));
            }
        }
    }
}
