use std::collections::BTreeMap;

use crate::data::filter::{FilterParams, FilteredView};
use crate::data::model::{Dataset, YearRange};

/// How many selected journals are spelled out before the ellipsis.
pub const JOURNAL_PREVIEW: usize = 5;

// ---------------------------------------------------------------------------
// Dataset summary shown under the sample table
// ---------------------------------------------------------------------------

/// Text-ready counters for the current filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_papers: usize,
    pub selected_journals: String,
    pub year_range: Option<YearRange>,
}

impl Summary {
    pub fn compute(dataset: &Dataset, view: &FilteredView<'_>, params: &FilterParams) -> Self {
        Self {
            total_papers: view.len(),
            selected_journals: journals_label(&selected_in_order(dataset, params)),
            year_range: params.year_range,
        }
    }

    pub fn total_line(&self) -> String {
        format!("Total Papers: {}", self.total_papers)
    }

    pub fn journals_line(&self) -> String {
        format!("Selected Journals: {}", self.selected_journals)
    }

    pub fn year_line(&self) -> String {
        match self.year_range {
            Some(range) => format!("Year Range: {range}"),
            None => "Year Range: no dated papers".to_string(),
        }
    }
}

/// Selected journals in the order they appear in the dataset.
pub fn selected_in_order<'a>(dataset: &'a Dataset, params: &FilterParams) -> Vec<&'a str> {
    dataset
        .journals()
        .iter()
        .map(String::as_str)
        .filter(|j| params.journals.contains(*j))
        .collect()
}

/// Comma-joined first [`JOURNAL_PREVIEW`] names, `" ..."` if there are more.
pub fn journals_label(journals: &[&str]) -> String {
    let shown = journals
        .iter()
        .take(JOURNAL_PREVIEW)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if journals.len() > JOURNAL_PREVIEW {
        format!("{shown} ...")
    } else {
        shown
    }
}

/// Paper count per publish year in the view, ascending by year.
pub fn papers_per_year(view: &FilteredView<'_>) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for year in view.iter().filter_map(|r| r.publish_year()) {
        *counts.entry(year).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::apply;
    use crate::data::loader::read_dataset;

    fn dataset(text: &str) -> Dataset {
        read_dataset(csv::Reader::from_reader(text.as_bytes())).expect("load")
    }

    #[test]
    fn label_lists_up_to_five() {
        assert_eq!(journals_label(&[]), "");
        assert_eq!(journals_label(&["A", "B"]), "A, B");
        assert_eq!(journals_label(&["A", "B", "C", "D", "E"]), "A, B, C, D, E");
        assert_eq!(
            journals_label(&["A", "B", "C", "D", "E", "F"]),
            "A, B, C, D, E ..."
        );
    }

    #[test]
    fn summary_reflects_view_and_params() {
        let ds = dataset(
            "journal,publish_time\n\
             Z,2020-01-01\n\
             A,2021-01-01\n\
             Z,2022-01-01\n\
             ,bad\n",
        );
        let params = FilterParams::defaults(&ds);
        let view = apply(&ds, &params);
        let summary = Summary::compute(&ds, &view, &params);

        assert_eq!(summary.total_papers, 3);
        // dataset order, not alphabetical
        assert_eq!(summary.selected_journals, "Z, A, Unknown");
        assert_eq!(summary.total_line(), "Total Papers: 3");
        assert_eq!(summary.year_line(), "Year Range: 2020 - 2022");
    }

    #[test]
    fn per_year_counts() {
        let ds = dataset(
            "journal,publish_time\n\
             J,2020-01-01\n\
             J,2020-05-01\n\
             J,2022\n",
        );
        let params = FilterParams::defaults(&ds);
        let counts = papers_per_year(&apply(&ds, &params));
        assert_eq!(counts.into_iter().collect::<Vec<_>>(), [(2020, 2), (2022, 1)]);
    }
}
