use std::path::PathBuf;
use std::sync::Arc;

use crate::assets::{ResolvedAsset, resolve_all};
use crate::config::DashboardConfig;
use crate::data::filter::{FilterParams, FilteredView, apply};
use crate::data::model::{Dataset, YearRange};
use crate::summary::Summary;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup and never mutated.
    pub dataset: Arc<Dataset>,

    /// Current year range and journal selection.
    pub filters: FilterParams,

    /// Indices of papers passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Chart images as found during the last refresh.
    pub assets: Vec<ResolvedAsset>,

    /// Narrows the journal checkbox list; does not affect filtering.
    pub journal_query: String,

    pub asset_dir: PathBuf,
    pub sample_rows: usize,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        let filters = FilterParams::defaults(&dataset);
        let mut state = Self {
            dataset,
            filters,
            visible_indices: Vec::new(),
            assets: Vec::new(),
            journal_query: String::new(),
            asset_dir: config.asset_dir.clone(),
            sample_rows: config.sample_rows,
        };
        state.refresh();
        state
    }

    /// Recompute the filtered view and re-check the chart images.
    pub fn refresh(&mut self) {
        self.visible_indices = apply(&self.dataset, &self.filters).into_indices();
        self.assets = resolve_all(&self.asset_dir);
        log::debug!(
            "Filter {:?} with {} journals → {} papers",
            self.filters.year_range,
            self.filters.journals.len(),
            self.visible_indices.len()
        );
    }

    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::from_indices(&self.dataset, self.visible_indices.clone())
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.dataset, &self.view(), &self.filters)
    }

    /// Set the year range, clamped to what the dataset actually contains.
    pub fn set_year_range(&mut self, from: i32, to: i32) {
        let Some(bounds) = self.dataset.year_bounds() else {
            return;
        };
        let range = YearRange::new(from, to).clamp_to(bounds);
        if self.filters.year_range != Some(range) {
            self.filters.year_range = Some(range);
            self.refresh();
        }
    }

    /// Toggle a single journal in the selection.
    pub fn toggle_journal(&mut self, journal: &str) {
        if !self.filters.journals.remove(journal) {
            self.filters.journals.insert(journal.to_string());
        }
        self.refresh();
    }

    pub fn select_all_journals(&mut self) {
        self.filters.journals = self.dataset.journals().iter().cloned().collect();
        self.refresh();
    }

    pub fn select_no_journals(&mut self) {
        self.filters.journals.clear();
        self.refresh();
    }

    /// Restore the full year range and every journal.
    pub fn reset_filters(&mut self) {
        self.filters = FilterParams::defaults(&self.dataset);
        self.refresh();
    }

    /// Journals whose name contains the search text, in dataset order.
    pub fn journal_options(&self) -> Vec<&str> {
        let query = self.journal_query.trim().to_lowercase();
        self.dataset
            .journals()
            .iter()
            .map(String::as_str)
            .filter(|j| query.is_empty() || j.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_dataset;

    fn state() -> AppState {
        let text = "title,journal,publish_time\n\
                    a,Lancet,2018-01-01\n\
                    b,BMJ,2019-06-01\n\
                    c,Lancet,2020-02-02\n\
                    d,,2021\n";
        let ds = read_dataset(csv::Reader::from_reader(text.as_bytes())).expect("load");
        let config = DashboardConfig {
            asset_dir: PathBuf::from("no/such/assets"),
            ..DashboardConfig::default()
        };
        AppState::new(Arc::new(ds), &config)
    }

    #[test]
    fn starts_with_everything_visible() {
        let st = state();
        assert_eq!(st.visible_indices, [0, 1, 2, 3]);
        assert_eq!(st.summary().total_papers, 4);
    }

    #[test]
    fn missing_assets_do_not_stop_rendering_state() {
        let st = state();
        assert_eq!(st.assets.len(), 4);
        assert!(st.assets.iter().all(|a| a.status.warning().is_some()));
        assert_eq!(st.summary().year_line(), "Year Range: 2018 - 2021");
    }

    #[test]
    fn year_range_handler_refilters_and_clamps() {
        let mut st = state();
        st.set_year_range(2020, 1900);
        assert_eq!(st.filters.year_range, Some(YearRange::new(2018, 2020)));
        assert_eq!(st.visible_indices, [0, 1, 2]);

        st.set_year_range(2021, 2021);
        assert_eq!(st.visible_indices, [3]);
    }

    #[test]
    fn journal_handlers_refilter() {
        let mut st = state();
        st.toggle_journal("Lancet");
        assert_eq!(st.visible_indices, [1, 3]);
        st.toggle_journal("Lancet");
        assert_eq!(st.visible_indices, [0, 1, 2, 3]);

        st.select_no_journals();
        assert!(st.visible_indices.is_empty());
        assert_eq!(st.summary().selected_journals, "");

        st.select_all_journals();
        assert_eq!(st.visible_indices.len(), 4);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut st = state();
        st.set_year_range(2019, 2019);
        st.select_no_journals();
        st.reset_filters();
        assert_eq!(st.filters, FilterParams::defaults(&st.dataset));
        assert_eq!(st.visible_indices.len(), 4);
    }

    #[test]
    fn journal_search_only_narrows_options() {
        let mut st = state();
        st.journal_query = "lan".into();
        assert_eq!(st.journal_options(), ["Lancet"]);
        assert_eq!(st.visible_indices.len(), 4);
        st.journal_query.clear();
        assert_eq!(st.journal_options(), ["Lancet", "BMJ", "Unknown"]);
    }
}
