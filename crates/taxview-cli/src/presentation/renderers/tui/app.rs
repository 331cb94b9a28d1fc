use ratatui::widgets::ListState;
use taxview_core::ParamDataset;

use crate::presentation::presenters::series::{SeriesView, build_series_view};

/// Per-session UI state: the parameter list cursor. The selected series
/// view is rebuilt from it on every draw; nothing else is carried between
/// interactions.
pub(crate) struct AppState<'a> {
    pub dataset: &'a ParamDataset,
    pub currency_symbol: String,
    pub parameters: Vec<String>,
    pub list_state: ListState,
}

impl<'a> AppState<'a> {
    pub fn new(dataset: &'a ParamDataset, currency_symbol: &str) -> Self {
        let parameters = dataset.parameters();
        let mut list_state = ListState::default();
        if !parameters.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            dataset,
            currency_symbol: currency_symbol.to_string(),
            parameters,
            list_state,
        }
    }

    pub fn selected_parameter(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|i| self.parameters.get(i))
            .map(String::as_str)
    }

    /// The view for the current selection.
    pub fn current_view(&self) -> Option<SeriesView> {
        self.selected_parameter()
            .map(|name| build_series_view(self.dataset, name, &self.currency_symbol))
    }

    pub fn select_next(&mut self) {
        if self.parameters.is_empty() {
            return;
        }
        let i = self
            .list_state
            .selected()
            .unwrap_or(0)
            .saturating_add(1)
            .min(self.parameters.len() - 1);
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.parameters.is_empty() {
            return;
        }
        let i = self.list_state.selected().unwrap_or(0).saturating_sub(1);
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.parameters.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.parameters.is_empty() {
            self.list_state.select(Some(self.parameters.len() - 1));
        }
    }
}
