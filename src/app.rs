//! Application state and core logic for the cost estimator form.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive form: the loaded catalog, the current selection, validation
//! errors, and the computed cost breakdown. Every state change goes through
//! an explicit handler so the render layer stays a pure function of `&App`.

use std::collections::BTreeSet;

use crossterm::event::KeyCode;

use crate::cost::{self, CostBreakdown};
use crate::error::AppError;
use crate::models::{Category, Feature, Focus};

pub const ERR_FETCH_CATEGORIES: &str = "Failed to fetch categories.";
pub const ERR_FETCH_FEATURES: &str = "Failed to fetch features.";
pub const ERR_NO_CATEGORY: &str = "Please select a category";
pub const ERR_NO_FEATURE: &str = "Please select at least one feature";

/// A fetch result delivered back to the event loop
pub enum AppEvent {
    Categories(Result<Vec<Category>, AppError>),
    Features {
        seq: u64,
        result: Result<Vec<Feature>, AppError>,
    },
}

/// A feature fetch the event loop should start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRequest {
    pub seq: u64,
    pub category_id: i64,
}

/// Application state
pub struct App {
    pub categories: Vec<Category>,
    pub features: Vec<Feature>,
    pub selected_category: Option<i64>,
    pub selected_features: BTreeSet<String>,
    pub error: Option<String>,
    pub cost_details: Option<CostBreakdown>,
    // Form navigation state
    pub focus: Focus,
    pub category_cursor: usize,
    pub feature_cursor: usize,
    // Sequence guard for in-flight feature fetches; a response whose sequence
    // does not match the latest request is stale and gets dropped
    pub feature_fetch_seq: u64,
    pub quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            features: Vec::new(),
            selected_category: None,
            selected_features: BTreeSet::new(),
            error: None,
            cost_details: None,
            focus: Focus::default(),
            category_cursor: 0,
            feature_cursor: 0,
            feature_fetch_seq: 0,
            quit: false,
        }
    }

    /// Look up a category name by id (breakdown table header)
    pub fn category_name(&self, id: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Number of rows in the category list, including the leading `(none)` row
    pub fn category_rows(&self) -> usize {
        self.categories.len() + 1
    }

    /// Handle a key press. Returns a feature fetch for the event loop to
    /// start when the selected category changed to a concrete id.
    pub fn handle_key(&mut self, code: KeyCode) -> Option<FeatureRequest> {
        match code {
            KeyCode::Char('q') => {
                self.quit = true;
                None
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::Up => {
                self.move_cursor_up();
                None
            }
            KeyCode::Down => {
                self.move_cursor_down();
                None
            }
            KeyCode::Enter => match self.focus {
                Focus::Categories => self.select_category_at_cursor(),
                Focus::Features => {
                    self.toggle_feature_at_cursor();
                    None
                }
                Focus::Submit => {
                    self.submit();
                    None
                }
            },
            KeyCode::Char(' ') => {
                if self.focus == Focus::Features {
                    self.toggle_feature_at_cursor();
                }
                None
            }
            _ => None,
        }
    }

    fn move_cursor_up(&mut self) {
        match self.focus {
            Focus::Categories => {
                self.category_cursor = self.category_cursor.saturating_sub(1);
            }
            Focus::Features => {
                self.feature_cursor = self.feature_cursor.saturating_sub(1);
            }
            Focus::Submit => {}
        }
    }

    fn move_cursor_down(&mut self) {
        match self.focus {
            Focus::Categories => {
                let last = self.category_rows().saturating_sub(1);
                self.category_cursor = (self.category_cursor + 1).min(last);
            }
            Focus::Features => {
                let last = self.features.len().saturating_sub(1);
                self.feature_cursor = (self.feature_cursor + 1).min(last);
            }
            Focus::Submit => {}
        }
    }

    /// Apply the category under the cursor. Row 0 is the `(none)` row.
    fn select_category_at_cursor(&mut self) -> Option<FeatureRequest> {
        let id = if self.category_cursor == 0 {
            None
        } else {
            self.categories
                .get(self.category_cursor - 1)
                .map(|c| c.id)
        };
        self.select_category(id)
    }

    /// Change the selected category. Clears feature selections, the error
    /// banner, and any prior breakdown. Selecting a concrete id returns the
    /// fetch to start; clearing the selection empties the feature list with
    /// no request. Re-selecting the current value is a no-op.
    pub fn select_category(&mut self, id: Option<i64>) -> Option<FeatureRequest> {
        if id == self.selected_category {
            return None;
        }

        self.selected_category = id;
        self.selected_features.clear();
        self.error = None;
        self.cost_details = None;
        self.feature_cursor = 0;

        match id {
            Some(category_id) => {
                self.feature_fetch_seq += 1;
                Some(FeatureRequest {
                    seq: self.feature_fetch_seq,
                    category_id,
                })
            }
            None => {
                self.features.clear();
                None
            }
        }
    }

    fn toggle_feature_at_cursor(&mut self) {
        if let Some(name) = self.features.get(self.feature_cursor).map(|f| f.name.clone()) {
            self.toggle_feature(&name);
        }
    }

    /// Set-semantics toggle: add the name if absent, remove it if present
    pub fn toggle_feature(&mut self, name: &str) {
        if !self.selected_features.remove(name) {
            self.selected_features.insert(name.to_string());
        }
    }

    /// Validate the selection and compute the breakdown. Validation outcomes
    /// in order: no category, no features, then the computation.
    pub fn submit(&mut self) {
        if self.selected_category.is_none() {
            self.error = Some(ERR_NO_CATEGORY.to_string());
        } else if self.selected_features.is_empty() {
            self.error = Some(ERR_NO_FEATURE.to_string());
        } else {
            self.error = None;
            self.cost_details = Some(cost::compute_breakdown(
                &self.features,
                &self.selected_features,
            ));
        }
    }

    /// Apply the result of the startup category fetch
    pub fn on_categories(&mut self, result: Result<Vec<Category>, AppError>) {
        match result {
            Ok(categories) => {
                self.categories = categories;
                self.category_cursor = self.category_cursor.min(self.category_rows() - 1);
            }
            Err(err) => {
                tracing::error!("Error fetching categories: {}", err);
                self.error = Some(ERR_FETCH_CATEGORIES.to_string());
            }
        }
    }

    /// Apply the result of a feature fetch. Responses issued under an older
    /// sequence belong to a superseded category selection and are ignored.
    pub fn on_features(&mut self, seq: u64, result: Result<Vec<Feature>, AppError>) {
        if seq != self.feature_fetch_seq {
            tracing::debug!(
                "Dropping stale feature response (seq {} != {})",
                seq,
                self.feature_fetch_seq
            );
            return;
        }
        match result {
            Ok(features) => {
                // The previous category's list stays toggleable while the
                // fetch is in flight; drop any selected names the reloaded
                // list no longer contains
                self.selected_features
                    .retain(|name| features.iter().any(|f| f.name == *name));
                self.features = features;
                self.feature_cursor = 0;
            }
            Err(err) => {
                tracing::error!("Error fetching features: {}", err);
                self.error = Some(ERR_FETCH_FEATURES.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
