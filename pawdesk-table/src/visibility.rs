//! Per-column visibility.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maps column ids to a visibility flag. Absent ids are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnVisibility(HashMap<String, bool>);

impl ColumnVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, column_id: impl Into<String>, visible: bool) -> Self {
        self.set(column_id, visible);
        self
    }

    pub fn set(&mut self, column_id: impl Into<String>, visible: bool) {
        self.0.insert(column_id.into(), visible);
    }

    /// Flip a column and return its new visibility.
    pub fn toggle(&mut self, column_id: &str) -> bool {
        let visible = !self.is_visible(column_id);
        self.0.insert(column_id.to_string(), visible);
        visible
    }

    pub fn is_visible(&self, column_id: &str) -> bool {
        self.0.get(column_id).copied().unwrap_or(true)
    }

    /// Ids explicitly hidden.
    pub fn hidden(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, visible)| !**visible)
            .map(|(id, _)| id.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for ColumnVisibility {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
