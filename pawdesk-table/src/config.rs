//! Table configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Narrowest column the renderer will lay out.
pub const MIN_COLUMN_WIDTH: u16 = 3;

/// Display and paging defaults for a [`DataTable`](crate::DataTable).
///
/// Every field has a default, so a partial JSON document is valid:
///
/// ```
/// use pawdesk_table::TableConfig;
///
/// let config = TableConfig::from_json_str(r#"{ "default_page_size": 25 }"#).unwrap();
/// assert_eq!(config.default_page_size, 25);
/// assert_eq!(config.page_size_options, vec![10, 25, 50, 100]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub default_page_size: usize,
    /// Sizes offered by the page size selector.
    pub page_size_options: Vec<usize>,
    /// Page links shown either side of the current page.
    pub page_window_siblings: usize,
    /// Text of the placeholder row while loading.
    pub loading_label: String,
    /// Text of the placeholder row when there is nothing to show.
    pub empty_label: String,
    /// Cap for auto-sized columns, in terminal cells.
    pub max_column_width: u16,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 25, 50, 100],
            page_window_siblings: 1,
            loading_label: "Loading…".to_string(),
            empty_label: "No records found".to_string(),
            max_column_width: 32,
        }
    }
}

impl TableConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizeOptions);
        }
        if self.default_page_size == 0 || self.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            return Err(ConfigError::DefaultNotOffered {
                default: self.default_page_size,
                options: self.page_size_options.clone(),
            });
        }
        if self.max_column_width < MIN_COLUMN_WIDTH {
            return Err(ConfigError::ColumnTooNarrow {
                min: MIN_COLUMN_WIDTH,
                got: self.max_column_width,
            });
        }
        Ok(())
    }

    /// The option following `current`, wrapping around.
    ///
    /// A size that is not offered moves to the first option.
    pub fn next_page_size(&self, current: usize) -> usize {
        let next = self
            .page_size_options
            .iter()
            .position(|&size| size == current)
            .map(|i| (i + 1) % self.page_size_options.len())
            .unwrap_or(0);
        self.page_size_options
            .get(next)
            .copied()
            .unwrap_or(self.default_page_size)
    }
}
