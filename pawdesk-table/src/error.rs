//! Error types

use thiserror::Error;

/// Errors raised while loading a [`TableConfig`](crate::TableConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid table config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("page size options must not be empty")]
    NoPageSizeOptions,

    #[error("default page size {default} is not one of the options {options:?}")]
    DefaultNotOffered { default: usize, options: Vec<usize> },

    #[error("max column width must be at least {min}, got {got}")]
    ColumnTooNarrow { min: u16, got: u16 },
}
