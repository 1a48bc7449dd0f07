//! Sort state and its transition table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a sorted column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Value for an `aria-sort` attribute.
    pub fn aria(self) -> &'static str {
        match self {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// Which field the rows are ordered by, and in which direction.
///
/// An empty `field` means unsorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

/// Input to the sort state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortEvent<'a> {
    /// A column header was activated.
    Activate {
        sortable: bool,
        sort_field: Option<&'a str>,
    },
    /// Drop back to unsorted.
    Clear,
}

impl SortState {
    /// Unsorted state.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sorted by `field` in `direction`.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn is_sorted(&self) -> bool {
        !self.field.is_empty()
    }

    /// Direction applied to `field`, if that is the sorted field.
    pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
        (self.is_sorted() && self.field == field).then_some(self.direction)
    }

    /// Next state for `event`.
    ///
    /// | state       | event                         | next        |
    /// |-------------|-------------------------------|-------------|
    /// | any         | activate, not sortable        | unchanged   |
    /// | any         | activate, no sort field       | unchanged   |
    /// | `(f, dir)`  | activate `f`                  | `(f, !dir)` |
    /// | `(f, _)`    | activate `g != f`             | `(g, Asc)`  |
    /// | any         | clear                         | unsorted    |
    pub fn transition(&self, event: SortEvent<'_>) -> SortState {
        match event {
            SortEvent::Activate {
                sortable: false, ..
            }
            | SortEvent::Activate {
                sort_field: None, ..
            } => self.clone(),
            SortEvent::Activate {
                sort_field: Some(""),
                ..
            } => self.clone(),
            SortEvent::Activate {
                sort_field: Some(field),
                ..
            } => {
                if self.is_sorted() && self.field == field {
                    SortState::new(field, self.direction.flipped())
                } else {
                    SortState::new(field, SortDirection::Asc)
                }
            }
            SortEvent::Clear => SortState::unsorted(),
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sorted() {
            write!(f, "{} {}", self.field, self.direction)
        } else {
            write!(f, "unsorted")
        }
    }
}
