//! Walker records shown on the dashboard.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Days, NaiveDate};
use pawdesk_table::{CellValue, Column, SortDirection, SortState, TableRow};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkerStatus {
    Active,
    Pending,
    Suspended,
}

impl fmt::Display for WalkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WalkerStatus::Active => "active",
            WalkerStatus::Pending => "pending",
            WalkerStatus::Suspended => "suspended",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walker {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub city: String,
    /// Average client rating, 0 to 5.
    pub rating: f32,
    pub completed_walks: u32,
    pub status: WalkerStatus,
    pub joined: NaiveDate,
}

impl TableRow for Walker {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "city" => self.city.as_str().into(),
            "rating" => self.rating.into(),
            "completed_walks" => self.completed_walks.into(),
            "status" => self.status.to_string().into(),
            "joined" => self.joined.to_string().into(),
            _ => CellValue::Empty,
        }
    }

    fn key(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

/// Columns of the walker table, in display order.
pub fn walker_columns() -> Vec<Column<Walker>> {
    vec![
        Column::new("name", "Name").field("name").sortable("name"),
        Column::new("email", "Email").field("email").sortable("email"),
        Column::new("city", "City").field("city").sortable("city"),
        Column::new("rating", "Rating")
            .map(|w: &Walker| format!("{:.1}", w.rating).into())
            .sortable("rating")
            .fixed(8),
        Column::new("walks", "Walks")
            .field("completed_walks")
            .sortable("completed_walks"),
        Column::new("status", "Status")
            .field("status")
            .render(|w: &Walker, _| match w.status {
                WalkerStatus::Active => "● active".into(),
                WalkerStatus::Pending => "○ pending".into(),
                WalkerStatus::Suspended => "✕ suspended".into(),
            })
            .sortable("status"),
        Column::new("joined", "Joined").field("joined").sortable("joined"),
    ]
}

/// Sort walkers for the given state. Unsorted and unknown fields keep the
/// input order.
pub fn sort_walkers(walkers: &mut [Walker], sort: &SortState) {
    let compare: fn(&Walker, &Walker) -> Ordering = match sort.field.as_str() {
        "name" => |a, b| a.name.cmp(&b.name),
        "email" => |a, b| a.email.cmp(&b.email),
        "city" => |a, b| a.city.cmp(&b.city),
        "rating" => |a, b| a.rating.total_cmp(&b.rating),
        "completed_walks" => |a, b| a.completed_walks.cmp(&b.completed_walks),
        "status" => |a, b| a.status.cmp(&b.status),
        "joined" => |a, b| a.joined.cmp(&b.joined),
        _ => return,
    };
    match sort.direction {
        SortDirection::Asc => walkers.sort_by(compare),
        SortDirection::Desc => walkers.sort_by(|a, b| compare(b, a)),
    }
}

const FIRST_NAMES: [&str; 12] = [
    "Alex", "Bea", "Carmen", "Dev", "Elif", "Finn", "Greta", "Hiro", "Ines", "Jonas", "Kemi",
    "Luca",
];
const LAST_NAMES: [&str; 7] = [
    "Okafor", "Lindqvist", "Moreau", "Tanaka", "García", "Novak", "Byrne",
];
const CITIES: [&str; 5] = ["Lisbon", "Utrecht", "Leeds", "Ghent", "Porto"];

/// `count` deterministic sample walkers with fresh ids.
pub fn sample_walkers(count: usize) -> Vec<Walker> {
    let epoch = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap_or_default();
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let status = match i % 9 {
                0 => WalkerStatus::Pending,
                4 => WalkerStatus::Suspended,
                _ => WalkerStatus::Active,
            };
            Walker {
                id: Uuid::new_v4(),
                name: format!("{first} {last}"),
                email: format!("{}.{}{i}@pawdesk.dev", first.to_lowercase(), last.to_lowercase()),
                city: CITIES[(i * 7) % CITIES.len()].to_string(),
                rating: 3.0 + ((i * 13) % 21) as f32 / 10.0,
                completed_walks: ((i * 37) % 240) as u32,
                status,
                joined: epoch
                    .checked_add_days(Days::new((i as u64 * 11) % 900))
                    .unwrap_or(epoch),
            }
        })
        .collect()
}
