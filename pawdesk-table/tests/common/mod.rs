#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use pawdesk_table::{
    CellValue, Column, DataTable, PaginationProps, SortState, TableCallbacks, TableProps, TableRow,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Walker {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub walks: u32,
}

impl TableRow for Walker {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "walks" => self.walks.into(),
            _ => CellValue::Empty,
        }
    }

    fn key(&self) -> Option<String> {
        Some(format!("walker-{}", self.id))
    }
}

pub fn walkers(n: usize) -> Vec<Walker> {
    (0..n)
        .map(|i| Walker {
            id: i as u32,
            name: format!("walker-{i:02}"),
            email: format!("w{i}@example.com"),
            walks: i as u32 * 3,
        })
        .collect()
}

pub fn columns() -> Vec<Column<Walker>> {
    vec![
        Column::new("name", "Name").field("name").sortable("name"),
        Column::new("email", "Email").field("email").sortable("email"),
        Column::new("walks", "Walks").map(|w: &Walker| w.walks.into()),
    ]
}

pub fn pagination(total_items: usize, page: usize, page_size: usize) -> PaginationProps {
    PaginationProps {
        total_items,
        page,
        page_size,
    }
}

/// A client-sliced table over `n` walkers.
pub fn table(n: usize, page: usize, page_size: usize) -> DataTable<Walker> {
    DataTable::new(
        TableProps::new(walkers(n), columns()).pagination(pagination(n, page, page_size)),
        TableCallbacks::new(),
    )
}

/// Everything the table reported through its callbacks.
#[derive(Debug, Default)]
pub struct Reports {
    pub sorts: Vec<SortState>,
    pub pages: Vec<usize>,
    pub page_sizes: Vec<usize>,
}

/// Callbacks that record into the returned [`Reports`].
pub fn recording_callbacks() -> (Rc<RefCell<Reports>>, TableCallbacks) {
    let reports = Rc::new(RefCell::new(Reports::default()));
    let sorts = Rc::clone(&reports);
    let pages = Rc::clone(&reports);
    let sizes = Rc::clone(&reports);
    let callbacks = TableCallbacks::new()
        .on_sort(move |s| sorts.borrow_mut().sorts.push(s.clone()))
        .on_page_change(move |p| pages.borrow_mut().pages.push(p))
        .on_page_size_change(move |s| sizes.borrow_mut().page_sizes.push(s));
    (reports, callbacks)
}
