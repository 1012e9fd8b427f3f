//! Admin content editors.
//!
//! Every editor keeps its state in a plain record with a tagged field enum
//! and updates it through a pure reducer, so the views only forward input
//! events and the editing rules stay testable without a browser.

pub mod homepage;
pub mod promotions;
pub mod services;

use shared_types::{Promotion, Service};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("\"{0}\" is not a valid price")]
    InvalidPrice(String),

    #[error("\"{0}\" is not a valid date, use YYYY-MM-DD")]
    InvalidDate(String),
}

/// Records addressed by an API-assigned id. Unsaved records have none.
pub trait Identified {
    fn id(&self) -> Option<&str>;
}

impl Identified for Service {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Identified for Promotion {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// One row of an editor list. `key` is local to the page and stays the same
/// while the API assigns an id to a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub key: u64,
    pub record: T,
}

/// A save shown in the list before the API has answered.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave<T> {
    pub key: u64,
    previous: Option<T>,
}

/// A row taken out of the list before the API has confirmed the delete.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRemoval<T> {
    index: usize,
    row: Row<T>,
}

/// Records as an admin editor shows them, with optimistic changes applied.
///
/// Every reply is merged into the current list and touches only the row it
/// belongs to, so several requests may be in flight at once.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorList<T> {
    rows: Vec<Row<T>>,
    next_key: u64,
}

impl<T: Identified + Clone> EditorList<T> {
    pub fn new(records: Vec<T>) -> Self {
        let rows: Vec<Row<T>> = records
            .into_iter()
            .enumerate()
            .map(|(key, record)| Row {
                key: key as u64,
                record,
            })
            .collect();
        let next_key = rows.len() as u64;
        Self { rows, next_key }
    }

    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    pub fn records(&self) -> Vec<T> {
        self.rows.iter().map(|row| row.record.clone()).collect()
    }

    /// Shows `record` right away: it replaces the row with the same id, or
    /// is appended as a new row.
    pub fn stage(&mut self, record: T) -> PendingSave<T> {
        let existing = record
            .id()
            .and_then(|id| self.rows.iter_mut().find(|row| row.record.id() == Some(id)));

        match existing {
            Some(row) => {
                let previous = std::mem::replace(&mut row.record, record);
                PendingSave {
                    key: row.key,
                    previous: Some(previous),
                }
            }
            None => {
                let key = self.next_key;
                self.next_key += 1;
                self.rows.push(Row { key, record });
                PendingSave {
                    key,
                    previous: None,
                }
            }
        }
    }

    /// The API accepted the save; its version of the record wins. A row
    /// deleted in the meantime stays deleted.
    pub fn confirm(&mut self, pending: &PendingSave<T>, saved: T) {
        if let Some(row) = self.row_mut(pending.key) {
            row.record = saved;
        }
    }

    /// The API refused the save. A new row disappears, an edited row gets
    /// its previous record back.
    pub fn revert(&mut self, pending: PendingSave<T>) {
        match pending.previous {
            Some(previous) => {
                if let Some(row) = self.row_mut(pending.key) {
                    row.record = previous;
                }
            }
            None => self.rows.retain(|row| row.key != pending.key),
        }
    }

    /// Hides the record with `id` until the delete is confirmed.
    pub fn take(&mut self, id: &str) -> Option<PendingRemoval<T>> {
        let index = self.rows.iter().position(|row| row.record.id() == Some(id))?;
        let row = self.rows.remove(index);
        Some(PendingRemoval { index, row })
    }

    /// Puts a row back after a failed delete, as close to its old place as
    /// the current list allows.
    pub fn restore(&mut self, removal: PendingRemoval<T>) {
        let index = removal.index.min(self.rows.len());
        self.rows.insert(index, removal.row);
    }

    fn row_mut(&mut self, key: u64) -> Option<&mut Row<T>> {
        self.rows.iter_mut().find(|row| row.key == key)
    }
}

pub(crate) fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
