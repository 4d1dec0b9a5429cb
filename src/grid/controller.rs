//! Owned grid controller: the displayed row collection.
//!
//! Holds the rows the widget shows, enforcing the snapshot invariant
//! that every uid is unique. All mutation happens here, from the UI
//! thread, in response to discrete events; nothing in this crate
//! touches the rows concurrently.

use crate::error::{AppError, Result};
use crate::grid::config::GridConfig;
use crate::models::file::FileEntry;

/// Column a sort can be applied to. The Actions column never sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Size,
}

#[derive(Debug)]
pub struct GridController {
    config: GridConfig,
    rows: Vec<FileEntry>,
    sort_key: SortKey,
    sort_asc: bool,
}

impl GridController {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            rows: Vec::new(),
            sort_key: SortKey::Name,
            sort_asc: true,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Displayed rows, in display order.
    pub fn rows(&self) -> &[FileEntry] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn entry(&self, uid: &str) -> Option<&FileEntry> {
        self.rows.iter().find(|e| e.uid == uid)
    }

    /// Replace the rows from a fetched snapshot and apply the default
    /// sort (name, ascending). Rejects snapshots with duplicate uids.
    pub fn seed(&mut self, rows: Vec<FileEntry>) -> Result<()> {
        check_unique_uids(&rows)?;
        self.rows = rows;
        self.sort(SortKey::Name, true);
        Ok(())
    }

    /// Append one row, e.g. after an upload. The uid must not already
    /// be displayed.
    pub fn insert_row(&mut self, entry: FileEntry) -> Result<()> {
        if self.entry(&entry.uid).is_some() {
            return Err(AppError::Grid(format!("duplicate uid: {}", entry.uid)));
        }
        self.rows.push(entry);
        Ok(())
    }

    /// Remove every row whose uid appears in `uids`. Returns how many
    /// rows were removed; unknown uids are ignored.
    pub fn remove_rows(&mut self, uids: &[String]) -> usize {
        let before = self.rows.len();
        self.rows.retain(|e| !uids.iter().any(|uid| uid == &e.uid));
        before - self.rows.len()
    }

    /// Re-sort the displayed rows. Name compares case-insensitively;
    /// a missing size sorts as zero. The sort is stable.
    pub fn sort(&mut self, key: SortKey, ascending: bool) {
        self.sort_key = key;
        self.sort_asc = ascending;
        match key {
            SortKey::Name => self
                .rows
                .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
            SortKey::Size => self
                .rows
                .sort_by(|a, b| a.size.unwrap_or(0).cmp(&b.size.unwrap_or(0))),
        }
        if !ascending {
            self.rows.reverse();
        }
    }

    pub fn sort_state(&self) -> (SortKey, bool) {
        (self.sort_key, self.sort_asc)
    }

    /// Format every displayed row: one cell string per configured
    /// column, in column order.
    pub fn render_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|entry| {
                self.config
                    .columns
                    .iter()
                    .map(|col| col.render(entry))
                    .collect()
            })
            .collect()
    }
}

fn check_unique_uids(rows: &[FileEntry]) -> Result<()> {
    let mut seen = std::collections::HashSet::with_capacity(rows.len());
    for entry in rows {
        if !seen.insert(entry.uid.as_str()) {
            return Err(AppError::Grid(format!(
                "duplicate uid in snapshot: {}",
                entry.uid
            )));
        }
    }
    Ok(())
}
