//! Static grid configuration: columns and widget options.
//!
//! Mirrors the options object handed to the external grid widget. The
//! descriptor is built once at initialization and never changes after
//! the widget is created, except for the appended Actions column.

use crate::grid::format;
use crate::models::file::FileEntry;

/// What a column renders. Decides the formatter applied to each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Name,
    Size,
    Actions,
}

/// One column of the grid.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ColumnKind,
    pub width: Option<u32>,
    pub sortable: bool,
    pub default_sort_asc: bool,
    pub css_class: Option<&'static str>,
}

impl ColumnSpec {
    /// Format the cell for this column from a typed row record.
    pub fn render(&self, entry: &FileEntry) -> String {
        match self.kind {
            ColumnKind::Name => format::name_cell(entry).to_html(),
            ColumnKind::Size => format::size_to_text(entry.size),
            ColumnKind::Actions => format::delete_control(&entry.uid),
        }
    }
}

/// The widget configuration for a file listing grid.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// CSS selector of the DOM element hosting the grid.
    pub container: String,
    pub columns: Vec<ColumnSpec>,
    pub enable_cell_navigation: bool,
    pub auto_height: bool,
    pub force_fit_columns: bool,
    /// Enables drag-and-drop uploads onto the grid area.
    pub drop_zone: bool,
    /// POST endpoint for drag-and-drop uploads.
    pub upload_url: String,
}

impl GridConfig {
    /// Configuration for a file listing: Name and Size columns, name
    /// sorted ascending by default, drag-and-drop uploads enabled.
    pub fn file_listing(container: impl Into<String>, upload_url: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            columns: vec![
                ColumnSpec {
                    id: "name",
                    title: "Name",
                    kind: ColumnKind::Name,
                    width: None,
                    sortable: true,
                    default_sort_asc: true,
                    css_class: Some("cell-title"),
                },
                ColumnSpec {
                    id: "size",
                    title: "Size",
                    kind: ColumnKind::Size,
                    width: Some(90),
                    sortable: true,
                    default_sort_asc: false,
                    css_class: None,
                },
            ],
            enable_cell_navigation: false,
            auto_height: true,
            force_fit_columns: true,
            drop_zone: true,
            upload_url: upload_url.into(),
        }
    }

    /// Append the trailing Actions column rendering the per-row delete
    /// control. Idempotent; the column is never sortable.
    pub fn append_actions_column(&mut self) {
        if self.columns.iter().any(|c| c.kind == ColumnKind::Actions) {
            return;
        }
        self.columns.push(ColumnSpec {
            id: "buttons",
            title: "Actions",
            kind: ColumnKind::Actions,
            width: None,
            sortable: false,
            default_sort_asc: false,
            css_class: None,
        });
    }
}
