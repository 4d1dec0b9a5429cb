//! Cell formatters for the file grid.
//!
//! Pure functions over a `FileEntry` — no widget callback signatures.
//! The widget adapter calls these to produce the text of each cell.

use crate::models::file::FileEntry;

/// Unit suffixes selected by repeated division by 1024.
pub const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Marker prefixed to the name of non-root entries.
pub const NESTED_MARKER: &str = "\u{21b3}";

/// Fallback CSS class when the backend sends no `type`.
pub const DEFAULT_KIND_CLASS: &str = "cell-item";

/// Render a byte count as a human-readable size string.
///
/// Divides by 1024 while the value is at least 1024 and a larger unit
/// exists. Decimal places grow with the unit: none for B, one for KB,
/// two from MB upward. An absent size renders the placeholder `--`.
pub fn size_to_text(size: Option<u64>) -> String {
    let Some(bytes) = size else {
        return "--".to_string();
    };
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.*} {}", unit.min(2), value, SIZE_UNITS[unit])
}

/// Indent for a nested entry, in pixel-equivalent units.
///
/// Root and first-level entries sit flush left; deeper entries are
/// indented 10 units per level, minus one.
pub fn indent_units(depth: u32) -> u32 {
    if depth <= 1 {
        0
    } else {
        10 * depth - 1
    }
}

/// Escape text for embedding in HTML attribute or element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// CSS class derived from the entry kind, e.g. "cell-file".
pub fn kind_class(kind: Option<&str>) -> String {
    match kind {
        Some(k) if !k.is_empty() => format!("cell-{}", k),
        _ => DEFAULT_KIND_CLASS.to_string(),
    }
}

/// The formatted Name cell: indentation, nesting marker, escaped text
/// and a kind-derived CSS class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCell {
    pub indent: u32,
    pub marker: bool,
    pub text: String,
    pub css_class: String,
}

impl NameCell {
    pub fn to_html(&self) -> String {
        let prefix = if self.marker {
            format!("{} ", NESTED_MARKER)
        } else {
            String::new()
        };
        if self.indent > 0 {
            format!(
                "<span class=\"{}\" style=\"text-indent:{}px\">{}{}</span>",
                self.css_class, self.indent, prefix, self.text
            )
        } else {
            format!(
                "<span class=\"{}\">{}{}</span>",
                self.css_class, prefix, self.text
            )
        }
    }
}

/// Build the Name cell for an entry.
pub fn name_cell(entry: &FileEntry) -> NameCell {
    NameCell {
        indent: indent_units(entry.depth),
        marker: entry.depth >= 1,
        text: escape_html(&entry.name),
        css_class: format!("cell-title {}", kind_class(entry.kind.as_deref())),
    }
}

/// Render the per-row delete control for the Actions column, bound to
/// the row's uid.
pub fn delete_control(uid: &str) -> String {
    format!(
        "<a href=\"#\" class=\"btn btn-danger deleteBtn\" data-uid=\"{}\">Delete</a>",
        escape_html(uid)
    )
}
