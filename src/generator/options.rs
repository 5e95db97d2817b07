use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::schema::{Column, Table};

/// Options for one generation run.
///
/// Operations receive a reference and clone it internally, so a caller may
/// hold one `GenOptions` and reuse it across renders; mutations made between
/// calls never leak into a render already in flight. Clone before reuse when
/// sharing across threads.
#[derive(Debug, Clone, Default)]
pub struct GenOptions {
    /// Connection/name identifier; names output files and templated modules
    pub name: String,
    /// Human label inserted into templates and titles
    pub display_name: String,
    /// Namespace inserted into the controller template
    pub namespace: String,
    /// Output location root; logical names resolve beneath it
    pub output: PathBuf,
    /// Excluded table/column names, stored lowercased
    excludes: BTreeSet<String>,
}

impl GenOptions {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Add a table or column name to the exclusion set.
    pub fn exclude(&mut self, name: impl AsRef<str>) {
        self.excludes.insert(name.as_ref().to_ascii_lowercase());
    }

    /// Case-insensitive exclusion check. Empty names never match.
    pub fn is_excluded(&self, name: &str) -> bool {
        !name.is_empty() && self.excludes.contains(&name.to_ascii_lowercase())
    }

    /// Whether a column should appear in rendered output.
    ///
    /// Owns the "valid for display" predicate so renderers never consult the
    /// exclusion set directly.
    pub fn is_valid_column(&self, column: &Column) -> bool {
        !self.is_excluded(&column.name) && !self.is_excluded(column.physical_name())
    }

    /// Whether a table survives batch rendering.
    pub fn is_valid_table(&self, table: &Table) -> bool {
        !self.is_excluded(&table.name) && !self.is_excluded(table.physical_name())
    }
}
