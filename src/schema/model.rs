use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// A single column of a [`Table`].
///
/// Immutable once loaded from the schema provider. Fields default so that
/// sparse schema documents still parse; a column only needs a `name`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Column {
    /// Logical name used in generated code and exclusion matching
    pub name: String,
    /// Physical column name; falls back to `name` when empty
    pub column_name: String,
    /// Human-readable label
    pub display_name: String,
    /// Native type string as recorded by the provider (e.g. `NVARCHAR(50)`)
    pub raw_type: Option<String>,
    /// Semantic type path used when no raw type was recorded
    pub data_type: Option<String>,
    /// Declared length; `0` means "no length"
    pub length: i32,
    /// Numeric precision; `0` means unspecified
    pub precision: i32,
    /// Numeric scale; `0` means unspecified
    pub scale: i32,
    /// Whether the column accepts NULL
    pub nullable: bool,
    /// Auto-increment column
    pub identity: bool,
    /// Primary key member
    pub primary_key: bool,
    /// Free-form description from the provider
    pub description: String,
}

impl Column {
    /// Physical name of the column, falling back to the logical name.
    pub fn physical_name(&self) -> &str {
        if self.column_name.is_empty() {
            &self.name
        } else {
            &self.column_name
        }
    }

    /// Type string for display: the recorded raw type wins; otherwise the
    /// semantic type path with a leading `std::` prefix stripped.
    pub fn type_name(&self) -> &str {
        if let Some(raw) = self.raw_type.as_deref() {
            if !raw.is_empty() {
                return raw;
            }
        }
        let ty = self.data_type.as_deref().unwrap_or("");
        ty.strip_prefix("std::").unwrap_or(ty)
    }

    /// Description with the display name and leading separator punctuation
    /// (full-width or half-width period/comma) stripped from the front.
    pub fn remark(&self) -> &str {
        let mut remark = self.description.as_str();
        if !self.display_name.is_empty() {
            remark = remark.strip_prefix(&self.display_name).unwrap_or(remark);
        }
        remark.trim_start_matches(['。', '，', '.', ','])
    }
}

/// An index over one or more columns of a [`Table`].
///
/// Only single-column unique indexes influence rendering (the `UQ` badge).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Index {
    /// Ordered column-name references
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness
    pub unique: bool,
}

/// A table descriptor: ordered columns plus indexes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Table {
    /// Logical name used in exclusion matching
    pub name: String,
    /// Physical table name; falls back to `name` when empty
    pub table_name: String,
    /// Human-readable label used in the reference-doc title
    pub display_name: String,
    /// Columns in declaration order; this order drives row order in output
    pub columns: Vec<Column>,
    /// Indexes declared on the table
    pub indexes: Vec<Index>,
}

impl Table {
    /// Physical name of the table, falling back to the logical name.
    pub fn physical_name(&self) -> &str {
        if self.table_name.is_empty() {
            &self.name
        } else {
            &self.table_name
        }
    }
}

/// Top-level shape of a schema document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchemaDoc {
    /// Tables in document order
    pub tables: Vec<Table>,
}

/// Load table descriptors from a YAML or JSON schema document.
///
/// `.yaml`/`.yml` files are parsed with serde_yaml, everything else as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or contains
/// no tables — rendering cannot proceed without metadata.
pub fn load_schema(path: impl AsRef<Path>) -> anyhow::Result<Vec<Table>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema document {path:?}"))?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    let doc: SchemaDoc = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse schema document {path:?}"))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse schema document {path:?}"))?
    };
    if doc.tables.is_empty() {
        anyhow::bail!("schema document {path:?} contains no tables");
    }
    Ok(doc.tables)
}
