//! # admingen
//!
//! **admingen** is a schema-driven text generator. Given a description of a
//! relational table (columns, keys, indexes) it emits derived artifacts:
//!
//! - an HTML reference table documenting the schema
//! - skeletal source files (an "area" module and a "controller" module)
//!   produced by substituting values into fixed text templates
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - **[`schema`]** - Read-only table/column/index descriptors and loading
//!   from YAML or JSON schema documents
//! - **[`generator`]** - Template store, placeholder substitution engine,
//!   tabular HTML renderer, output sink, and the generation operations
//! - **[`cli`]** - Command-line interface for the `admingen` binary
//!
//! ## Generation flow
//!
//! ```text
//! Schema document → schema::load_schema → Vec<Table>
//!                                             │
//!                 generator::build_reference_doc ──→ {Name}.htm
//!                 generator::build_area          ──→ {name}_area.rs
//!                 generator::build_controller    ──→ {name}_controller.rs
//! ```
//!
//! All three operations route their writes through
//! [`generator::OutputSink::write_if_absent`]: a destination that already
//! holds content is never overwritten, so regeneration is non-destructive.
//!
//! ## Programmatic usage
//!
//! ```rust,no_run
//! use admingen::generator::{build_reference_doc, GenOptions};
//! use admingen::schema::load_schema;
//!
//! # fn main() -> anyhow::Result<()> {
//! let tables = load_schema("tables.yaml")?;
//! let mut options = GenOptions::new("Gps", "GPS tracking");
//! options.output = "out".into();
//! options.exclude("Log");
//! let rendered = build_reference_doc(&tables, &options)?;
//! println!("rendered {rendered} table(s)");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod generator;
pub mod schema;

pub use generator::{build_area, build_controller, build_reference_doc, GenOptions};
pub use schema::{load_schema, Column, Index, Table};
