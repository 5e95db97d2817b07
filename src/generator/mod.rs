//! # Generator Module
//!
//! Everything between a loaded schema and the files on disk:
//!
//! - **templates** - the template store and the placeholder substitution
//!   engine (literal, order-sensitive find-and-replace)
//! - **html** - the tabular renderer that turns tables into HTML reference
//!   markup, one row per eligible column
//! - **output** - the output sink; the only place file-existence policy is
//!   decided
//! - **project** - the three generation operations: area scaffold,
//!   controller scaffold, and the batch column reference document
//!
//! ## Flow
//!
//! ```text
//! GenOptions ──→ build_area ──────────→ render_template ──→ OutputSink
//! GenOptions ──→ build_controller ────→ render_template ──→ OutputSink
//! Vec<Table> ──→ build_reference_doc ─→ render_tables ────→ OutputSink
//! ```
//!
//! All operations clone the options they receive, so a caller reusing one
//! `GenOptions` value across renders never observes cross-talk.

mod html;
mod options;
mod output;
mod project;
mod templates;

#[cfg(test)]
mod tests;

pub use html::{next_indent, render_table, render_tables, HtmlRenderer, RowRenderer};
pub use options::GenOptions;
pub use output::OutputSink;
pub use project::{build_area, build_controller, build_reference_doc};
pub use templates::{render_template, TemplateStore, TEMPLATES};
