//! # Schema Module
//!
//! Read-only descriptors for the tables being documented and scaffolded:
//! [`Table`], [`Column`], and [`Index`].
//!
//! The descriptors are supplied by an external metadata provider. This crate
//! does not introspect databases; it deserializes a YAML or JSON schema
//! document with [`load_schema`]. Column order inside a table is declaration
//! order and drives row order in rendered output.

mod model;


pub use model::{load_schema, Column, Index, SchemaDoc, Table};
