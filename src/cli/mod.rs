//! # CLI Module
//!
//! Command-line interface for the `admingen` binary.
//!
//! ## Commands
//!
//! ### `area`
//!
//! Generate the area module scaffold:
//!
//! ```bash
//! admingen area --name Gps --display-name "GPS tracking" --output out
//! ```
//!
//! ### `controller`
//!
//! Generate the illustrative controller scaffold:
//!
//! ```bash
//! admingen controller --name Gps --namespace gps_model --output out
//! ```
//!
//! ### `doc`
//!
//! Render the HTML column reference for a schema document:
//!
//! ```bash
//! admingen doc --schema tables.yaml --name Gps --output out --exclude Log,Audit
//! ```
//!
//! Existing non-empty output files are never overwritten; a skipped write is
//! reported and counted as zero files generated.

mod commands;


pub use commands::{run_cli, Cli, Commands};
