use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::{build_area, build_controller, build_reference_doc, GenOptions};
use crate::schema::load_schema;

/// Command-line interface for admingen
///
/// Provides commands for generating scaffold modules and the schema
/// reference document.
#[derive(Parser)]
#[command(name = "admingen")]
#[command(about = "Schema-driven scaffold and reference-doc generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for admingen
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the area module scaffold
    Area {
        /// Connection/name identifier; names the output file and module
        #[arg(short, long)]
        name: String,

        /// Human label inserted into the template
        #[arg(short, long, default_value = "")]
        display_name: String,

        /// Output directory for generated files
        #[arg(short, long, default_value = "out")]
        output: PathBuf,
    },
    /// Generate the illustrative controller scaffold
    Controller {
        /// Connection/name identifier; names the output file
        #[arg(short, long)]
        name: String,

        /// Namespace substituted into the controller template
        #[arg(long, default_value = "")]
        namespace: String,

        /// Output directory for generated files
        #[arg(short, long, default_value = "out")]
        output: PathBuf,
    },
    /// Render the HTML column reference for a schema document
    Doc {
        /// Path to the schema document (YAML or JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Document name; falls back to "Model" when omitted
        #[arg(short, long, default_value = "")]
        name: String,

        /// Output directory for the generated document
        #[arg(short, long, default_value = "out")]
        output: PathBuf,

        /// Table or column names to skip (comma-separated or repeated)
        #[arg(short, long, num_args = 1.., value_delimiter = ',')]
        exclude: Vec<String>,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The schema document cannot be loaded or parsed
/// - An output destination cannot be created or written
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run_command(&cli.command)
}

/// Dispatch a parsed command; split from [`run_cli`] so tests can drive it.
pub(crate) fn run_command(command: &Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Area {
            name,
            display_name,
            output,
        } => {
            let mut options = GenOptions::new(name.as_str(), display_name.as_str());
            options.output = output.clone();
            let written = build_area(&options)?;
            println!("area scaffold: {written} file(s) written");
            Ok(())
        }
        Commands::Controller {
            name,
            namespace,
            output,
        } => {
            let mut options = GenOptions::new(name.as_str(), "");
            options.namespace = namespace.clone();
            options.output = output.clone();
            let written = build_controller(&options)?;
            println!("controller scaffold: {written} file(s) written");
            Ok(())
        }
        Commands::Doc {
            schema,
            name,
            output,
            exclude,
        } => {
            let tables = load_schema(schema)?;
            let mut options = GenOptions::new(name.as_str(), "");
            options.output = output.clone();
            for excluded in exclude {
                options.exclude(excluded);
            }
            let rendered = build_reference_doc(&tables, &options)?;
            println!("reference doc: {rendered} table(s) rendered");
            Ok(())
        }
    }
}
