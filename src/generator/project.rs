use tracing::debug;

use crate::schema::Table;

use super::html::render_tables;
use super::options::GenOptions;
use super::output::OutputSink;
use super::templates::{render_template, TEMPLATES};

/// Default stem used when options carry no name.
const DEFAULT_NAME: &str = "Model";

/// Generate the area module scaffold.
///
/// Substitutes `{Project}` (`{name}Web`), `{Name}`, and `{DisplayName}` into
/// the area template and writes it to `{name}_area.rs` under the output
/// root. The file is written once per distinct name and never overwritten.
///
/// Returns the number of files written: `1`, or `0` when the destination
/// already existed.
///
/// # Errors
///
/// Returns an error if the destination cannot be created or written.
pub fn build_area(options: &GenOptions) -> anyhow::Result<u32> {
    let options = options.clone();
    let project = format!("{}Web", options.name);
    let code = render_template(
        &TEMPLATES.area,
        &[
            ("Project", project.as_str()),
            ("Name", options.name.as_str()),
            ("DisplayName", options.display_name.as_str()),
        ],
    );

    let file = format!("{}_area.rs", module_stem(&options.name));
    debug!(file = %file, "generating area scaffold");
    let sink = OutputSink::new(&options.output);
    let wrote = sink.write_if_absent(&file, &code)?;
    Ok(u32::from(wrote))
}

/// Generate the controller module scaffold.
///
/// The controller template is a fixed reference artifact; only `{Namespace}`
/// is bound per run. It goes through the same substitution engine and sink
/// as the area scaffold, written to `{name}_controller.rs`.
///
/// Returns `1` when written, `0` when the destination already existed.
///
/// # Errors
///
/// Returns an error if the destination cannot be created or written.
pub fn build_controller(options: &GenOptions) -> anyhow::Result<u32> {
    let options = options.clone();
    let code = render_template(
        &TEMPLATES.controller,
        &[("Namespace", options.namespace.as_str())],
    );

    let file = format!("{}_controller.rs", module_stem(&options.name));
    debug!(file = %file, "generating controller scaffold");
    let sink = OutputSink::new(&options.output);
    let wrote = sink.write_if_absent(&file, &code)?;
    Ok(u32::from(wrote))
}

/// Render the column reference document for a batch of tables.
///
/// Tables whose physical or logical name is excluded are skipped; the rest
/// render in input order into one document named `{name}.htm` (falling back
/// to `Model.htm`), persisted through the sink.
///
/// Returns the count of tables rendered, regardless of whether the document
/// file was written or skipped as already populated.
///
/// # Errors
///
/// Returns an error when called with no tables (rendering cannot proceed
/// without metadata) or when the document cannot be written.
pub fn build_reference_doc(tables: &[Table], options: &GenOptions) -> anyhow::Result<u32> {
    if tables.is_empty() {
        anyhow::bail!("no tables supplied; cannot render a reference document");
    }
    let options = options.clone();

    let (markup, count) = render_tables(tables, &options);

    let name = if options.name.is_empty() {
        DEFAULT_NAME
    } else {
        options.name.as_str()
    };
    let file = format!("{name}.htm");
    debug!(file = %file, count, "generating reference document");
    let sink = OutputSink::new(&options.output);
    sink.write_if_absent(&file, &markup)?;
    Ok(count)
}

/// snake_case file stem for a module name, falling back to `model`.
pub(crate) fn module_stem(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_NAME.to_ascii_lowercase();
    }
    let mut stem = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                stem.push('_');
            }
            stem.push(ch.to_ascii_lowercase());
        } else {
            stem.push(ch);
        }
    }
    stem
}
