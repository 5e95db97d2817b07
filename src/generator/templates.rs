use once_cell::sync::Lazy;

/// Default area module template.
///
/// Tokens: `{Project}`, `{Name}`, `{DisplayName}`.
const AREA_TEMPLATE: &str = r#"//! {DisplayName} admin area, part of the {Project} project.

use crate::area::AreaBase;

/// Admin area grouping the {DisplayName} controllers.
pub struct {Name}Area;

impl AreaBase for {Name}Area {
    fn name(&self) -> &'static str {
        "{Name}"
    }

    fn display_name(&self) -> &'static str {
        "{DisplayName}"
    }
}
"#;

/// Default controller module template.
///
/// A fixed reference artifact showing the shape of a generated controller;
/// only `{Namespace}` is bound per run. The `{TraceId}` marker inside the
/// body is part of the illustrated code and deliberately has no binding, so
/// it survives substitution verbatim.
const CONTROLLER_TEMPLATE: &str = r#"use {Namespace}::model::TirePressure;
use crate::controller::{Pager, ReadOnlyEntityController};
use crate::web::build_url;

/// Read-only controller for the `TirePressure` table.
pub struct TirePressureController;

impl TirePressureController {
    /// Link template expanded per row by the list view.
    pub fn trace_url() -> String {
        build_url("{TraceId}")
    }
}

impl ReadOnlyEntityController<TirePressure> for TirePressureController {
    fn search(&self, pager: &Pager) -> Vec<TirePressure> {
        let device_id = pager.get_i32("deviceId").unwrap_or(-1);
        let provider = pager.get("provider").unwrap_or_default();
        let start = pager.get_datetime("dtStart");
        let end = pager.get_datetime("dtEnd");

        TirePressure::search(device_id, provider, start, end, pager.get("Q"), pager)
    }
}
"#;

/// Process-wide immutable template configuration.
///
/// Templates are data, not code: swap the strings in a custom store to change
/// generated output without recompiling the engine.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    /// Area module template
    pub area: String,
    /// Controller module template
    pub controller: String,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self {
            area: AREA_TEMPLATE.to_string(),
            controller: CONTROLLER_TEMPLATE.to_string(),
        }
    }
}

/// The built-in template store, loaded once at first use.
pub static TEMPLATES: Lazy<TemplateStore> = Lazy::new(TemplateStore::default);

/// Apply `(token, value)` bindings to a template by sequential literal
/// replacement.
///
/// Each binding replaces every occurrence of `{token}` (case-sensitive) in
/// the string produced by the previous pass, in the order the bindings are
/// supplied. Order matters when tokens overlap: a value that itself contains
/// another token's literal text is re-substituted by a later pass. Callers
/// control binding order to avoid unintended re-substitution; there is no
/// escaping mechanism. A token with no occurrence in the template is a
/// no-op, and a `{Placeholder}` with no binding is left verbatim — neither
/// is an error.
pub fn render_template(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (token, value) in bindings {
        rendered = rendered.replace(&format!("{{{token}}}"), value);
    }
    rendered
}
