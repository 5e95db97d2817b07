#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::schema::{Column, Index, Table};

fn column(name: &str) -> Column {
    Column {
        name: name.into(),
        display_name: name.into(),
        ..Column::default()
    }
}

fn table(name: &str, columns: Vec<Column>) -> Table {
    Table {
        name: name.into(),
        columns,
        ..Table::default()
    }
}

#[test]
fn test_render_template_basic() {
    let rendered = render_template(
        "pub struct {Name}Area; // {DisplayName}",
        &[("Name", "Gps"), ("DisplayName", "GPS tracking")],
    );
    assert_eq!(rendered, "pub struct GpsArea; // GPS tracking");
}

#[test]
fn test_render_template_is_order_dependent() {
    // A's value introduces a new {B} that the later B pass then replaces
    let rendered = render_template("{A}{B}", &[("A", "{B}"), ("B", "X")]);
    assert_eq!(rendered, "XX");

    // Reversed order: B runs first, A's {B} is introduced too late
    let rendered = render_template("{A}{B}", &[("B", "X"), ("A", "{B}")]);
    assert_eq!(rendered, "{B}X");
}

#[test]
fn test_render_template_unmatched_placeholder_left_verbatim() {
    let rendered = render_template("fn url() -> {Missing}", &[("Name", "Gps")]);
    assert_eq!(rendered, "fn url() -> {Missing}");
}

#[test]
fn test_render_template_no_bindings() {
    assert_eq!(render_template("{A}{B}", &[]), "{A}{B}");
}

#[test]
fn test_builtin_templates_substitute() {
    let code = render_template(
        &TEMPLATES.area,
        &[
            ("Project", "GpsWeb"),
            ("Name", "Gps"),
            ("DisplayName", "GPS tracking"),
        ],
    );
    assert!(code.contains("pub struct GpsArea;"));
    assert!(code.contains("GpsWeb"));
    assert!(!code.contains("{Name}"));

    let code = render_template(&TEMPLATES.controller, &[("Namespace", "gps_model")]);
    assert!(code.contains("use gps_model::model::TirePressure;"));
    // The illustrated link marker has no binding and must survive
    assert!(code.contains("build_url(\"{TraceId}\")"));
}

#[test]
fn test_next_indent_heuristic() {
    assert_eq!(next_indent(0, "<table>"), 1);
    assert_eq!(next_indent(1, "<thead>"), 2);
    // Same-line open/close leaves depth alone
    assert_eq!(next_indent(3, "<td>Id</td>"), 3);
    assert_eq!(next_indent(3, "<td></td>"), 3);
    assert_eq!(next_indent(0, "<h3>User</h3>"), 0);
    assert_eq!(next_indent(0, "<br></br>"), 0);
    // Pure closing lines dedent
    assert_eq!(next_indent(3, "</tr>"), 2);
    assert_eq!(next_indent(0, "</table>"), 0);
    // Too short to inspect
    assert_eq!(next_indent(2, "x"), 2);
    assert_eq!(next_indent(2, ""), 2);
}

#[test]
fn test_badge_precedence_identity_wins() {
    let mut id = column("Id");
    id.identity = true;
    id.primary_key = true;
    let t = table("User", vec![id]);

    let (markup, _) = render_tables(&[t], &GenOptions::default());
    assert!(markup.contains(">AI</td>"));
    assert!(!markup.contains(">PK</td>"));
}

#[test]
fn test_badge_primary_key() {
    let mut id = column("Id");
    id.primary_key = true;
    let t = table("User", vec![id]);

    let (markup, _) = render_tables(&[t], &GenOptions::default());
    assert!(markup.contains(">PK</td>"));
}

#[test]
fn test_badge_unique_index_case_insensitive() {
    let code = column("Code");
    let mut t = table("Device", vec![code]);
    t.indexes.push(Index {
        columns: vec!["CODE".into()],
        unique: true,
    });

    let (markup, _) = render_tables(&[t], &GenOptions::default());
    assert!(markup.contains(">UQ</td>"));
}

#[test]
fn test_badge_multi_column_unique_index_ignored() {
    let code = column("Code");
    let mut t = table("Device", vec![code]);
    t.indexes.push(Index {
        columns: vec!["Code".into(), "Region".into()],
        unique: true,
    });

    let (markup, _) = render_tables(&[t], &GenOptions::default());
    assert!(!markup.contains(">UQ</td>"));
}

#[test]
fn test_length_cell() {
    let mut name = column("Name");
    name.length = 5;
    let zero = column("Flags");
    let t = table("User", vec![name, zero]);

    let (markup, _) = render_tables(&[t], &GenOptions::default());
    assert!(markup.contains("<td>5</td>"));
    // The zero-length column renders an empty length cell
    let rows: Vec<&str> = markup.split("<tr>").collect();
    assert!(rows.last().unwrap().contains("<td></td>"));
}

#[test]
fn test_precision_cell() {
    let mut price = column("Price");
    price.precision = 10;
    price.scale = 2;
    let t = table("Order", vec![price]);

    let (markup, _) = render_tables(&[t], &GenOptions::default());
    assert!(markup.contains("<td>(10, 2)</td>"));

    let plain = column("Plain");
    let t = table("Order", vec![plain]);
    let (markup, _) = render_tables(&[t], &GenOptions::default());
    assert!(!markup.contains('('));
}

#[test]
fn test_nullable_convention() {
    let required = column("Id");
    let mut optional = column("Note");
    optional.nullable = true;
    let t = table("User", vec![required, optional]);

    let (markup, _) = render_tables(&[t], &GenOptions::default());
    // NOT nullable renders "N"; nullable renders an empty cell
    assert!(markup.contains("<td>N</td>"));
}

#[test]
fn test_excluded_column_never_renders() {
    let id = column("Id");
    let secret = column("Secret");
    let t = table("User", vec![id, secret]);

    let mut options = GenOptions::default();
    options.exclude("secret");

    let (markup, _) = render_tables(&[t], &options);
    assert!(markup.contains("<td>Id</td>"));
    assert!(!markup.contains("Secret"));
}

#[test]
fn test_excluded_column_by_physical_name() {
    let mut col = column("TraceId");
    col.column_name = "trace_id".into();
    let t = table("User", vec![col]);

    let mut options = GenOptions::default();
    options.exclude("trace_id");

    let (markup, _) = render_tables(&[t], &options);
    assert!(!markup.contains("trace_id"));
}

#[test]
fn test_batch_skips_excluded_tables_in_order() {
    let tables = vec![
        table("Alpha", vec![column("Id")]),
        table("Beta", vec![column("Id")]),
        table("Gamma", vec![column("Id")]),
    ];
    let mut options = GenOptions::default();
    options.exclude("Beta");

    let (markup, count) = render_tables(&tables, &options);
    assert_eq!(count, 2);
    let alpha = markup.find("<h3>Alpha</h3>").unwrap();
    let gamma = markup.find("<h3>Gamma</h3>").unwrap();
    assert!(alpha < gamma);
    assert!(!markup.contains("Beta"));
}

#[test]
fn test_rendering_is_deterministic() {
    let mut code = column("Code");
    code.raw_type = Some("NVARCHAR(50)".into());
    code.length = 50;
    let mut t = table("Device", vec![column("Id"), code]);
    t.display_name = "Devices".into();
    t.indexes.push(Index {
        columns: vec!["Code".into()],
        unique: true,
    });

    let options = GenOptions::default();
    let (first, _) = render_tables(std::slice::from_ref(&t), &options);
    let (second, _) = render_tables(std::slice::from_ref(&t), &options);
    assert_eq!(first, second);
}

#[test]
fn test_title_falls_back_to_physical_name() {
    let t = table("Device", vec![column("Id")]);
    let (markup, _) = render_tables(&[t], &GenOptions::default());
    assert!(markup.contains("<h3>Device</h3>"));

    let mut named = table("Device", vec![column("Id")]);
    named.display_name = "Devices".into();
    let (markup, _) = render_tables(&[named], &GenOptions::default());
    assert!(markup.contains("<h3>Devices（Device）</h3>"));
}

#[test]
fn test_module_stem() {
    assert_eq!(super::project::module_stem("Gps"), "gps");
    assert_eq!(super::project::module_stem("TirePressure"), "tire_pressure");
    assert_eq!(super::project::module_stem(""), "model");
}

#[test]
fn test_options_exclusion_is_case_insensitive() {
    let mut options = GenOptions::default();
    options.exclude("Log");
    assert!(options.is_excluded("log"));
    assert!(options.is_excluded("LOG"));
    assert!(!options.is_excluded("logs"));
    assert!(!options.is_excluded(""));
}
