use crate::schema::{Column, Index, Table};

use super::options::GenOptions;

/// One indentation step in rendered markup.
const INDENT: &str = "    ";

/// Renderer capability driven by [`render_table`]: open a table, emit one
/// row per column, close the table.
pub trait RowRenderer {
    fn open(&mut self, table: &Table);
    fn render_row(&mut self, column: &Column);
    fn close(&mut self);
}

/// Compute the indentation depth for lines following `line`.
///
/// This is the original bracket heuristic, isolated as a pure function: a
/// line opening a container (`<x...`, no embedded close marker) increases
/// depth; a line that is purely closing (`</x...`) decreases it; a same-line
/// open/close leaves it unchanged. Only the first two characters and the
/// presence of an embedded `</` are inspected — it is a formatting
/// convenience, not a parser, and a value string that itself starts with the
/// close-marker characters can misindent the output.
pub fn next_indent(depth: usize, line: &str) -> usize {
    if is_closing(line) {
        depth.saturating_sub(1)
    } else if is_opening(line) {
        depth + 1
    } else {
        depth
    }
}

fn is_closing(line: &str) -> bool {
    line.len() > 2 && line.starts_with("</")
}

fn is_opening(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() > 2 && bytes[0] == b'<' && bytes[1] != b'/' && !line.contains("</")
}

/// Renders tables as HTML reference markup into an accumulating buffer.
///
/// Indentation depth is carried as explicit state and updated per line by
/// [`next_indent`]; a closing line is written one step shallower than the
/// current depth. Rows after the first are preceded by a blank line.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    buf: String,
    depth: usize,
    rows: usize,
    indexes: Vec<Index>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the renderer and return the accumulated markup.
    pub fn into_markup(self) -> String {
        self.buf
    }

    fn write_line(&mut self, line: &str) {
        let depth = if is_closing(line) {
            self.depth.saturating_sub(1)
        } else {
            self.depth
        };
        for _ in 0..depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');
        self.depth = next_indent(self.depth, line);
    }

    fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    /// Badge for the key/identity column, first matching rule only:
    /// identity → `AI`, primary key → `PK`, single-column unique index → `UQ`.
    fn badge_cell(&self, column: &Column) -> &'static str {
        if column.identity {
            "<td title=\"auto increment\">AI</td>"
        } else if column.primary_key {
            "<td title=\"primary key\">PK</td>"
        } else if self.has_unique_index(column) {
            "<td title=\"unique index\">UQ</td>"
        } else {
            "<td></td>"
        }
    }

    fn has_unique_index(&self, column: &Column) -> bool {
        self.indexes.iter().any(|index| {
            index.unique
                && index.columns.len() == 1
                && (index.columns[0].eq_ignore_ascii_case(&column.name)
                    || index.columns[0].eq_ignore_ascii_case(column.physical_name()))
        })
    }
}

impl RowRenderer for HtmlRenderer {
    fn open(&mut self, table: &Table) {
        if table.display_name.is_empty() {
            self.write_line(&format!("<h3>{}</h3>", table.physical_name()));
        } else {
            self.write_line(&format!(
                "<h3>{}（{}）</h3>",
                table.display_name,
                table.physical_name()
            ));
        }

        self.write_line("<table>");
        self.write_line("<thead>");
        self.write_line("<tr>");
        self.write_line("<th>Name</th>");
        self.write_line("<th>Display Name</th>");
        self.write_line("<th>Type</th>");
        self.write_line("<th>Length</th>");
        self.write_line("<th>Precision</th>");
        self.write_line("<th>Key</th>");
        self.write_line("<th>Nullable</th>");
        self.write_line("<th>Remark</th>");
        self.write_line("</tr>");
        self.write_line("</thead>");
        self.write_line("<tbody>");

        self.rows = 0;
        self.indexes = table.indexes.clone();
    }

    fn render_row(&mut self, column: &Column) {
        if self.rows > 0 {
            self.blank_line();
        }

        self.write_line("<tr>");
        self.write_line(&format!("<td>{}</td>", column.physical_name()));
        self.write_line(&format!("<td>{}</td>", column.display_name));
        self.write_line(&format!("<td>{}</td>", column.type_name()));

        if column.length > 0 {
            self.write_line(&format!("<td>{}</td>", column.length));
        } else {
            self.write_line("<td></td>");
        }

        if column.precision > 0 || column.scale > 0 {
            self.write_line(&format!("<td>({}, {})</td>", column.precision, column.scale));
        } else {
            self.write_line("<td></td>");
        }

        let badge = self.badge_cell(column);
        self.write_line(badge);

        // Absence of "N" means nullable; terse by convention
        self.write_line(&format!(
            "<td>{}</td>",
            if column.nullable { "" } else { "N" }
        ));
        self.write_line(&format!("<td>{}</td>", column.remark()));
        self.write_line("</tr>");

        self.rows += 1;
    }

    fn close(&mut self) {
        self.write_line("</tbody>");
        self.write_line("</table>");
        self.write_line("<br></br>");
    }
}

/// Drive a renderer through one table: open, one row per column that passes
/// the options' valid-column predicate, close.
pub fn render_table<R: RowRenderer>(renderer: &mut R, table: &Table, options: &GenOptions) {
    renderer.open(table);
    for column in table.columns.iter().filter(|c| options.is_valid_column(c)) {
        renderer.render_row(column);
    }
    renderer.close();
}

/// Batch mode: render all non-excluded tables into one shared buffer in
/// input order. Returns the markup and the count of tables actually rendered.
pub fn render_tables(tables: &[Table], options: &GenOptions) -> (String, u32) {
    let mut renderer = HtmlRenderer::new();
    let mut count = 0;
    for table in tables {
        if !options.is_valid_table(table) {
            continue;
        }
        render_table(&mut renderer, table, options);
        count += 1;
    }
    (renderer.into_markup(), count)
}
