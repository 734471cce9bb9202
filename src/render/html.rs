use crate::render::{HEADER, Node, OutputContainer, Table};

/// Render a self-contained HTML page holding the container.
///
/// Placeholders are substituted with `replace` rather than `format!()` so the
/// CSS braces in the template need no escaping.
pub fn render_page(out: &OutputContainer) -> String {
    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>chainfetch</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 16px; }
  table { border-collapse: collapse; margin-top: 8px; }
  th, td { border: 1px solid #ddd; padding: 6px 8px; text-align: left; font-size: 14px; }
  th { background: #fafafa; }
  p.message { color: #a00; }
</style>
</head>
<body>
<div id="__CONTAINER_ID__">
__CONTENT__</div>
</body>
</html>
"#;

    TEMPLATE
        .replace("__CONTAINER_ID__", &escape_html(out.id()))
        .replace("__CONTENT__", &render_container(out))
}

/// Inner HTML of the container: one element per node, in order.
pub fn render_container(out: &OutputContainer) -> String {
    let mut html = String::new();
    for node in out.nodes() {
        match node {
            Node::Table(table) => push_table(&mut html, table),
            Node::Text(text) => {
                html.push_str("<p class=\"message\">");
                html.push_str(&escape_html(text));
                html.push_str("</p>\n");
            }
        }
    }
    html
}

fn push_table(html: &mut String, table: &Table) {
    html.push_str("<table>\n  <tr>");
    for title in HEADER {
        html.push_str("<th>");
        html.push_str(title);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n");

    for row in &table.rows {
        html.push_str("  <tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::render::render_table;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_has_header_then_rows() {
        let mut out = OutputContainer::default();
        render_table(&mut out, &[Record::new("X", 1, "Y")]);

        assert_eq!(
            render_container(&out),
            "<table>\n  <tr><th>Name</th><th>ID</th><th>Address</th></tr>\n  <tr><td>X</td><td>1</td><td>Y</td></tr>\n</table>\n"
        );
    }

    #[test]
    fn cell_text_is_escaped() {
        let mut out = OutputContainer::default();
        render_table(&mut out, &[Record::new("<b>", "a&b", "\"q\"")]);

        let html = render_container(&out);
        assert!(html.contains("<td>&lt;b&gt;</td><td>a&amp;b</td><td>&quot;q&quot;</td>"));
    }

    #[test]
    fn page_wraps_container_by_id() {
        let mut out = OutputContainer::new("results");
        out.show_error("Error: <404>");

        let page = render_page(&out);
        assert!(page.contains("<div id=\"results\">"));
        assert!(page.contains("<p class=\"message\">Error: &lt;404&gt;</p>"));
        assert!(!page.contains("<table>"));
    }

    #[test]
    fn empty_container_renders_nothing() {
        let out = OutputContainer::default();
        assert_eq!(render_container(&out), "");
    }
}
