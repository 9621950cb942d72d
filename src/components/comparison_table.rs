//! Feature comparison table: our offering against a competitor column.

use std::fmt::Write;

use super::{heading, open_section};
use crate::render::{Component, Escaped, Markup, RenderContext};

pub const DEFAULT_TITLE: &str = "How we compare";
pub const DEFAULT_FEATURE_LABEL: &str = "Feature";
pub const DEFAULT_OURS_LABEL: &str = "Us";
pub const DEFAULT_OTHERS_LABEL: &str = "Others";
pub const EMPTY_ROWS_COPY: &str = "Comparison data coming soon.";
/// Shown in a cell whose value is missing.
pub const EMPTY_CELL: &str = "—";

pub struct ComparisonTable;

impl Component for ComparisonTable {
    fn variants(&self) -> &'static [&'static str] {
        &["Default", "Compact"]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        let fields = ctx.fields();
        let table_class = if ctx.variant == "Compact" {
            "comparison-table__table comparison-table__table--compact"
        } else {
            "comparison-table__table"
        };

        open_section(out, ctx, "comparison-table");
        heading(out, ctx, "h2", "comparison-table__title", fields.text("Title").unwrap_or(DEFAULT_TITLE));

        let rows = fields.items("Rows");
        if rows.is_empty() {
            let _ = write!(
                out,
                "<p class=\"comparison-table__empty {}\">{}</p></section>",
                ctx.theme.styles().body,
                Escaped(EMPTY_ROWS_COPY)
            );
            return;
        }

        let _ = write!(
            out,
            "<table class=\"{table_class}\"><thead><tr><th scope=\"col\">{}</th><th scope=\"col\">{}</th><th scope=\"col\">{}</th></tr></thead><tbody>",
            Escaped(fields.text("FeatureLabel").unwrap_or(DEFAULT_FEATURE_LABEL)),
            Escaped(fields.text("OursLabel").unwrap_or(DEFAULT_OURS_LABEL)),
            Escaped(fields.text("OthersLabel").unwrap_or(DEFAULT_OTHERS_LABEL)),
        );
        for row in rows {
            let feature = row
                .fields
                .text("Feature")
                .or(row.display_name.as_deref())
                .unwrap_or(&row.name);
            let _ = write!(
                out,
                "<tr><th scope=\"row\">{}</th><td>{}</td><td>{}</td></tr>",
                Escaped(feature),
                Escaped(row.fields.text("Ours").unwrap_or(EMPTY_CELL)),
                Escaped(row.fields.text("Others").unwrap_or(EMPTY_CELL)),
            );
        }
        out.raw("</tbody></table></section>");
    }
}

#[cfg(test)]
mod tests {
    use layout::{Field, Fields, Item, LayoutNode};

    use super::*;
    use crate::components::test_helpers::render;

    fn row(feature: &str, ours: &str, others: Option<&str>) -> Item {
        let mut fields = Fields::new()
            .with("Feature", Field::Text(feature.into()))
            .with("Ours", Field::Text(ours.into()));
        if let Some(others) = others {
            fields = fields.with("Others", Field::Text(others.into()));
        }
        Item { fields, ..Item::default() }
    }

    #[test]
    fn renders_rows_with_headers() {
        let node = LayoutNode::named("ComparisonTable").with_fields(
            Fields::new()
                .with("OursLabel", Field::Text("Plus".into()))
                .with("Rows", Field::Items(vec![row("Commission", "$0", Some("$5")), row("Min deposit", "$100", None)])),
        );
        let html = render(node);
        assert!(html.contains("<th scope=\"col\">Plus</th>"));
        assert!(html.contains(&format!("<th scope=\"col\">{DEFAULT_OTHERS_LABEL}</th>")));
        assert!(html.contains("<tr><th scope=\"row\">Commission</th><td>$0</td><td>$5</td></tr>"));
        assert!(html.contains(&format!("<td>$100</td><td>{EMPTY_CELL}</td>")));
    }

    #[test]
    fn missing_rows_render_empty_copy() {
        let html = render(LayoutNode::named("ComparisonTable"));
        assert!(html.contains(DEFAULT_TITLE));
        assert!(html.contains(EMPTY_ROWS_COPY));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn row_without_feature_uses_item_name() {
        let item = Item { name: "Leverage".into(), ..Item::default() };
        let node = LayoutNode::named("ComparisonTable").with_fields(Fields::new().with("Rows", Field::Items(vec![item])));
        assert!(render(node).contains("<th scope=\"row\">Leverage</th>"));
    }

    #[test]
    fn compact_variant_sets_table_class() {
        let node = LayoutNode::named("ComparisonTable")
            .with_param("FieldNames", "Compact")
            .with_fields(Fields::new().with("Rows", Field::Items(vec![row("Fees", "Low", None)])));
        assert!(render(node).contains("comparison-table__table--compact"));
    }
}
