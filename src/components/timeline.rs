//! Company history timeline.

use std::fmt::Write;

use super::{heading, open_section};
use crate::render::{Component, Escaped, Markup, RenderContext};

pub const DEFAULT_TITLE: &str = "Our journey";
pub const EMPTY_TIMELINE_COPY: &str = "Our story is still being written.";

pub struct Timeline;

impl Component for Timeline {
    fn variants(&self) -> &'static [&'static str] {
        &["Default", "Horizontal"]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        let fields = ctx.fields();
        let list_class = if ctx.variant == "Horizontal" { "timeline__list timeline__list--horizontal" } else { "timeline__list" };

        open_section(out, ctx, "timeline");
        heading(out, ctx, "h2", "timeline__title", fields.text("Title").unwrap_or(DEFAULT_TITLE));

        let milestones = fields.items("Milestones");
        if milestones.is_empty() {
            let _ = write!(out, "<p class=\"timeline__empty\">{}</p></section>", Escaped(EMPTY_TIMELINE_COPY));
            return;
        }

        let _ = write!(out, "<ol class=\"{list_class}\">");
        for milestone in milestones {
            let milestone_fields = &milestone.fields;
            out.raw("<li class=\"timeline__item\">");
            if let Some(year) = milestone_fields.text("Year") {
                let _ = write!(out, "<time class=\"timeline__year\">{}</time>", Escaped(year));
            }
            let title = milestone_fields.text("Heading").unwrap_or(&milestone.name);
            let _ = write!(out, "<h3 class=\"timeline__heading\">{}</h3>", Escaped(title));
            if let Some(description) = milestone_fields.content("Description") {
                let _ = write!(out, "<div class=\"timeline__description {}\">", ctx.theme.styles().body);
                out.content(description).raw("</div>");
            }
            out.raw("</li>");
        }
        out.raw("</ol></section>");
    }
}

#[cfg(test)]
mod tests {
    use layout::{Field, Fields, Item, LayoutNode};

    use super::*;
    use crate::components::test_helpers::render;

    fn milestone(year: &str, heading: &str, description: &str) -> Item {
        Item {
            name: format!("m-{year}"),
            fields: Fields::new()
                .with("Year", Field::Text(year.into()))
                .with("Heading", Field::Text(heading.into()))
                .with("Description", Field::RichText(description.into())),
            ..Item::default()
        }
    }

    #[test]
    fn renders_milestones_in_order() {
        let node = LayoutNode::named("Timeline").with_fields(Fields::new().with(
            "Milestones",
            Field::Items(vec![
                milestone("2008", "Founded", "<p>First platform launch</p>"),
                milestone("2010", "Mobile", "<p>Apps released</p>"),
            ]),
        ));
        let html = render(node);
        let first = html.find("2008").expect("2008");
        let second = html.find("2010").expect("2010");
        assert!(first < second);
        assert!(html.contains("<h3 class=\"timeline__heading\">Founded</h3>"));
        assert!(html.contains("<p>First platform launch</p></div>"));
    }

    #[test]
    fn missing_milestones_render_empty_copy() {
        let html = render(LayoutNode::named("Timeline"));
        assert!(html.contains(DEFAULT_TITLE));
        assert!(html.contains(EMPTY_TIMELINE_COPY));
    }

    #[test]
    fn milestone_without_heading_uses_item_name() {
        let item = Item { name: "Expansion".into(), ..Item::default() };
        let node = LayoutNode::named("Timeline").with_fields(Fields::new().with("Milestones", Field::Items(vec![item])));
        let html = render(node);
        assert!(html.contains(">Expansion</h3>"));
        assert!(!html.contains("<time"));
    }

    #[test]
    fn plain_description_is_escaped() {
        let item = Item {
            name: "m".into(),
            fields: Fields::new().with("Description", Field::Text("1:30 & <b>x</b>".into())),
            ..Item::default()
        };
        let node = LayoutNode::named("Timeline").with_fields(Fields::new().with("Milestones", Field::Items(vec![item])));
        let html = render(node);
        assert!(html.contains("1:30 &amp; &lt;b&gt;x&lt;/b&gt;</div>"));
    }

    #[test]
    fn horizontal_variant_sets_list_class() {
        let node = LayoutNode::named("Timeline")
            .with_param("FieldNames", "Horizontal")
            .with_fields(Fields::new().with("Milestones", Field::Items(vec![milestone("2020", "X", "<p>y</p>")])));
        assert!(render(node).contains("timeline__list--horizontal"));
    }
}
