//! Free-form rich text block.

use super::open_section;
use crate::render::{Component, Markup, RenderContext};

/// Complete output of a rich text block whose `Text` field is absent or empty.
pub const EMPTY_MARKUP: &str = "<div class=\"component rich-text\"><div class=\"component-content\"><span class=\"is-empty-hint\">Rich text</span></div></div>";

pub struct RichText;

impl Component for RichText {
    fn variants(&self) -> &'static [&'static str] {
        &["Default", "Section"]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        let Some(body) = ctx.fields().content("Text") else {
            out.raw(EMPTY_MARKUP);
            return;
        };

        if ctx.variant == "Section" {
            open_section(out, ctx, "rich-text");
            out.raw("<div class=\"component-content\">").content(body).raw("</div></section>");
        } else {
            out.raw("<div class=\"component rich-text\"><div class=\"component-content\">")
                .content(body)
                .raw("</div></div>");
        }
    }
}

#[cfg(test)]
mod tests {
    use layout::{Field, Fields, LayoutNode};

    use super::*;
    use crate::components::test_helpers::render;

    #[test]
    fn renders_markup_unescaped() {
        let node = LayoutNode::named("RichText")
            .with_fields(Fields::new().with("Text", Field::RichText("<h2>Markets</h2><p>Trade 2,000+ CFDs</p>".into())));
        assert_eq!(
            render(node),
            "<div class=\"component rich-text\"><div class=\"component-content\"><h2>Markets</h2><p>Trade 2,000+ CFDs</p></div></div>"
        );
    }

    #[test]
    fn no_fields_render_exact_fallback() {
        assert_eq!(render(LayoutNode::named("RichText")), EMPTY_MARKUP);
    }

    #[test]
    fn empty_field_renders_exact_fallback() {
        let node = LayoutNode::named("RichText").with_fields(Fields::new().with("Text", Field::Text(String::new())));
        assert_eq!(render(node), EMPTY_MARKUP);
    }

    #[test]
    fn plain_text_is_escaped() {
        let node = LayoutNode::named("RichText").with_fields(Fields::new().with("Text", Field::Text("1:30 & <b>x</b>".into())));
        assert_eq!(
            render(node),
            "<div class=\"component rich-text\"><div class=\"component-content\">1:30 &amp; &lt;b&gt;x&lt;/b&gt;</div></div>"
        );
    }

    #[test]
    fn section_variant_wraps_in_themed_section() {
        let node = LayoutNode::named("RichText")
            .with_param("FieldNames", "Section")
            .with_param("theme", "Brand")
            .with_fields(Fields::new().with("Text", Field::RichText("<p>x</p>".into())));
        let html = render(node);
        assert!(html.starts_with("<section class=\"component rich-text theme-brand"));
        assert!(html.ends_with("<p>x</p></div></section>"));
    }
}
