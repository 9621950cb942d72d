//! Site footer: link columns, regulatory risk warning, copyright.

use std::fmt::Write;

use super::link;
use crate::render::{Component, Escaped, Markup, RenderContext};

pub const DEFAULT_COPYRIGHT: &str = "© All rights reserved.";
pub const DEFAULT_RISK_WARNING: &str = "<p>CFDs are complex instruments and come with a high risk of losing money rapidly due to leverage. You should consider whether you understand how CFDs work and whether you can afford to take the high risk of losing your money.</p>";

pub struct Footer;

impl Component for Footer {
    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        let fields = ctx.fields();
        let styles = ctx.theme.styles();

        let _ = write!(out, "<footer class=\"component footer {}\">", styles.section);

        let links: Vec<_> = fields
            .items("Links")
            .iter()
            .filter_map(|item| item.fields.link("Link"))
            .collect();
        if !links.is_empty() {
            out.raw("<ul class=\"footer__links\">");
            for value in links {
                out.raw("<li>");
                link(out, value, "footer__link");
                out.raw("</li>");
            }
            out.raw("</ul>");
        }

        let _ = write!(out, "<div class=\"footer__risk-warning {}\">", styles.body);
        match fields.content("RiskWarning") {
            Some(warning) => out.content(warning),
            None => out.raw(DEFAULT_RISK_WARNING),
        };
        out.raw("</div>");
        let _ = write!(
            out,
            "<p class=\"footer__copyright\">{}</p></footer>",
            Escaped(fields.text("Copyright").unwrap_or(DEFAULT_COPYRIGHT))
        );
    }
}

#[cfg(test)]
mod tests {
    use layout::{Field, Fields, Item, LayoutNode, LinkValue};

    use super::*;
    use crate::components::test_helpers::render;

    fn link_item(href: &str, text: &str) -> Item {
        Item {
            fields: Fields::new().with(
                "Link",
                Field::Link(LinkValue { href: href.into(), text: text.into(), target: None }),
            ),
            ..Item::default()
        }
    }

    #[test]
    fn empty_footer_renders_defaults() {
        let html = render(LayoutNode::named("Footer"));
        assert!(html.contains(DEFAULT_RISK_WARNING));
        assert!(html.contains("<p class=\"footer__copyright\">© All rights reserved.</p></footer>"));
        assert!(!html.contains("footer__links"));
    }

    #[test]
    fn renders_authored_fields() {
        let node = LayoutNode::named("Footer").with_fields(
            Fields::new()
                .with("Copyright", Field::Text("© 2026 Plus & Co".into()))
                .with("RiskWarning", Field::RichText("<p>Custom warning</p>".into()))
                .with(
                    "Links",
                    Field::Items(vec![link_item("/privacy", "Privacy"), link_item("/terms", "Terms")]),
                ),
        );
        let html = render(node);
        assert!(html.contains("© 2026 Plus &amp; Co"));
        assert!(html.contains("<p>Custom warning</p>"));
        assert!(!html.contains(DEFAULT_RISK_WARNING));
        let privacy = html.find("Privacy").expect("privacy");
        let terms = html.find("Terms").expect("terms");
        assert!(privacy < terms);
    }

    #[test]
    fn plain_risk_warning_is_escaped() {
        let node = LayoutNode::named("Footer")
            .with_fields(Fields::new().with("RiskWarning", Field::Text("1:30 & <b>x</b>".into())));
        let html = render(node);
        assert!(html.contains("<div class=\"footer__risk-warning text-slate-600\">1:30 &amp; &lt;b&gt;x&lt;/b&gt;</div>"));
    }

    #[test]
    fn dark_theme_applies_section_class() {
        let html = render(LayoutNode::named("Footer").with_param("theme", "dark"));
        assert!(html.starts_with("<footer class=\"component footer theme-dark bg-slate-900\">"));
    }
}
