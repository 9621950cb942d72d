//! Bullet list of selling points.

use std::fmt::Write;

use super::{heading, open_section};
use crate::render::{Component, Escaped, Markup, RenderContext};

pub const DEFAULT_TITLE: &str = "Why trade with us";
pub const DEFAULT_BULLETS: [&str; 3] = [
    "Regulated in multiple jurisdictions",
    "Commission-free trading",
    "Negative balance protection",
];

pub struct BulletList;

impl Component for BulletList {
    fn variants(&self) -> &'static [&'static str] {
        &["Default", "Checkmarks", "TwoColumn"]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        let fields = ctx.fields();
        let list_class = match ctx.variant {
            "Checkmarks" => "bullet-list__items bullet-list__items--check",
            "TwoColumn" => "bullet-list__items bullet-list__items--two-col",
            _ => "bullet-list__items",
        };

        open_section(out, ctx, "bullet-list");
        heading(out, ctx, "h2", "bullet-list__title", fields.text("Title").unwrap_or(DEFAULT_TITLE));

        let authored: Vec<&str> = fields
            .items("Bullets")
            .iter()
            .filter_map(|item| item.fields.text("Text"))
            .collect();
        let bullets: &[&str] = if authored.is_empty() { &DEFAULT_BULLETS } else { &authored };

        let _ = write!(out, "<ul class=\"{list_class} {}\">", ctx.theme.styles().body);
        for bullet in bullets {
            let _ = write!(out, "<li>{}</li>", Escaped(bullet));
        }
        out.raw("</ul></section>");
    }
}
