//! Hero banner: headline, subtitle, call to action, and optional image.

use layout::LinkValue;

use super::{heading, image, link, open_section};
use crate::render::{Component, Markup, RenderContext};

pub const DEFAULT_TITLE: &str = "Trade CFDs on shares, indices, forex and commodities";
pub const DEFAULT_SUBTITLE: &str = "Join millions of traders on an award-winning platform.";
pub const DEFAULT_CTA_HREF: &str = "/trading";
pub const DEFAULT_CTA_TEXT: &str = "Start Trading";

pub struct HeroBanner;

impl Component for HeroBanner {
    fn variants(&self) -> &'static [&'static str] {
        &["Default", "Centered", "ImageLeft"]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        let fields = ctx.fields();
        let class = match ctx.variant {
            "Centered" => "hero-banner hero-banner--centered",
            "ImageLeft" => "hero-banner hero-banner--image-left",
            _ => "hero-banner",
        };

        open_section(out, ctx, class);
        let picture = fields.image("Image");
        if ctx.variant == "ImageLeft" {
            if let Some(value) = picture {
                image(out, value, "hero-banner__image");
            }
        }

        out.raw("<div class=\"hero-banner__content\">");
        heading(out, ctx, "h1", "hero-banner__title", fields.text("Title").unwrap_or(DEFAULT_TITLE));

        out.raw("<div class=\"hero-banner__subtitle ")
            .raw(ctx.theme.styles().body)
            .raw("\">");
        match fields.content("Subtitle") {
            Some(subtitle) => out.content(subtitle),
            None => out.text(DEFAULT_SUBTITLE),
        };
        out.raw("</div>");

        let fallback_cta;
        let cta = match fields.link("CtaLink") {
            Some(value) => value,
            None => {
                fallback_cta = LinkValue {
                    href: DEFAULT_CTA_HREF.to_owned(),
                    text: DEFAULT_CTA_TEXT.to_owned(),
                    target: None,
                };
                &fallback_cta
            }
        };
        let cta_class = format!("hero-banner__cta {}", ctx.theme.styles().accent);
        link(out, cta, &cta_class);
        out.raw("</div>");

        if ctx.variant != "ImageLeft" {
            if let Some(value) = picture {
                image(out, value, "hero-banner__image");
            }
        }
        out.raw("</section>");
    }
}
