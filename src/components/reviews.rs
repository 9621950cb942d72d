//! Customer reviews with star ratings.

use std::fmt::Write;

use super::{heading, open_section};
use crate::render::{Component, Escaped, Markup, RenderContext};

pub const DEFAULT_TITLE: &str = "What our customers say";
pub const EMPTY_REVIEWS_COPY: &str = "No reviews yet.";
pub const ANONYMOUS_AUTHOR: &str = "Verified customer";
pub const MAX_RATING: u8 = 5;

pub struct Reviews;

impl Component for Reviews {
    fn variants(&self) -> &'static [&'static str] {
        &["Default", "Carousel"]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        let fields = ctx.fields();
        let list_class = if ctx.variant == "Carousel" { "reviews__list reviews__list--carousel" } else { "reviews__list" };

        open_section(out, ctx, "reviews");
        heading(out, ctx, "h2", "reviews__title", fields.text("Title").unwrap_or(DEFAULT_TITLE));

        let reviews: Vec<_> = fields
            .items("Reviews")
            .iter()
            .filter(|item| item.fields.text("Quote").is_some())
            .collect();
        if reviews.is_empty() {
            let _ = write!(out, "<p class=\"reviews__empty\">{}</p></section>", Escaped(EMPTY_REVIEWS_COPY));
            return;
        }

        let _ = write!(out, "<ul class=\"{list_class}\">");
        for review in reviews {
            let quote = review.fields.text("Quote").unwrap_or_default();
            let author = review.fields.text("Author").unwrap_or(ANONYMOUS_AUTHOR);
            let _ = write!(
                out,
                "<li class=\"reviews__item\"><blockquote class=\"{}\">{}</blockquote>",
                ctx.theme.styles().body,
                Escaped(quote)
            );
            if let Some(rating) = review.fields.text("Rating").and_then(parse_rating) {
                let _ = write!(
                    out,
                    "<span class=\"reviews__rating\" aria-label=\"{rating} out of {MAX_RATING}\">{}</span>",
                    stars(rating)
                );
            }
            let _ = write!(out, "<cite>{}</cite></li>", Escaped(author));
        }
        out.raw("</ul></section>");
    }
}

/// Parse a rating, rounding to the nearest whole star and clamping to `0..=5`.
fn parse_rating(raw: &str) -> Option<u8> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = value.round().clamp(0.0, f64::from(MAX_RATING)) as u8;
    Some(rounded)
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
