//! FAQ accordion built on `<details>`, so it works without client script.

use std::fmt::Write;

use super::{heading, open_section};
use crate::render::{Component, Escaped, Markup, RenderContext};

pub const DEFAULT_TITLE: &str = "Frequently asked questions";
pub const EMPTY_FAQ_COPY: &str = "No questions have been added yet.";
pub const DEFAULT_ANSWER: &str = "Please contact our support team for more information.";

pub struct FaqAccordion;

impl Component for FaqAccordion {
    fn variants(&self) -> &'static [&'static str] {
        &["Default", "FirstOpen"]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        let fields = ctx.fields();

        open_section(out, ctx, "faq-accordion");
        heading(out, ctx, "h2", "faq-accordion__title", fields.text("Title").unwrap_or(DEFAULT_TITLE));

        let questions: Vec<_> = fields
            .items("Questions")
            .iter()
            .filter_map(|item| item.fields.text("Question").map(|q| (q, item)))
            .collect();
        if questions.is_empty() {
            let _ = write!(out, "<p class=\"faq-accordion__empty\">{}</p></section>", Escaped(EMPTY_FAQ_COPY));
            return;
        }

        for (index, (question, item)) in questions.into_iter().enumerate() {
            let open = if ctx.variant == "FirstOpen" && index == 0 { " open" } else { "" };
            let _ = write!(
                out,
                "<details class=\"faq-accordion__item\"{open}><summary class=\"faq-accordion__question\">{}</summary><div class=\"faq-accordion__answer {}\">",
                Escaped(question),
                ctx.theme.styles().body
            );
            match item.fields.content("Answer") {
                Some(answer) => out.content(answer),
                None => out.text(DEFAULT_ANSWER),
            };
            out.raw("</div></details>");
        }
        out.raw("</section>");
    }
}
