//! Built-in presentational components.
//!
//! ARCHITECTURE
//! ============
//! Every CMS rendering the site knows about is a [`ComponentKind`]. The
//! closed enum is the source of truth for the registry built at startup, the
//! editing config endpoint, and the layout validator. Each component owns its
//! fallback copy for absent or empty fields.

pub mod bullet_list;
pub mod comparison_table;
pub mod container;
pub mod faq_accordion;
pub mod footer;
pub mod header;
pub mod hero_banner;
pub mod reviews;
pub mod rich_text;
pub mod timeline;

use std::fmt::Write;
use std::sync::Arc;

use layout::{ImageValue, LinkValue};

use crate::render::{Component, Escaped, Markup, Registry, RenderContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Container,
    Header,
    Footer,
    HeroBanner,
    BulletList,
    ComparisonTable,
    Reviews,
    Timeline,
    FaqAccordion,
    RichText,
}

impl ComponentKind {
    pub const ALL: [Self; 10] = [
        Self::Container,
        Self::Header,
        Self::Footer,
        Self::HeroBanner,
        Self::BulletList,
        Self::ComparisonTable,
        Self::Reviews,
        Self::Timeline,
        Self::FaqAccordion,
        Self::RichText,
    ];

    /// Rendering name as authored in the CMS.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Container => "Container",
            Self::Header => "Header",
            Self::Footer => "Footer",
            Self::HeroBanner => "HeroBanner",
            Self::BulletList => "BulletList",
            Self::ComparisonTable => "ComparisonTable",
            Self::Reviews => "Reviews",
            Self::Timeline => "Timeline",
            Self::FaqAccordion => "FaqAccordion",
            Self::RichText => "RichText",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    fn build(self) -> Arc<dyn Component> {
        match self {
            Self::Container => Arc::new(container::Container),
            Self::Header => Arc::new(header::Header),
            Self::Footer => Arc::new(footer::Footer),
            Self::HeroBanner => Arc::new(hero_banner::HeroBanner),
            Self::BulletList => Arc::new(bullet_list::BulletList),
            Self::ComparisonTable => Arc::new(comparison_table::ComparisonTable),
            Self::Reviews => Arc::new(reviews::Reviews),
            Self::Timeline => Arc::new(timeline::Timeline),
            Self::FaqAccordion => Arc::new(faq_accordion::FaqAccordion),
            Self::RichText => Arc::new(rich_text::RichText),
        }
    }
}

/// Registry holding every built-in component under its rendering name.
#[must_use]
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    for kind in ComponentKind::ALL {
        registry.register(kind.name(), kind.build());
    }
    registry
}

// =============================================================================
// SHARED MARKUP
// =============================================================================

/// Opening `<section>` carrying the component class, theme, and variant.
fn open_section(out: &mut Markup, ctx: &RenderContext<'_>, class: &str) {
    let _ = write!(
        out,
        "<section class=\"component {class} {}\" data-variant=\"{}\">",
        ctx.theme.styles().section,
        ctx.variant
    );
}

fn heading(out: &mut Markup, ctx: &RenderContext<'_>, tag: &str, class: &str, text: &str) {
    let _ = write!(
        out,
        "<{tag} class=\"{class} {}\">{}</{tag}>",
        ctx.theme.styles().heading,
        Escaped(text)
    );
}

fn link(out: &mut Markup, value: &LinkValue, class: &str) {
    let text = if value.text.trim().is_empty() { &value.href } else { &value.text };
    let _ = write!(out, "<a class=\"{class}\" href=\"{}\"", Escaped(&value.href));
    if let Some(target) = &value.target {
        let _ = write!(out, " target=\"{}\"", Escaped(target));
        if target == "_blank" {
            out.raw(" rel=\"noopener noreferrer\"");
        }
    }
    let _ = write!(out, ">{}</a>", Escaped(text));
}

fn image(out: &mut Markup, value: &ImageValue, class: &str) {
    let _ = write!(
        out,
        "<img class=\"{class}\" src=\"{}\" alt=\"{}\"",
        Escaped(&value.src),
        Escaped(&value.alt)
    );
    if let Some(width) = value.width {
        let _ = write!(out, " width=\"{width}\"");
    }
    if let Some(height) = value.height {
        let _ = write!(out, " height=\"{height}\"");
    }
    out.raw(" loading=\"lazy\">");
}
