//! Site header: logo, primary navigation, and the mobile menu.
//!
//! The mobile menu's open state belongs to the header instance. The server
//! renders the initial state; transitions happen on the client and mirror
//! [`MobileMenu`].

use std::fmt::Write;

use layout::{Item, LinkValue};

use super::{image, link};
use crate::render::{Component, Escaped, Markup, RenderContext};

pub const DEFAULT_LOGO_TEXT: &str = "Home";
pub const MENU_TOGGLE_LABEL: &str = "Menu";

// =============================================================================
// MOBILE MENU STATE
// =============================================================================

/// Open/closed state of the mobile menu and its single expanded submenu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
    active_submenu: Option<usize>,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub fn active_submenu(self) -> Option<usize> {
        self.active_submenu
    }

    /// Open a closed menu or close an open one. Closing collapses any submenu.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.active_submenu = None;
    }

    /// Expand submenu `index`, collapsing any other; collapse it if already
    /// expanded. Expanding a submenu opens the menu.
    pub fn toggle_submenu(&mut self, index: usize) {
        if self.active_submenu == Some(index) {
            self.active_submenu = None;
        } else {
            self.open = true;
            self.active_submenu = Some(index);
        }
    }

    #[must_use]
    pub fn is_submenu_open(self, index: usize) -> bool {
        self.active_submenu == Some(index)
    }
}

// =============================================================================
// COMPONENT
// =============================================================================

pub struct Header;

impl Component for Header {
    fn variants(&self) -> &'static [&'static str] {
        &["Default", "Transparent"]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        render_header(ctx, MobileMenu::default(), out);
    }
}

fn render_header(ctx: &RenderContext<'_>, menu: MobileMenu, out: &mut Markup) {
    let fields = ctx.fields();
    let class = if ctx.variant == "Transparent" { "header header--transparent" } else { "header" };
    let menu_id = format!("mobile-menu-{}", ctx.node.uid);

    let _ = write!(out, "<header class=\"component {class} {}\">", ctx.theme.styles().section);
    out.raw("<a class=\"header__logo\" href=\"/\">");
    match fields.image("Logo") {
        Some(logo) => image(out, logo, "header__logo-image"),
        None => {
            out.text(DEFAULT_LOGO_TEXT);
        }
    }
    out.raw("</a>");

    let _ = write!(
        out,
        "<button class=\"header__menu-toggle\" type=\"button\" aria-controls=\"{}\" aria-expanded=\"{}\">{}</button>",
        Escaped(&menu_id),
        menu.is_open(),
        Escaped(MENU_TOGGLE_LABEL)
    );

    let _ = write!(out, "<nav id=\"{}\" class=\"header__nav\"", Escaped(&menu_id));
    if !menu.is_open() {
        out.raw(" data-collapsed");
    }
    out.raw("><ul class=\"header__nav-list\">");

    let entries: Vec<(&LinkValue, &Item)> = fields
        .items("NavigationLinks")
        .iter()
        .filter_map(|item| item.fields.link("Link").map(|l| (l, item)))
        .collect();
    if entries.is_empty() {
        let home = LinkValue { href: "/".to_owned(), text: DEFAULT_LOGO_TEXT.to_owned(), target: None };
        out.raw("<li class=\"header__nav-item\">");
        link(out, &home, "header__nav-link");
        out.raw("</li>");
    }
    for (index, (value, item)) in entries.into_iter().enumerate() {
        out.raw("<li class=\"header__nav-item\">");
        link(out, value, "header__nav-link");
        let children: Vec<&LinkValue> = item
            .fields
            .items("Children")
            .iter()
            .filter_map(|child| child.fields.link("Link"))
            .collect();
        if !children.is_empty() {
            let expanded = menu.is_submenu_open(index);
            let _ = write!(
                out,
                "<button class=\"header__submenu-toggle\" type=\"button\" aria-expanded=\"{expanded}\" aria-controls=\"{}-{index}\"></button><ul id=\"{}-{index}\" class=\"header__submenu\"{}>",
                Escaped(&menu_id),
                Escaped(&menu_id),
                if expanded { "" } else { " hidden" }
            );
            for child in children {
                out.raw("<li>");
                link(out, child, "header__submenu-link");
                out.raw("</li>");
            }
            out.raw("</ul>");
        }
        out.raw("</li>");
    }
    out.raw("</ul>");

    if let Some(cta) = fields.link("CtaLink") {
        let cta_class = format!("header__cta {}", ctx.theme.styles().accent);
        link(out, cta, &cta_class);
    }
    out.raw("</nav></header>");
}
