//! Page renderer — layout tree to HTML.
//!
//! DESIGN
//! ======
//! Rendering is a synchronous depth-first walk over placeholders. Each node
//! is resolved through the [`Registry`], given its variant and theme from
//! rendering parameters, and rendered with its fields and nested
//! placeholders untouched. Components that own placeholders (Container)
//! recurse back through [`RenderContext::render_placeholder`]; the renderer
//! itself enforces no depth limit.
//!
//! ERROR HANDLING
//! ==============
//! An unknown component name degrades only its own node: nothing is emitted
//! on the live site, and editors see a visible marker. Siblings keep
//! rendering. Missing fields are the components' concern and fall back to
//! default copy.

pub mod markup;
pub mod registry;
pub mod variant;

use std::fmt::Write;
use std::sync::Arc;

use layout::{Fields, LayoutData, LayoutNode, RouteData};
use tracing::warn;

use crate::error::ErrorCode;
use crate::locale::DocumentAttributes;
pub use markup::{Escaped, Markup};
pub use registry::{Component, Registry, RegistryError};
use variant::{THEME_PARAM, Theme, VARIANT_PARAM, select_variant};

const STYLESHEET_HREF: &str = "/assets/site.css";

// =============================================================================
// CONTEXT
// =============================================================================

/// Per-request page facts shared by every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub document: DocumentAttributes,
    pub site_name: String,
    /// Editor requests show markers for components that could not render.
    pub editing: bool,
}

impl PageContext {
    #[must_use]
    pub fn new(language: &str, site_name: impl Into<String>, editing: bool) -> Self {
        Self { document: DocumentAttributes::new(language), site_name: site_name.into(), editing }
    }

    /// Context for a fetched layout. The layout's own language wins over
    /// `requested_language`; editing is on if either side asks for it.
    #[must_use]
    pub fn for_layout(layout: &LayoutData, requested_language: &str, site_name: &str, editing: bool) -> Self {
        let mut page = Self::new(requested_language, site_name, editing || layout.sitecore.context.page_editing);
        if let Some(language) = layout.language().filter(|l| !l.trim().is_empty()) {
            page.document.apply_language(language);
        }
        if let Some(site) = layout.sitecore.context.site.as_ref().filter(|s| !s.name.is_empty()) {
            page.site_name.clone_from(&site.name);
        }
        page
    }
}

/// What a component sees while rendering one node.
pub struct RenderContext<'a> {
    pub node: &'a LayoutNode,
    pub variant: &'static str,
    pub theme: Theme,
    pub page: &'a PageContext,
    renderer: &'a Renderer,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub fn fields(&self) -> &'a Fields {
        &self.node.fields
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&'a str> {
        self.node
            .params
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Render the node's nested placeholder `name`, if present.
    pub fn render_placeholder(&self, name: &str, out: &mut Markup) {
        if let Some(nodes) = self.node.placeholders.get(name) {
            self.renderer.render_nodes(nodes, self.page, out);
        }
    }

    /// Names of the node's nested placeholders, sorted.
    pub fn placeholder_names(&self) -> impl Iterator<Item = &'a str> {
        self.node.placeholders.keys().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn for_test(node: &'a LayoutNode, page: &'a PageContext, renderer: &'a Renderer) -> Self {
        Self { node, variant: variant::DEFAULT_VARIANT, theme: Theme::default(), page, renderer }
    }
}

// =============================================================================
// RENDERER
// =============================================================================

pub struct Renderer {
    registry: Arc<Registry>,
}

impl Renderer {
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render every root placeholder of `route`: header, main, and footer
    /// first, then any others by name.
    #[must_use]
    pub fn render(&self, route: &RouteData, page: &PageContext) -> Markup {
        let mut out = Markup::new();
        for (_, nodes) in route.root_placeholders() {
            self.render_nodes(nodes, page, &mut out);
        }
        out
    }

    /// Render a placeholder's nodes in order.
    pub fn render_nodes(&self, nodes: &[LayoutNode], page: &PageContext, out: &mut Markup) {
        for node in nodes {
            self.render_node(node, page, out);
        }
    }

    fn render_node(&self, node: &LayoutNode, page: &PageContext, out: &mut Markup) {
        let component = match self.registry.resolve(&node.component_name) {
            Ok(component) => component,
            Err(e) => {
                warn!(code = e.error_code(), uid = %node.uid, component = %node.component_name, "skipping unknown component");
                if page.editing {
                    let _ = write!(
                        out,
                        "<div class=\"missing-component\" data-uid=\"{}\">Unknown component: {}</div>",
                        Escaped(&node.uid),
                        Escaped(&node.component_name)
                    );
                }
                return;
            }
        };

        let ctx = RenderContext {
            node,
            variant: select_variant(component.variants(), node.params.get(VARIANT_PARAM).map(String::as_str)),
            theme: Theme::from_param(node.params.get(THEME_PARAM).map(String::as_str)),
            page,
            renderer: self,
        };
        component.render(&ctx, out);
    }

    /// Render a full HTML document for a layout whose route is present.
    #[must_use]
    pub fn render_document(&self, route: &RouteData, page: &PageContext) -> String {
        let body = self.render(route, page);
        let title = page_title(route, &page.site_name);
        let body_class = if page.editing { " class=\"editing-mode\"" } else { "" };

        let mut html = String::with_capacity(body.as_str().len() + 512);
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"{lang}\" dir=\"{dir}\">\n<head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title}</title>\n\
             <link rel=\"stylesheet\" href=\"{STYLESHEET_HREF}\">\n\
             </head>\n<body{body_class}>\n{body}\n</body>\n</html>\n",
            lang = Escaped(&page.document.lang),
            dir = page.document.dir,
            title = Escaped(title),
        );
        html
    }
}

/// `Title` field, then display name, then item name, then site name.
fn page_title<'a>(route: &'a RouteData, site_name: &'a str) -> &'a str {
    route
        .fields
        .text("Title")
        .or_else(|| route.display_name.as_deref().filter(|s| !s.trim().is_empty()))
        .or_else(|| Some(route.name.as_str()).filter(|s| !s.trim().is_empty()))
        .unwrap_or(site_name)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
