//! Layout container that hosts a nested placeholder.
//!
//! The CMS keys a container's placeholder as `container-{DynamicPlaceholderId}`.
//! When that key is absent every nested placeholder renders, in name order.

use super::open_section;
use crate::render::{Component, Markup, RenderContext};

pub const PLACEHOLDER_PREFIX: &str = "container-";
pub const DYNAMIC_PLACEHOLDER_PARAM: &str = "DynamicPlaceholderId";

pub struct Container;

impl Component for Container {
    fn variants(&self) -> &'static [&'static str] {
        &["Default", "FullWidth"]
    }

    fn render(&self, ctx: &RenderContext<'_>, out: &mut Markup) {
        let class = if ctx.variant == "FullWidth" { "container container--full-width" } else { "container" };
        open_section(out, ctx, class);
        out.raw("<div class=\"container__inner\">");

        let dynamic_key = ctx
            .param(DYNAMIC_PLACEHOLDER_PARAM)
            .map(|id| format!("{PLACEHOLDER_PREFIX}{id}"))
            .filter(|key| ctx.node.placeholders.contains_key(key));
        match dynamic_key {
            Some(key) => ctx.render_placeholder(&key, out),
            None => {
                for name in ctx.placeholder_names() {
                    ctx.render_placeholder(name, out);
                }
            }
        }

        out.raw("</div></section>");
    }
}
