//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! is read-only after startup: site config, the layout source, and the
//! renderer with its component registry. Clones share everything by `Arc`.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::layout_service::LayoutService;
use crate::render::Renderer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub layout: Arc<dyn LayoutService>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    #[must_use]
    pub fn new(config: SiteConfig, layout: Arc<dyn LayoutService>, renderer: Renderer) -> Self {
        Self { config: Arc::new(config), layout, renderer: Arc::new(renderer) }
    }
}
