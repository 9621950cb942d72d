//! Server-side renderer for a headless CMS site.
//!
//! Pages are assembled from layout data fetched per request from the
//! Layout Service, rendered through a registry of presentational components,
//! and served by an Axum router. The binary in `main.rs` wires these modules
//! together; the `layout-check` CLI reuses [`components::ComponentKind`].

pub mod components;
pub mod config;
pub mod editing;
pub mod error;
pub mod layout_service;
pub mod locale;
pub mod render;
pub mod routes;
pub mod state;
