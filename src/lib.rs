//! # Lugares
//!
//! Client core for the BH Experiências places catalogue: a typed client for
//! the `/lugares` REST resource, a local mirror of the collection, and the
//! view models behind the site's pages.
//!
//! ## Features
//!
//! - **Resource client**: CRUD over HTTP with a mirror kept in step
//! - **Pages**: home carousel and listing, detail, admin, dashboard
//! - **Dashboard**: stats, category pie chart, map markers
//! - **Rendering**: pluggable adapters, Bootstrap HTML out of the box
//!
//! ## Modules
//!
//! - [`client`]: transport trait, HTTP transport, mirror-aware client
//! - [`controller`]: page identity, page loads, admin actions
//! - [`view`]: per-page view models
//! - [`dashboard`]: derived stats, chart and map adapters
//! - [`render`]: view model to markup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lugares::{Config, HtmlRenderer, Page, PageController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let mut controller = PageController::from_config(&config)?;
//!
//!     let view = controller.load(&Page::resolve("index.html")).await;
//!     let output = controller.render(&view, &HtmlRenderer);
//!
//!     for container in &output.containers {
//!         println!("#{}: {} bytes", container.id, container.html.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod client;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod model;
pub mod notify;
pub mod render;
pub mod store;
pub mod view;

pub use client::{ClientError, ClientResult, HttpTransport, PlaceTransport, ResourceClient};

pub use config::{Config, ConfigError, LoggingConfig};

pub use controller::{
    render_page, AdminError, Confirm, DeleteOutcome, Page, PageController, PageOutput, PageView,
};

pub use model::{FormError, Place, PlaceDraft, PlaceEdit, PlaceForm, PlaceId};

pub use notify::{AlertLevel, Notification, Notifier};

pub use render::{HtmlRenderer, Render};

pub use store::PlaceStore;
