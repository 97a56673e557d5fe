//! Page controllers
//!
//! A controller is picked once per page load from an explicit [`Page`]. It
//! fetches through the resource client, builds the page's view models and
//! hands them to a [`Render`] adapter, one fragment per named container.
//! There are no transitions between pages; switching needs a new load.

mod admin;
mod page;

pub use admin::{
    AdminError, Confirm, DeleteOutcome, Rejected, CREATE_FAILED_MESSAGE, CREATED_MESSAGE,
    DELETED_MESSAGE, DELETE_FAILED_MESSAGE, UPDATED_MESSAGE, UPDATE_FAILED_MESSAGE,
};
pub use page::Page;

use serde::Serialize;
use std::sync::Arc;

use crate::client::{ClientError, HttpTransport, ResourceClient};
use crate::config::{Config, MapConfig};
use crate::dashboard::{
    self, CategoryChart, ChartWidgetConfig, DashboardStats, MapView, MapWidgetConfig,
};
use crate::notify::Notifier;
use crate::render::Render;
use crate::store::PlaceStore;
use crate::view::{self, AdminListView, CarouselView, DetailView, ListingView};

/// Container ids of the site's pages
pub mod containers {
    pub const ALERT: &str = "alert-container";
    pub const CAROUSEL: &str = "carousel-destaques";
    pub const LISTING: &str = "lugares-cards";
    pub const DETAIL: &str = "detalhes-lugar";
    pub const ATTRACTIONS: &str = "atracoes-lugar";
    pub const ADMIN_LIST: &str = "lugares-lista";
    pub const STATS: &str = "statsContainer";
}

/// Dashboard view models
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub chart: CategoryChart,
    pub map: MapView,
}

/// View models produced by one page load
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Index {
        carousel: CarouselView,
        listing: ListingView,
    },
    Detail {
        detail: DetailView,
    },
    Admin {
        list: AdminListView,
    },
    Dashboard(Box<DashboardView>),
    /// The dashboard fetch failed
    DashboardUnavailable,
    /// Unrecognized page; nothing ran
    Inert,
}

/// Rendered fragment for one named container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub id: &'static str,
    pub html: String,
}

/// Everything a page load puts on screen
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageOutput {
    pub title: Option<String>,
    pub containers: Vec<Container>,
    pub chart: Option<ChartWidgetConfig>,
    pub map: Option<MapWidgetConfig>,
}

impl PageOutput {
    pub fn container(&self, id: &str) -> Option<&str> {
        self.containers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.html.as_str())
    }

    fn push(&mut self, id: &'static str, html: String) {
        self.containers.push(Container { id, html });
    }
}

/// Drives page loads and admin actions against one resource client
pub struct PageController {
    client: ResourceClient,
    map: MapConfig,
}

impl PageController {
    pub fn new(client: ResourceClient, map: MapConfig) -> Self {
        Self { client, map }
    }

    /// Controller over the HTTP transport described by `config`
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let transport = Arc::new(HttpTransport::new(&config.api)?);
        let client = ResourceClient::new(
            transport,
            PlaceStore::new(),
            Notifier::new(config.notifications.expiry()),
        );
        Ok(Self::new(client, config.map.clone()))
    }

    pub fn client(&self) -> &ResourceClient {
        &self.client
    }

    pub fn store(&self) -> &PlaceStore {
        self.client.store()
    }

    /// Run the controller for `page` and build its view models
    pub async fn load(&mut self, page: &Page) -> PageView {
        tracing::info!(page = page.name(), "Loading page");

        match page {
            Page::Index => {
                self.client.list().await;
                PageView::Index {
                    carousel: view::carousel(self.store()),
                    listing: view::listing(self.store()),
                }
            }
            Page::Detail { id } => {
                let place = match id {
                    Some(id) => self.client.get_by_id(id).await,
                    None => None,
                };
                PageView::Detail {
                    detail: view::detail(place.as_ref()),
                }
            }
            Page::Admin => {
                self.client.list().await;
                PageView::Admin {
                    list: view::admin_list(self.store()),
                }
            }
            Page::Dashboard => match self.client.try_list().await.map(|_| ()) {
                Ok(()) => {
                    let store = self.store();
                    PageView::Dashboard(Box::new(DashboardView {
                        stats: dashboard::dashboard_stats(store),
                        chart: dashboard::category_chart(store),
                        map: dashboard::map_view(store, self.map.default_center),
                    }))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load dashboard data");
                    PageView::DashboardUnavailable
                }
            },
            Page::Unknown { name } => {
                tracing::debug!(page = %name, "No controller for page");
                PageView::Inert
            }
        }
    }

    /// Render a page's view models plus the current notification
    pub fn render(&self, view: &PageView, renderer: &dyn Render) -> PageOutput {
        let mut output = render_page(view, renderer, &self.map);
        if let Some(notification) = self.client.notifier().current() {
            output.push(containers::ALERT, renderer.notification(notification));
        }
        output
    }
}

/// Map view models to fragments; pure in its inputs
pub fn render_page(view: &PageView, renderer: &dyn Render, map: &MapConfig) -> PageOutput {
    let mut output = PageOutput::default();

    match view {
        PageView::Index { carousel, listing } => {
            output.push(containers::CAROUSEL, renderer.carousel(carousel));
            output.push(containers::LISTING, renderer.listing(listing));
        }
        PageView::Detail { detail } => {
            output.push(containers::DETAIL, renderer.detail(detail));
            if let DetailView::Found(place) = detail {
                output.title = Some(place.title.clone());
                if !place.atracoes.is_empty() {
                    output.push(containers::ATTRACTIONS, renderer.attractions(&place.atracoes));
                }
            }
        }
        PageView::Admin { list } => {
            output.push(containers::ADMIN_LIST, renderer.admin_list(list));
        }
        PageView::Dashboard(dashboard) => {
            output.push(containers::STATS, renderer.stats(&dashboard.stats));
            output.chart = Some(dashboard.chart.widget_config());
            output.map = Some(dashboard::map_widget_config(&dashboard.map, map, renderer));
        }
        PageView::DashboardUnavailable => {
            output.push(containers::STATS, renderer.dashboard_unavailable());
        }
        PageView::Inert => {}
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::MemoryTransport;
    use crate::model::{Attraction, Place, PlaceId};
    use crate::render::HtmlRenderer;

    fn places() -> Vec<Place> {
        let mut museum = Place::new(1, "Museu Inimá de Paula")
            .categoria("Cultura")
            .featured(true)
            .at(-19.92, -43.94)
            .attraction(Attraction {
                nome: "Acervo".into(),
                descricao: "Pinturas".into(),
                imagem: "img/acervo.jpg".into(),
            });
        museum.data = Some("2025-01-20".into());

        vec![
            museum,
            Place::new(2, "Serra do Curral")
                .categoria("Natureza")
                .at(-19.96, -43.90),
        ]
    }

    fn controller() -> (Arc<MemoryTransport>, PageController) {
        let transport = Arc::new(MemoryTransport::with_places(places()));
        let client = ResourceClient::with_transport(transport.clone());
        (transport, PageController::new(client, MapConfig::default()))
    }

    #[tokio::test]
    async fn test_index_page() {
        let (_transport, mut controller) = controller();
        let view = controller.load(&Page::Index).await;
        let output = controller.render(&view, &HtmlRenderer);

        let carousel = output.container(containers::CAROUSEL).unwrap();
        assert!(carousel.contains("Museu Inimá de Paula"));
        assert!(!carousel.contains("Serra do Curral"));
        let listing = output.container(containers::LISTING).unwrap();
        assert!(listing.contains("Serra do Curral"));
        assert!(output.container(containers::ALERT).is_none());
    }

    #[tokio::test]
    async fn test_index_page_backend_down() {
        let (transport, mut controller) = controller();
        transport.fail_next(502);
        let view = controller.load(&Page::Index).await;
        let output = controller.render(&view, &HtmlRenderer);

        assert_eq!(output.container(containers::CAROUSEL), Some(""));
        let alert = output.container(containers::ALERT).unwrap();
        assert!(alert.contains("Verifique se o servidor está rodando"));
    }

    #[tokio::test]
    async fn test_detail_page_found_sets_title_and_attractions() {
        let (_transport, mut controller) = controller();
        let view = controller.load(&Page::resolve("detalhes.html?id=1")).await;
        let output = controller.render(&view, &HtmlRenderer);

        assert_eq!(
            output.title.as_deref(),
            Some("Museu Inimá de Paula - BH Experiências")
        );
        assert!(output
            .container(containers::DETAIL)
            .unwrap()
            .contains("20 de janeiro de 2025"));
        assert!(output
            .container(containers::ATTRACTIONS)
            .unwrap()
            .contains("Acervo"));
    }

    #[tokio::test]
    async fn test_detail_page_not_found_without_mutation() {
        let (transport, mut controller) = controller();
        let view = controller.load(&Page::resolve("detalhes.html?id=99")).await;
        let output = controller.render(&view, &HtmlRenderer);

        assert!(output
            .container(containers::DETAIL)
            .unwrap()
            .contains("Lugar não encontrado"));
        assert!(output.container(containers::ATTRACTIONS).is_none());
        assert!(output.title.is_none());
        assert_eq!(transport.requests(), vec!["GET /lugares/99".to_string()]);
        assert!(controller.store().is_empty());
    }

    #[tokio::test]
    async fn test_detail_page_without_id_skips_fetch() {
        let (transport, mut controller) = controller();
        let view = controller.load(&Page::resolve("detalhes.html")).await;
        assert_eq!(
            view,
            PageView::Detail {
                detail: DetailView::NotFound
            }
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let (_transport, mut controller) = controller();
        let view = controller.load(&Page::Dashboard).await;

        let PageView::Dashboard(dashboard) = &view else {
            panic!("expected dashboard view");
        };
        assert_eq!(dashboard.stats.total, 2);
        assert_eq!(dashboard.stats.featured, 1);
        assert_eq!(dashboard.stats.attractions, 1);
        assert_eq!(dashboard.stats.categories, 2);
        assert_eq!(dashboard.map.markers.len(), 2);

        let output = controller.render(&view, &HtmlRenderer);
        assert!(output.container(containers::STATS).is_some());
        let chart = output.chart.unwrap();
        assert_eq!(chart.data.labels, vec!["Cultura", "Natureza"]);
        let map = output.map.unwrap();
        assert_eq!(map.markers.len(), 2);
        assert!(map.markers[0].popup_html.contains("⭐ Museu Inimá de Paula"));
    }

    #[tokio::test]
    async fn test_dashboard_unavailable() {
        let (transport, mut controller) = controller();
        transport.fail_next(500);
        let view = controller.load(&Page::Dashboard).await;
        assert_eq!(view, PageView::DashboardUnavailable);

        let output = controller.render(&view, &HtmlRenderer);
        assert!(output
            .container(containers::STATS)
            .unwrap()
            .contains("Não foi possível carregar os dados"));
        assert!(output.chart.is_none());
        assert!(output.map.is_none());
    }

    #[tokio::test]
    async fn test_unknown_page_is_inert() {
        let (transport, mut controller) = controller();
        let view = controller.load(&Page::resolve("contato.html")).await;
        assert_eq!(view, PageView::Inert);
        assert!(transport.requests().is_empty());
        assert!(controller.render(&view, &HtmlRenderer).containers.is_empty());
    }

    #[tokio::test]
    async fn test_admin_page_lists_rows() {
        let (_transport, mut controller) = controller();
        let view = controller.load(&Page::Admin).await;
        let PageView::Admin { list: AdminListView::Rows(rows) } = &view else {
            panic!("expected admin rows");
        };
        assert_eq!(rows.len(), 2);
        assert!(controller.store().contains(&PlaceId::Number(2)));
    }
}
