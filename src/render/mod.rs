//! Rendering adapters
//!
//! A [`Render`] implementation turns view models into markup for the named
//! page containers. [`HtmlRenderer`] emits the Bootstrap fragments the site
//! uses; any other adapter can be swapped in by the controller's caller.

mod html;

pub use html::{escape, HtmlRenderer};

use crate::dashboard::{DashboardStats, MarkerPopup};
use crate::notify::Notification;
use crate::view::{AdminListView, AttractionCard, CarouselView, DetailView, ListingView};

pub trait Render {
    /// `#carousel-destaques`
    fn carousel(&self, view: &CarouselView) -> String;

    /// `#lugares-cards`
    fn listing(&self, view: &ListingView) -> String;

    /// `#detalhes-lugar`
    fn detail(&self, view: &DetailView) -> String;

    /// `#atracoes-lugar`
    fn attractions(&self, attractions: &[AttractionCard]) -> String;

    /// `#lugares-lista`
    fn admin_list(&self, view: &AdminListView) -> String;

    /// `#statsContainer`
    fn stats(&self, stats: &DashboardStats) -> String;

    /// `#statsContainer` when the dashboard data could not be loaded
    fn dashboard_unavailable(&self) -> String;

    /// `#alert-container`
    fn notification(&self, notification: &Notification) -> String;

    /// Popup body of a map marker
    fn map_popup(&self, popup: &MarkerPopup) -> String;
}
