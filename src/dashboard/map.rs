//! Map adapter
//!
//! Centers the map on the mean of all valid coordinates and builds one
//! marker per place that has them. Marker size and border encode the
//! featured flag; color and icon come from the shared category lookup.

use serde::Serialize;

use crate::category::{self, CategoryStyle};
use crate::config::MapConfig;
use crate::model::Coordinates;
use crate::render::Render;
use crate::store::PlaceStore;
use crate::view::format;

/// Read-only summary shown when a marker is clicked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub nome: String,
    pub destaque: bool,
    pub categoria: String,
    pub descricao: String,
    pub atracoes: usize,
    pub data: String,
    pub telefone: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub position: Coordinates,
    pub featured: bool,
    pub style: CategoryStyle,
    pub popup: MarkerPopup,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub markers: Vec<MapMarker>,
}

/// Mean of every valid coordinate pair, or `fallback` when there is none
pub fn map_center(store: &PlaceStore, fallback: Coordinates) -> Coordinates {
    let (sum_lat, sum_lng, count) = store
        .iter()
        .filter_map(|p| p.position())
        .fold((0.0, 0.0, 0usize), |(lat, lng, n), c| {
            (lat + c.latitude, lng + c.longitude, n + 1)
        });

    if count == 0 {
        fallback
    } else {
        Coordinates::new(sum_lat / count as f64, sum_lng / count as f64)
    }
}

pub fn map_view(store: &PlaceStore, fallback: Coordinates) -> MapView {
    let markers = store
        .iter()
        .filter_map(|place| {
            let position = place.position()?;
            Some(MapMarker {
                id: place.id.canonical(),
                position,
                featured: place.destaque,
                style: category::style_for(place.categoria.as_deref()),
                popup: MarkerPopup {
                    nome: place.nome.clone(),
                    destaque: place.destaque,
                    categoria: category::label(place.categoria.as_deref()).to_string(),
                    descricao: place.descricao.clone(),
                    atracoes: place.atracoes.len(),
                    data: format::short_date(place.data.as_deref()),
                    telefone: format::or_not_informed(place.telefone.as_deref()),
                    href: place.detail_href(),
                },
            })
        })
        .collect();

    MapView {
        center: map_center(store, fallback),
        markers,
    }
}

impl MapMarker {
    /// Custom DOM element for the marker
    pub fn element(&self) -> MarkerElement {
        let (size, border, icon_size) = if self.featured {
            (30, "3px solid #FFD700", 16)
        } else {
            (25, "2px solid #fff", 14)
        };

        MarkerElement {
            class_name: "marker",
            size_px: size,
            border,
            background_color: self.style.color,
            icon: self.style.icon,
            icon_size_px: icon_size,
            box_shadow: "0 2px 10px rgba(0,0,0,0.3)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerElement {
    pub class_name: &'static str,
    pub size_px: u32,
    pub border: &'static str,
    pub background_color: &'static str,
    pub icon: &'static str,
    pub icon_size_px: u32,
    pub box_shadow: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapControl {
    Navigation,
    Fullscreen,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerConfig {
    /// `[longitude, latitude]`
    pub lng_lat: [f64; 2],
    pub element: MarkerElement,
    pub popup_offset: u32,
    pub popup_html: String,
}

/// Payload handed to the mapping widget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapWidgetConfig {
    pub access_token: String,
    pub style: String,
    /// `[longitude, latitude]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub markers: Vec<MarkerConfig>,
    pub controls: Vec<MapControl>,
}

pub fn widget_config(view: &MapView, config: &MapConfig, renderer: &dyn Render) -> MapWidgetConfig {
    MapWidgetConfig {
        access_token: config.access_token.clone(),
        style: config.style.clone(),
        center: [view.center.longitude, view.center.latitude],
        zoom: config.zoom,
        markers: view
            .markers
            .iter()
            .map(|m| MarkerConfig {
                lng_lat: [m.position.longitude, m.position.latitude],
                element: m.element(),
                popup_offset: 25,
                popup_html: renderer.map_popup(&m.popup),
            })
            .collect(),
        controls: vec![MapControl::Navigation, MapControl::Fullscreen],
    }
}
