//! Home page views: featured carousel and full listing

use serde::Serialize;

use crate::category;
use crate::model::Place;
use crate::store::PlaceStore;

/// One carousel slide
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSlide {
    pub id: String,
    pub nome: String,
    pub descricao: String,
    pub categoria: String,
    pub imagem: String,
    pub href: String,
    pub active: bool,
}

/// Featured places, in mirror order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselView {
    pub slides: Vec<CarouselSlide>,
}

/// One listing card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceCard {
    pub id: String,
    pub nome: String,
    pub descricao: String,
    pub categoria: String,
    pub imagem: String,
    pub destaque: bool,
    pub href: String,
}

/// Every place, in mirror order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView {
    pub cards: Vec<PlaceCard>,
}

/// Featured places only; the first one is the active slide
pub fn carousel(store: &PlaceStore) -> CarouselView {
    let slides = store
        .iter()
        .filter(|p| p.destaque)
        .enumerate()
        .map(|(idx, place)| CarouselSlide {
            id: place.id.canonical(),
            nome: place.nome.clone(),
            descricao: place.descricao.clone(),
            categoria: category::label(place.categoria.as_deref()).to_string(),
            imagem: place.imagem_principal.clone(),
            href: place.detail_href(),
            active: idx == 0,
        })
        .collect();

    CarouselView { slides }
}

/// All places, no paging or filtering
pub fn listing(store: &PlaceStore) -> ListingView {
    ListingView {
        cards: store.iter().map(card).collect(),
    }
}

fn card(place: &Place) -> PlaceCard {
    PlaceCard {
        id: place.id.canonical(),
        nome: place.nome.clone(),
        descricao: place.descricao.clone(),
        categoria: category::label(place.categoria.as_deref()).to_string(),
        imagem: place.imagem_principal.clone(),
        destaque: place.destaque,
        href: place.detail_href(),
    }
}
