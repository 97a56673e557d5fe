//! Detail page view

use serde::Serialize;

use super::format;
use crate::category;
use crate::model::Place;

/// Suffix of the browser title on the detail page
pub const TITLE_SUFFIX: &str = "BH Experiências";

/// One attraction sub-card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttractionCard {
    pub nome: String,
    pub descricao: String,
    pub imagem: String,
}

/// Everything the detail page shows about a place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetail {
    pub id: String,
    pub title: String,
    pub nome: String,
    pub descricao: String,
    pub conteudo: String,
    pub categoria: String,
    pub destaque: bool,
    pub imagem: String,
    pub endereco: String,
    pub horarios: String,
    pub telefone: String,
    pub atualizado_em: String,
    /// In the order stored on the place
    pub atracoes: Vec<AttractionCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailView {
    Found(Box<PlaceDetail>),
    NotFound,
}

impl DetailView {
    pub fn is_found(&self) -> bool {
        matches!(self, DetailView::Found(_))
    }
}

/// View for a fetched record, or not-found when there is none
pub fn detail(place: Option<&Place>) -> DetailView {
    match place {
        None => DetailView::NotFound,
        Some(place) => DetailView::Found(Box::new(PlaceDetail {
            id: place.id.canonical(),
            title: format!("{} - {}", place.nome, TITLE_SUFFIX),
            nome: place.nome.clone(),
            descricao: place.descricao.clone(),
            conteudo: place.conteudo.clone(),
            categoria: category::label(place.categoria.as_deref()).to_string(),
            destaque: place.destaque,
            imagem: place.imagem_principal.clone(),
            endereco: place.endereco.clone(),
            horarios: place.horarios.clone(),
            telefone: format::or_not_informed(place.telefone.as_deref()),
            atualizado_em: format::long_date(place.data.as_deref()),
            atracoes: place
                .atracoes
                .iter()
                .map(|a| AttractionCard {
                    nome: a.nome.clone(),
                    descricao: a.descricao.clone(),
                    imagem: a.imagem.clone(),
                })
                .collect(),
        })),
    }
}
