//! Admin page views: record list, edit prefill, delete confirmation

use serde::Serialize;

use super::format;
use crate::category;
use crate::model::{PlaceEdit, PlaceId};
use crate::store::PlaceStore;

/// Description excerpt length on admin cards
pub const EXCERPT_CHARS: usize = 100;

/// One admin card with its view/edit/delete actions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminRow {
    pub id: String,
    pub nome: String,
    pub categoria: String,
    pub destaque: bool,
    pub imagem: String,
    pub excerpt: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "rows", rename_all = "snake_case")]
pub enum AdminListView {
    /// No records: an explicit empty state, not an empty container
    Empty,
    Rows(Vec<AdminRow>),
}

/// Prompt shown before a record is deleted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteConfirmation {
    pub id: PlaceId,
    pub prompt: String,
}

/// Admin list in mirror order
pub fn admin_list(store: &PlaceStore) -> AdminListView {
    if store.is_empty() {
        return AdminListView::Empty;
    }

    AdminListView::Rows(
        store
            .iter()
            .map(|place| AdminRow {
                id: place.id.canonical(),
                nome: place.nome.clone(),
                categoria: category::label(place.categoria.as_deref()).to_string(),
                destaque: place.destaque,
                imagem: place.imagem_principal.clone(),
                excerpt: format::excerpt(&place.descricao, EXCERPT_CHARS),
                href: place.detail_href(),
            })
            .collect(),
    )
}

/// Edit modal prefilled from the mirror copy, if the id is mirrored
pub fn edit_form(store: &PlaceStore, id: &PlaceId) -> Option<PlaceEdit> {
    store.get(id).map(PlaceEdit::from_place)
}

/// Confirmation prompt for deleting a mirrored record
pub fn delete_confirmation(store: &PlaceStore, id: &PlaceId) -> Option<DeleteConfirmation> {
    store.get(id).map(|place| DeleteConfirmation {
        id: place.id.clone(),
        prompt: format!("Tem certeza que deseja excluir \"{}\"?", place.nome),
    })
}
