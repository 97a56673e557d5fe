//! Mirror-aware resource client
//!
//! Wraps a [`PlaceTransport`] and keeps the owned [`PlaceStore`] in step with
//! every successful call. Reads degrade to empty results plus a notification;
//! writes hand the error back and leave the mirror untouched.

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

use super::error::{ClientError, ClientResult};
use super::transport::PlaceTransport;
use crate::model::{Place, PlaceDraft, PlaceId};
use crate::notify::{AlertLevel, Notifier};
use crate::store::PlaceStore;

pub const LIST_FAILED_MESSAGE: &str =
    "Erro ao carregar lugares. Verifique se o servidor está rodando.";
pub const GET_FAILED_MESSAGE: &str = "Erro ao carregar o lugar solicitado.";

/// CRUD client for the places resource, owning the local mirror
pub struct ResourceClient {
    transport: Arc<dyn PlaceTransport>,
    store: PlaceStore,
    notifier: Notifier,
}

impl ResourceClient {
    pub fn new(transport: Arc<dyn PlaceTransport>, store: PlaceStore, notifier: Notifier) -> Self {
        Self {
            transport,
            store,
            notifier,
        }
    }

    /// Client with an empty mirror and default notifier
    pub fn with_transport(transport: Arc<dyn PlaceTransport>) -> Self {
        Self::new(transport, PlaceStore::new(), Notifier::default())
    }

    pub fn store(&self) -> &PlaceStore {
        &self.store
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Fetch the collection and replace the mirror with it
    pub async fn try_list(&mut self) -> ClientResult<&[Place]> {
        let places = self.transport.list().await?;
        tracing::info!(count = places.len(), "Mirror refreshed");
        self.store.replace_all(places);
        Ok(self.store.as_slice())
    }

    /// Fetch the collection. On failure a notification is posted, the mirror
    /// is left as it was and an empty list is returned.
    pub async fn list(&mut self) -> Vec<Place> {
        match self.try_list().await {
            Ok(places) => places.to_vec(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to list places");
                self.notifier.show(LIST_FAILED_MESSAGE, AlertLevel::Danger);
                Vec::new()
            }
        }
    }

    /// Fetch one record. Missing records and failures both yield `None`;
    /// only failures post a notification. The mirror is not touched.
    pub async fn get_by_id(&mut self, id: &PlaceId) -> Option<Place> {
        match self.transport.get(id).await {
            Ok(found) => {
                if found.is_none() {
                    tracing::info!(id = %id, "Place not found");
                }
                found
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to fetch place");
                self.notifier.show(GET_FAILED_MESSAGE, AlertLevel::Warning);
                None
            }
        }
    }

    /// Create a record and append the server's copy to the mirror
    pub async fn create(&mut self, draft: &PlaceDraft) -> ClientResult<Place> {
        let body = self.transport.create(draft).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create place");
            e
        })?;

        let place = materialize(body, &self.store)?;
        tracing::info!(id = %place.id, nome = %place.nome, "Place created");
        self.store.insert(place.clone());
        Ok(place)
    }

    /// Send the full record and swap the mirror entry for the server's copy
    pub async fn update(&mut self, id: &PlaceId, place: &Place) -> ClientResult<Place> {
        let updated = self.transport.update(id, place).await.map_err(|e| {
            tracing::error!(id = %id, error = %e, "Failed to update place");
            e
        })?;

        if !self.store.replace(id, updated.clone()) {
            tracing::warn!(id = %id, "Updated place was not in the mirror");
        }
        tracing::info!(id = %id, "Place updated");
        Ok(updated)
    }

    /// Delete a record and drop it from the mirror
    pub async fn delete(&mut self, id: &PlaceId) -> ClientResult<()> {
        self.transport.delete(id).await.map_err(|e| {
            tracing::error!(id = %id, error = %e, "Failed to delete place");
            e
        })?;

        self.store.remove(id);
        tracing::info!(id = %id, remaining = self.store.len(), "Place deleted");
        Ok(())
    }
}

/// Turn a create response into a place, synthesizing an id if the backend
/// did not return one
fn materialize(mut body: Value, store: &PlaceStore) -> ClientResult<Place> {
    let object = body
        .as_object_mut()
        .ok_or_else(|| ClientError::Decode("expected a JSON object".to_string()))?;

    let has_id = matches!(object.get("id"), Some(v) if !v.is_null());
    if !has_id {
        let id = synthesize_id(store);
        tracing::debug!(id = %id, "Backend returned no id, using a client id");
        object.insert("id".to_string(), serde_json::to_value(&id)?);
    }

    Ok(serde_json::from_value(body)?)
}

/// Millisecond timestamp, bumped until it is unused in the mirror
fn synthesize_id(store: &PlaceStore) -> PlaceId {
    let mut candidate = Utc::now().timestamp_millis();
    while store.contains(&PlaceId::Number(candidate)) {
        candidate += 1;
    }
    PlaceId::Number(candidate)
}
