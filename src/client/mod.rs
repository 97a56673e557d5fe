//! Resource client for the `/lugares` REST collaborator
//!
//! ## Architecture
//!
//! - **PlaceTransport**: raw CRUD calls, one HTTP request each
//! - **HttpTransport**: the `reqwest` implementation
//! - **ResourceClient**: owns the mirror and the notification slot, applies
//!   the read-degrades / write-propagates policy

mod error;
mod resource;
mod transport;

pub use error::{ClientError, ClientResult};
pub use resource::{ResourceClient, GET_FAILED_MESSAGE, LIST_FAILED_MESSAGE};
pub use transport::{HttpTransport, PlaceTransport, RESOURCE_PATH};

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory backend used by unit tests

    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use super::{ClientError, ClientResult, PlaceTransport};
    use crate::model::{Place, PlaceDraft, PlaceId};

    #[derive(Default)]
    pub struct MemoryTransport {
        places: Mutex<Vec<Place>>,
        fail_next: Mutex<Option<u16>>,
        omit_ids: AtomicBool,
        requests: Mutex<Vec<String>>,
    }

    impl MemoryTransport {
        pub fn with_places(places: Vec<Place>) -> Self {
            Self {
                places: Mutex::new(places),
                ..Default::default()
            }
        }

        pub fn snapshot(&self) -> Vec<Place> {
            self.places.lock().unwrap().clone()
        }

        /// Make the next call answer with `status`
        pub fn fail_next(&self, status: u16) {
            *self.fail_next.lock().unwrap() = Some(status);
        }

        /// Leave the id out of create responses
        pub fn omit_ids(&self, omit: bool) {
            self.omit_ids.store(omit, Ordering::SeqCst);
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn begin(&self, request: String) -> ClientResult<()> {
            self.requests.lock().unwrap().push(request);
            match self.fail_next.lock().unwrap().take() {
                Some(status) => Err(ClientError::Api {
                    status,
                    message: "injected failure".to_string(),
                }),
                None => Ok(()),
            }
        }

        fn not_found(id: &PlaceId) -> ClientError {
            ClientError::Api {
                status: 404,
                message: format!("no place {}", id),
            }
        }
    }

    #[async_trait]
    impl PlaceTransport for MemoryTransport {
        async fn list(&self) -> ClientResult<Vec<Place>> {
            self.begin("GET /lugares".to_string())?;
            Ok(self.snapshot())
        }

        async fn get(&self, id: &PlaceId) -> ClientResult<Option<Place>> {
            self.begin(format!("GET /lugares/{}", id))?;
            Ok(self.snapshot().into_iter().find(|p| &p.id == id))
        }

        async fn create(&self, draft: &PlaceDraft) -> ClientResult<Value> {
            self.begin("POST /lugares".to_string())?;

            let mut places = self.places.lock().unwrap();
            let next = places
                .iter()
                .filter_map(|p| match p.id {
                    PlaceId::Number(n) => Some(n),
                    PlaceId::Text(_) => None,
                })
                .max()
                .unwrap_or(0)
                + 1;

            let mut body = serde_json::to_value(draft)?;
            body["id"] = Value::from(next);
            places.push(serde_json::from_value(body.clone())?);

            if self.omit_ids.load(Ordering::SeqCst) {
                if let Some(object) = body.as_object_mut() {
                    object.remove("id");
                }
            }
            Ok(body)
        }

        async fn update(&self, id: &PlaceId, place: &Place) -> ClientResult<Place> {
            self.begin(format!("PUT /lugares/{}", id))?;

            let mut places = self.places.lock().unwrap();
            let slot = places
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or_else(|| Self::not_found(id))?;
            *slot = place.clone();
            Ok(slot.clone())
        }

        async fn delete(&self, id: &PlaceId) -> ClientResult<()> {
            self.begin(format!("DELETE /lugares/{}", id))?;

            let mut places = self.places.lock().unwrap();
            let before = places.len();
            places.retain(|p| &p.id != id);
            if places.len() == before {
                return Err(Self::not_found(id));
            }
            Ok(())
        }
    }
}
