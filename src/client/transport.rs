//! HTTP transport for the `/lugares` resource
//!
//! One request per call: no retry, no backoff. Any non-2xx answer is a
//! failure of that call only.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use super::error::{ClientError, ClientResult};
use crate::config::ApiConfig;
use crate::model::{Place, PlaceDraft, PlaceId};

/// Path of the places resource below the configured base URL
pub const RESOURCE_PATH: &str = "lugares";

/// Raw CRUD calls against the places resource
#[async_trait]
pub trait PlaceTransport: Send + Sync {
    /// `GET /lugares`
    async fn list(&self) -> ClientResult<Vec<Place>>;

    /// `GET /lugares/:id`; a 404 is `Ok(None)`
    async fn get(&self, id: &PlaceId) -> ClientResult<Option<Place>>;

    /// `POST /lugares`. The body is returned as-is since the backend may
    /// leave out the id.
    async fn create(&self, draft: &PlaceDraft) -> ClientResult<Value>;

    /// `PUT /lugares/:id` with the full record
    async fn update(&self, id: &PlaceId, place: &Place) -> ClientResult<Place>;

    /// `DELETE /lugares/:id`
    async fn delete(&self, id: &PlaceId) -> ClientResult<()>;
}

/// `reqwest`-backed transport
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, RESOURCE_PATH)
    }

    fn item_url(&self, id: &PlaceId) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            RESOURCE_PATH,
            urlencoding::encode(&id.canonical())
        )
    }
}

#[async_trait]
impl PlaceTransport for HttpTransport {
    async fn list(&self) -> ClientResult<Vec<Place>> {
        let url = self.collection_url();
        tracing::debug!(url = %url, "GET places");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::from_send(e, &url))?;

        read_json(ensure_success(response).await?).await
    }

    async fn get(&self, id: &PlaceId) -> ClientResult<Option<Place>> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "GET place");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::from_send(e, &url))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        read_json(ensure_success(response).await?).await.map(Some)
    }

    async fn create(&self, draft: &PlaceDraft) -> ClientResult<Value> {
        let url = self.collection_url();
        tracing::debug!(url = %url, nome = %draft.nome, "POST place");

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::from_send(e, &url))?;

        read_json(ensure_success(response).await?).await
    }

    async fn update(&self, id: &PlaceId, place: &Place) -> ClientResult<Place> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "PUT place");

        let response = self
            .client
            .put(&url)
            .json(place)
            .send()
            .await
            .map_err(|e| ClientError::from_send(e, &url))?;

        read_json(ensure_success(response).await?).await
    }

    async fn delete(&self, id: &PlaceId) -> ClientResult<()> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "DELETE place");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ClientError::from_send(e, &url))?;

        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message: text,
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_trim_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:3001/".to_string(),
            ..ApiConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();

        assert_eq!(transport.collection_url(), "http://localhost:3001/lugares");
        assert_eq!(
            transport.item_url(&PlaceId::Number(7)),
            "http://localhost:3001/lugares/7"
        );
        assert_eq!(
            transport.item_url(&PlaceId::Text("a/b".to_string())),
            "http://localhost:3001/lugares/a%2Fb"
        );
    }
}
