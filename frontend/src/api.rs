//! Gateway to the external universities REST API.
//!
//! A thin wrapper over `gloo_net`: every call maps the outcome onto
//! [`ApiError`] and never retries. Callers pass the `AbortSignal` of the
//! component that owns the request so it is cancelled when that component is
//! destroyed.
//!
//! Endpoints (relative to `ClientConfig::api_base`):
//! - `GET    /universities`
//! - `POST   /universities`
//! - `PUT    /universities/{id}`
//! - `DELETE /universities/{id}`

use std::rc::Rc;

use common::error::ApiError;
use common::form::SubmitRequest;
use common::model::config::ClientConfig;
use common::model::university::{University, UniversityId, UniversityPayload};
use gloo_net::http::{Request, Response};
use web_sys::AbortSignal;

const UNIVERSITIES_PATH: &str = "/universities";

/// Served by the static host next to the compiled frontend.
pub const CONFIG_PATH: &str = "/config.json";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: Rc<ClientConfig>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    pub fn collection_url(&self) -> String {
        self.config.endpoint(UNIVERSITIES_PATH)
    }

    pub fn record_url(&self, id: &UniversityId) -> String {
        self.config.record_endpoint(UNIVERSITIES_PATH, id.as_str())
    }

    pub async fn list(&self, signal: Option<&AbortSignal>) -> Result<Vec<University>, ApiError> {
        let response = Request::get(&self.collection_url())
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| transport_error(e, signal))?;
        let body = success_body(response, signal).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn create(
        &self,
        payload: &UniversityPayload,
        signal: Option<&AbortSignal>,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.collection_url())
            .abort_signal(signal)
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| transport_error(e, signal))?;
        success_body(response, signal).await.map(|_| ())
    }

    pub async fn update(
        &self,
        id: &UniversityId,
        payload: &UniversityPayload,
        signal: Option<&AbortSignal>,
    ) -> Result<(), ApiError> {
        let response = Request::put(&self.record_url(id))
            .abort_signal(signal)
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| transport_error(e, signal))?;
        success_body(response, signal).await.map(|_| ())
    }

    pub async fn delete(
        &self,
        id: &UniversityId,
        signal: Option<&AbortSignal>,
    ) -> Result<(), ApiError> {
        let response = Request::delete(&self.record_url(id))
            .abort_signal(signal)
            .send()
            .await
            .map_err(|e| transport_error(e, signal))?;
        success_body(response, signal).await.map(|_| ())
    }

    /// Issues the request produced by a form's `begin_submit`.
    pub async fn submit(
        &self,
        request: &SubmitRequest,
        signal: Option<&AbortSignal>,
    ) -> Result<(), ApiError> {
        match request {
            SubmitRequest::Create(payload) => self.create(payload, signal).await,
            SubmitRequest::Update(id, payload) => self.update(id, payload, signal).await,
        }
    }
}

/// Loads the runtime config published by the static host.
pub async fn fetch_config() -> Result<ClientConfig, ApiError> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = success_body(response, None).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn transport_error(err: gloo_net::Error, signal: Option<&AbortSignal>) -> ApiError {
    if signal.is_some_and(|s| s.aborted()) {
        ApiError::Aborted
    } else {
        ApiError::Transport(err.to_string())
    }
}

// Any 2xx is success; the body is returned for callers that decode it.
// A body that cannot be read fails like the request itself.
async fn success_body(response: Response, signal: Option<&AbortSignal>) -> Result<String, ApiError> {
    let body = response.text().await.map_err(|e| transport_error(e, signal))?;
    status_outcome(response.ok(), response.status(), body)
}

fn status_outcome(ok: bool, status: u16, body: String) -> Result<String, ApiError> {
    if ok {
        Ok(body)
    } else {
        Err(ApiError::Status { status, body })
    }
}
