//! REST helpers for the document QA backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by the
//! configured deadline and abortable through its [`CancelToken`].
//! Server-side (SSR) and native tests: stubs returning an error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Non-2xx responses carry the
//! server's `detail` when the body has one. Callers turn errors into status
//! text and never panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::cancel::CancelToken;
use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::Endpoint;
use super::types::{AskResponse, HealthResponse, MessageResponse};
#[cfg(feature = "hydrate")]
use super::types::{AskRequest, DocumentListResponse};
use crate::config::ApiConfig;

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// Decode a 2xx response body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check backend liveness via `GET /health`.
///
/// # Errors
///
/// Returns an error if the backend is unreachable, answers non-2xx, or the
/// body does not decode.
pub async fn get_health(config: &ApiConfig, token: CancelToken) -> Result<HealthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&config.url(Endpoint::Health));
        transport::send(request, Endpoint::Health, config.request_timeout_ms, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(unavailable())
    }
}

/// Fetch the names of all ingested documents via `GET /list-documents`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn list_documents(config: &ApiConfig, token: CancelToken) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&config.url(Endpoint::ListDocuments));
        let body: DocumentListResponse =
            transport::send(request, Endpoint::ListDocuments, config.request_timeout_ms, token).await?;
        Ok(body.documents)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(unavailable())
    }
}

/// Upload one file as multipart field `file` via `POST /upload-document`.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// backend rejects the document.
#[cfg(feature = "hydrate")]
pub async fn upload_document(
    config: &ApiConfig,
    file: web_sys::File,
    token: CancelToken,
) -> Result<MessageResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let request = gloo_net::http::Request::post(&config.url(Endpoint::UploadDocument));
    transport::send_with_body(request, form.into(), Endpoint::UploadDocument, config.request_timeout_ms, token).await
}

/// Remove every document from the knowledge base via `POST /clear-documents`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend reports a failure.
pub async fn clear_documents(config: &ApiConfig, token: CancelToken) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&config.url(Endpoint::ClearDocuments));
        transport::send(request, Endpoint::ClearDocuments, config.request_timeout_ms, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(unavailable())
    }
}

/// Ask a question about the uploaded documents via `POST /ask`.
///
/// `query` must already be trimmed and non-empty; the shell validates it
/// before any request is issued.
///
/// # Errors
///
/// Returns an error if the request fails, the backend cannot answer, or the
/// body does not decode.
pub async fn ask(config: &ApiConfig, query: &str, token: CancelToken) -> Result<AskResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&config.url(Endpoint::Ask));
        let body = serde_json::to_string(&AskRequest { query }).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = request.header("Content-Type", "application/json");
        transport::send_with_body(request, body.into(), Endpoint::Ask, config.request_timeout_ms, token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, query, token);
        Err(unavailable())
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use std::future::Future;

    use futures::future::{Either, select};
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;
    use wasm_bindgen::JsValue;

    use super::decode_body;
    use crate::net::cancel::CancelToken;
    use crate::net::error::{ApiError, Endpoint};

    pub(super) async fn send<T: DeserializeOwned>(
        builder: RequestBuilder,
        endpoint: Endpoint,
        timeout_ms: u32,
        token: CancelToken,
    ) -> Result<T, ApiError> {
        dispatch(builder, None, endpoint, timeout_ms, token).await
    }

    pub(super) async fn send_with_body<T: DeserializeOwned>(
        builder: RequestBuilder,
        body: JsValue,
        endpoint: Endpoint,
        timeout_ms: u32,
        token: CancelToken,
    ) -> Result<T, ApiError> {
        dispatch(builder, Some(body), endpoint, timeout_ms, token).await
    }

    async fn dispatch<T: DeserializeOwned>(
        builder: RequestBuilder,
        body: Option<JsValue>,
        endpoint: Endpoint,
        timeout_ms: u32,
        token: CancelToken,
    ) -> Result<T, ApiError> {
        let controller = web_sys::AbortController::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let signal = controller.signal();
        let builder = builder.abort_signal(Some(&signal));
        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let exchange = async move {
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            read_json::<T>(resp).await
        };
        let outcome = token.run(with_deadline(exchange, timeout_ms)).await;

        if let Err(err) = &outcome {
            if matches!(err, ApiError::Cancelled | ApiError::Timeout(_)) {
                controller.abort();
            }
            if !err.is_cancelled() {
                leptos::logging::warn!("{} {} failed: {err}", endpoint.method(), endpoint.path());
            }
        }
        outcome
    }

    async fn with_deadline<T>(
        fut: impl Future<Output = Result<T, ApiError>>,
        timeout_ms: u32,
    ) -> Result<T, ApiError> {
        let fut = std::pin::pin!(fut);
        let timeout = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
        match select(fut, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
        }
    }

    async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_response(status, &body));
        }
        decode_body(&body)
    }
}
