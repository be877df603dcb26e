//! HTTP entry point for the backend API.
//!
//! Two timeout profiles: 30 s for everything, 300 s for the cache refresh
//! (a full upstream re-scrape). Cross-cutting behavior lives here so pages
//! never deal with it:
//!
//! - `Authorization: Bearer <token>` is attached from storage when present,
//!   plus an `X-Debug-Mode` header in debug mode.
//! - A 401 from any endpoint clears the stored session and redirects to the
//!   catalog, unless the user is already on an auth-related path.
//! - Idempotent GETs retry on *network* errors with bounded exponential
//!   backoff; mutations never retry.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, FormData};

use shared::dto::auth::ErrorResponse;

use crate::platform::telegram;
use crate::storage;
use crate::utils::constants::{
    API_BASE, DEFAULT_TIMEOUT_MS, GET_RETRY_BASE_DELAY_MS, GET_RETRY_LIMIT, KEY_AUTH_TOKEN,
    KEY_INIT_DATA, LONG_OPERATION_TIMEOUT_MS,
};
use crate::utils::navigation::{current_path, redirect_to, routes, should_redirect_on_unauthorized};

/// Errors an endpoint call can produce, by origin.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure: DNS, refused connection, CORS.
    #[error("Ошибка подключения: {0}")]
    Network(String),
    /// Non-2xx status with the backend `detail` when it sent one.
    #[error("{detail}")]
    Http { status: u16, detail: String },
    /// 2xx with a body that does not match the DTO.
    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
    /// The request hit its timeout profile.
    #[error("Превышено время ожидания запроса")]
    Timeout,
    /// Cancelled through an [`AbortHandle`].
    #[error("Запрос отменён")]
    Aborted,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

/// Caller-side cancellation for long-running requests. Cloneable so the UI
/// keeps one end while the in-flight request owns the other.
#[derive(Clone, Default)]
pub struct AbortHandle {
    controller: Rc<RefCell<Option<AbortController>>>,
    cancelled: Rc<Cell<bool>>,
}

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.cancelled.set(true);
        if let Some(controller) = self.controller.borrow().as_ref() {
            controller.abort();
        }
    }

    fn attach(&self, controller: &AbortController) {
        *self.controller.borrow_mut() = Some(controller.clone());
    }

    fn was_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

fn with_auth_headers(builder: RequestBuilder) -> RequestBuilder {
    let mut builder = builder;
    if let Some(token) = storage::get_raw(KEY_AUTH_TOKEN) {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    if telegram::debug_mode_enabled() {
        builder = builder.header("X-Debug-Mode", "1");
    }
    builder
}

/// Session teardown on 401: drop the stored credentials and send the user
/// back to the catalog unless they are already on an auth screen.
fn handle_unauthorized() {
    storage::remove_item(KEY_AUTH_TOKEN);
    storage::remove_item(KEY_INIT_DATA);
    if should_redirect_on_unauthorized(&current_path()) {
        redirect_to(routes::CARS);
    }
}

async fn decode_failure(path: &str, response: Response) -> ApiError {
    let status = response.status();
    let detail = match response.json::<ErrorResponse>().await {
        Ok(body) => body.detail,
        Err(_) => format!("HTTP {status}"),
    };
    log::error!("API error: {status} {path}: {detail}");
    if status == 401 {
        handle_unauthorized();
    }
    ApiError::Http { status, detail }
}

async fn decode_body<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|err| {
        log::error!("API decode error: {path}: {err}");
        ApiError::Decode(err.to_string())
    })
}

/// One configured exchange: a fresh abort controller shared by the timeout
/// guard and (optionally) a caller's [`AbortHandle`].
struct Exchange {
    controller: Option<AbortController>,
    timeout_ms: u32,
    handle: Option<AbortHandle>,
}

impl Exchange {
    fn new(timeout_ms: u32, handle: Option<&AbortHandle>) -> Self {
        let controller = AbortController::new().ok();
        if let (Some(controller), Some(handle)) = (&controller, handle) {
            handle.attach(controller);
        }
        Exchange { controller, timeout_ms, handle: handle.cloned() }
    }

    fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    async fn run(
        self,
        path: &str,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        let request = request.map_err(|err| ApiError::Network(err.to_string()))?;

        let timed_out = Rc::new(Cell::new(false));
        let timeout_guard = self.controller.as_ref().map(|controller| {
            let controller = controller.clone();
            let timed_out = Rc::clone(&timed_out);
            gloo_timers::callback::Timeout::new(self.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        });

        let result = request.send().await;
        if let Some(guard) = timeout_guard {
            guard.cancel();
        }

        match result {
            Ok(response) => {
                if response.ok() {
                    Ok(response)
                } else {
                    Err(decode_failure(path, response).await)
                }
            }
            Err(err) => {
                if timed_out.get() {
                    log::error!("API timeout: {path}");
                    Err(ApiError::Timeout)
                } else if self.handle.as_ref().is_some_and(AbortHandle::was_cancelled) {
                    log::warn!("API request cancelled: {path}");
                    Err(ApiError::Aborted)
                } else {
                    log::error!("API network error: {path}: {err}");
                    Err(ApiError::Network(err.to_string()))
                }
            }
        }
    }
}

async fn get_once<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let full = if query.is_empty() {
        url(path)
    } else {
        let encoded: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect();
        format!("{}?{}", url(path), encoded.join("&"))
    };
    let exchange = Exchange::new(DEFAULT_TIMEOUT_MS, None);
    let signal = exchange.signal();
    let request = with_auth_headers(Request::get(&full))
        .abort_signal(signal.as_ref())
        .build();
    let response = exchange.run(path, request).await?;
    decode_body(path, response).await
}

/// GET with query parameters. Retries network failures only; HTTP errors
/// (including 401) pass straight through.
pub async fn get_with_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let mut attempt = 0u32;
    loop {
        match get_once(path, query).await {
            Err(ApiError::Network(err)) if attempt < GET_RETRY_LIMIT => {
                let delay = GET_RETRY_BASE_DELAY_MS * 2u32.pow(attempt);
                log::warn!("GET {path} failed ({err}), retry {} in {delay}ms", attempt + 1);
                gloo_timers::future::TimeoutFuture::new(delay).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get_with_query(path, &[]).await
}

pub async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let exchange = Exchange::new(DEFAULT_TIMEOUT_MS, None);
    let signal = exchange.signal();
    let request = with_auth_headers(Request::post(&url(path)))
        .abort_signal(signal.as_ref())
        .json(body);
    let response = exchange.run(path, request).await?;
    decode_body(path, response).await
}

/// POST with the long-operation profile and caller-side cancellation;
/// only the cache refresh uses this.
pub async fn post_long<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    handle: &AbortHandle,
) -> Result<T, ApiError> {
    let exchange = Exchange::new(LONG_OPERATION_TIMEOUT_MS, Some(handle));
    let signal = exchange.signal();
    let request = with_auth_headers(Request::post(&url(path)))
        .abort_signal(signal.as_ref())
        .json(body);
    let response = exchange.run(path, request).await?;
    decode_body(path, response).await
}

pub async fn put<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let exchange = Exchange::new(DEFAULT_TIMEOUT_MS, None);
    let signal = exchange.signal();
    let request = with_auth_headers(Request::put(&url(path)))
        .abort_signal(signal.as_ref())
        .json(body);
    let response = exchange.run(path, request).await?;
    decode_body(path, response).await
}

pub async fn patch<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let exchange = Exchange::new(DEFAULT_TIMEOUT_MS, None);
    let signal = exchange.signal();
    let request = with_auth_headers(Request::patch(&url(path)))
        .abort_signal(signal.as_ref())
        .json(body);
    let response = exchange.run(path, request).await?;
    decode_body(path, response).await
}

pub async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let exchange = Exchange::new(DEFAULT_TIMEOUT_MS, None);
    let signal = exchange.signal();
    let request = with_auth_headers(Request::delete(&url(path)))
        .abort_signal(signal.as_ref())
        .build();
    let response = exchange.run(path, request).await?;
    decode_body(path, response).await
}

/// Multipart upload (contract templates). The browser sets the boundary
/// header itself, so no explicit content type here.
pub async fn post_form<T: DeserializeOwned>(path: &str, form: &FormData) -> Result<T, ApiError> {
    let exchange = Exchange::new(DEFAULT_TIMEOUT_MS, None);
    let signal = exchange.signal();
    let request = with_auth_headers(Request::post(&url(path)))
        .abort_signal(signal.as_ref())
        .body(JsValue::from(form.clone()));
    let response = exchange.run(path, request).await?;
    decode_body(path, response).await
}
