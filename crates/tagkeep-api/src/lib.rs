//! tagkeep-api - HTTP API for the tagkeep tag service
//!
//! Routes:
//! - `GET  /api/tags?q=<q>` search by name substring
//! - `GET  /api/tag/:id`    fetch one tag
//! - `POST /api/tag`        create a tag
//! - `PUT  /api/tag/:id`    update a tag
//! - `GET  /health`         liveness

pub mod config;
pub mod error;
pub mod handlers;

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Request, State},
    http::{header, HeaderValue, Method, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use governor::{Quota, RateLimiter};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use tagkeep_core::TagRepository;

pub use config::{ServerConfig, DEFAULT_LOG_FILTER};
pub use error::ApiError;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// STATE
// =============================================================================

pub type GlobalRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record store backing the tag routes.
    pub tags: Arc<dyn TagRepository>,
    /// Global rate limiter (None if rate limiting is disabled).
    pub rate_limiter: Option<Arc<GlobalRateLimiter>>,
}

impl AppState {
    pub fn new(tags: Arc<dyn TagRepository>) -> Self {
        Self {
            tags,
            rate_limiter: None,
        }
    }

    pub fn with_rate_limiter(mut self, limiter: Option<Arc<GlobalRateLimiter>>) -> Self {
        self.rate_limiter = limiter;
        self
    }
}

/// Build the global rate limiter described by `config`, if enabled.
///
/// Allows `rate_limit_requests` per `rate_limit_period_secs`, all of which may
/// be spent in a burst.
pub fn build_rate_limiter(config: &ServerConfig) -> Option<Arc<GlobalRateLimiter>> {
    if !config.rate_limit_enabled {
        return None;
    }

    let burst = NonZeroU32::new(config.rate_limit_requests);
    let period = Duration::from_secs(config.rate_limit_period_secs);
    let quota = burst.and_then(|burst| {
        Quota::with_period(period / burst.get()).map(|quota| quota.allow_burst(burst))
    });

    match quota {
        Some(quota) => Some(Arc::new(RateLimiter::direct(quota))),
        None => {
            tracing::warn!(
                requests = config.rate_limit_requests,
                period_secs = config.rate_limit_period_secs,
                "Rate limit quota must be non-zero; rate limiting disabled"
            );
            None
        }
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the application router with its middleware stack.
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/tags", get(handlers::tags::search_tags))
        .route("/api/tag", post(handlers::tags::create_tag))
        .route(
            "/api/tag/:id",
            get(handlers::tags::get_tag).put(handlers::tags::update_tag),
        )
        .fallback(route_not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer(&config.allowed_origins))
        .layer(CatchPanicLayer::new())
        // Enforced by the `Json` extractor, so oversized bodies are reported
        // through `ApiError` (413 with the JSON error body).
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(limiter) = &state.rate_limiter {
        if limiter.check().is_err() {
            tracing::warn!("Rate limit exceeded");
            return ApiError::RateLimited.into_response();
        }
    }
    next.run(request).await
}

/// Unmatched routes look the same to callers as missing records.
async fn route_not_found(uri: Uri) -> ApiError {
    tagkeep_core::Error::NotFound(format!("No route for {}", uri.path())).into()
}

// =============================================================================
// HEALTH CHECK
// =============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
