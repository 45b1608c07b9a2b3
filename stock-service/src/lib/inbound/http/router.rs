use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_quote::get_quote;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::signup::signup;
use super::handlers::validate::validate_token;
use super::middleware::authenticate as auth_middleware;
use crate::domain::identity::service::AuthService;
use crate::domain::quote::service::QuoteService;
use crate::identity::ports::UserRepository;
use crate::quote::ports::QuoteFetcher;

pub struct AppState<R, F>
where
    R: UserRepository,
    F: QuoteFetcher,
{
    pub auth_service: Arc<AuthService<R>>,
    pub quote_service: Arc<QuoteService<F>>,
}

// Manual impl: deriving would demand R: Clone and F: Clone for no reason
impl<R, F> Clone for AppState<R, F>
where
    R: UserRepository,
    F: QuoteFetcher,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            quote_service: Arc::clone(&self.quote_service),
        }
    }
}

pub fn create_router<R, F>(
    auth_service: Arc<AuthService<R>>,
    quote_service: Arc<QuoteService<F>>,
) -> Router
where
    R: UserRepository,
    F: QuoteFetcher,
{
    let state = AppState {
        auth_service,
        quote_service,
    };

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/auth/signup", post(signup::<R, F>))
        .route("/auth/login", post(login::<R, F>))
        // Logout extracts the bearer itself: an expired token can still be
        // revoked, which the validating middleware would reject
        .route("/auth/logout", post(logout::<R, F>));

    let protected_routes = Router::new()
        .route("/auth/validate", get(validate_token))
        .route("/stocks/quote/:symbol", get(get_quote::<R, F>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<R, F>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Stock Price Checker API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}
