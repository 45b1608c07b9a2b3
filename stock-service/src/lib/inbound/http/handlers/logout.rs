use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::identity::ports::AuthServicePort;
use crate::identity::ports::UserRepository;
use crate::inbound::http::middleware::bearer_token;
use crate::inbound::http::router::AppState;
use crate::quote::ports::QuoteFetcher;

/// Logout requires a syntactically well-formed bearer token but not a
/// valid one: revoking an already expired or already revoked token is
/// harmless and permitted.
pub async fn logout<R, F>(
    State(state): State<AppState<R, F>>,
    headers: HeaderMap,
) -> Result<ApiSuccess<LogoutResponseData>, ApiError>
where
    R: UserRepository,
    F: QuoteFetcher,
{
    let token = bearer_token(&headers)?;

    state.auth_service.logout(token).await;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LogoutResponseData {
            message: "Successfully logged out".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
