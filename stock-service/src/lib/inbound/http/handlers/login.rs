use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::LoginCommand;
use crate::identity::ports::AuthServicePort;
use crate::identity::ports::UserRepository;
use crate::inbound::http::router::AppState;
use crate::quote::ports::QuoteFetcher;

pub async fn login<R, F>(
    State(state): State<AppState<R, F>>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError>
where
    R: UserRepository,
    F: QuoteFetcher,
{
    // A syntactically invalid email cannot belong to any account; answer
    // exactly as for wrong credentials
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::Unauthorized("Incorrect email or password".to_string()))?;

    let access_token = state
        .auth_service
        .login(LoginCommand::new(email, body.password))
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token,
            token_type: "bearer".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
}
