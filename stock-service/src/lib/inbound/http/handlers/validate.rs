use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// The middleware has already run the full pipeline; this handler just
/// echoes who the token resolved to.
pub async fn validate_token(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, user.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<AuthenticatedUser> for UserData {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id.0,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
