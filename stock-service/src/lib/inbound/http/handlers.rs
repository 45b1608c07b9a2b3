use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::identity::errors::AuthError;
use crate::quote::errors::QuoteError;

pub mod get_quote;
pub mod login;
pub mod logout;
pub mod signup;
pub mod validate;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    ServiceUnavailable(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateEmail => ApiError::BadRequest(err.to_string()),
            AuthError::InvalidEmail(_) | AuthError::WeakPassword(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::RevokedToken
            | AuthError::UserNotFound => ApiError::Unauthorized(err.to_string()),
            AuthError::MissingCredentials => ApiError::Forbidden(err.to_string()),
            AuthError::Database(_) | AuthError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::InvalidSymbol(_) => ApiError::UnprocessableEntity(err.to_string()),
            QuoteError::NoData(_) => ApiError::NotFound(err.to_string()),
            QuoteError::Upstream(_) => ApiError::ServiceUnavailable(err.to_string()),
            QuoteError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_mapping() {
        assert!(matches!(
            ApiError::from(AuthError::DuplicateEmail),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::RevokedToken),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(AuthError::MissingCredentials),
            ApiError::Forbidden(_)
        ));
    }

    #[test]
    fn test_revoked_token_message_is_distinguishable() {
        let revoked = ApiError::from(AuthError::RevokedToken);
        let invalid = ApiError::from(AuthError::InvalidToken);

        assert_eq!(
            revoked,
            ApiError::Unauthorized("Token has been revoked".to_string())
        );
        assert_ne!(revoked, invalid);
    }

    #[test]
    fn test_quote_error_status_mapping() {
        assert!(matches!(
            ApiError::from(QuoteError::NoData("FAKE".to_string())),
            ApiError::NotFound(_)
        ));
        assert_eq!(
            ApiError::from(QuoteError::Upstream("status 500".to_string())),
            ApiError::ServiceUnavailable("Unable to fetch stock data".to_string())
        );
        assert_eq!(
            ApiError::from(QuoteError::Unknown("decode error".to_string())),
            ApiError::InternalServerError("An error occurred while fetching stock data".to_string())
        );
    }
}
