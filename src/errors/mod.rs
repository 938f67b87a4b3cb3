use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use std::fmt;

use crate::constants::{
    ERR_INCORRECT_CREDENTIALS, ERR_INTERNAL, ERR_INVALID_ROLE, ERR_UNAUTHORIZED, ERR_USER_EXISTS,
    ERR_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;
use crate::repositories::RepositoryError;
use crate::services::{AuthError, TokenError};

/// Errors returned by handlers, rendered as the `{code, message, data}` envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    UnsupportedMediaType(String),
    ValidationError(Vec<String>),
    ServiceUnavailable(String),
    InternalServerError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
            ApiError::Unauthorized(message) => write!(f, "Unauthorized: {}", message),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Conflict(message) => write!(f, "Conflict: {}", message),
            ApiError::UnsupportedMediaType(message) => {
                write!(f, "Unsupported Media Type: {}", message)
            }
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
            ApiError::ServiceUnavailable(message) => {
                write!(f, "Service Unavailable: {}", message)
            }
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (message, data) = match self {
            ApiError::ValidationError(errors) => {
                (ERR_VALIDATION_FAILED.to_string(), Some(errors.clone()))
            }
            ApiError::BadRequest(message)
            | ApiError::Unauthorized(message)
            | ApiError::NotFound(message)
            | ApiError::Conflict(message)
            | ApiError::UnsupportedMediaType(message)
            | ApiError::ServiceUnavailable(message)
            | ApiError::InternalServerError(message) => (message.clone(), None),
        };

        HttpResponse::build(status).json(ErrorResponse {
            code: status.as_u16(),
            message,
            data,
        })
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::EmailAlreadyRegistered(_) => {
                ApiError::Conflict(ERR_USER_EXISTS.to_string())
            }
            RepositoryError::InvalidRole(_) => {
                ApiError::ValidationError(vec![ERR_INVALID_ROLE.to_string()])
            }
            other => {
                error!("Repository failure: {}", other);
                ApiError::InternalServerError(ERR_INTERNAL.to_string())
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(_) | TokenError::LifetimeOutOfRange(_) => {
                error!("Token issuance failed: {}", err);
                ApiError::InternalServerError(ERR_INTERNAL.to_string())
            }
            rejected => {
                warn!("Bearer token rejected: {}", rejected);
                ApiError::Unauthorized(ERR_UNAUTHORIZED.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UnknownUser | AuthError::Credential(_) => {
                ApiError::Unauthorized(ERR_INCORRECT_CREDENTIALS.to_string())
            }
            AuthError::Token(token_error) => token_error.into(),
            AuthError::Repository(repository_error) => repository_error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::HashError;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{json, Value};

    async fn body_json(err: ApiError) -> Value {
        let body = to_bytes(err.error_response().into_body())
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[actix_web::test]
    async fn renders_envelope_with_status_code() {
        let body = body_json(ApiError::Conflict(ERR_USER_EXISTS.to_string())).await;

        assert_eq!(
            body,
            json!({ "code": 409, "message": ERR_USER_EXISTS, "data": null })
        );
    }

    #[actix_web::test]
    async fn validation_errors_go_into_data() {
        let err = ApiError::ValidationError(vec!["role must be either 'admin' or 'member'".into()]);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(err).await;
        assert_eq!(body["code"], 422);
        assert_eq!(body["message"], ERR_VALIDATION_FAILED);
        assert_eq!(body["data"][0], "role must be either 'admin' or 'member'");
    }

    #[rstest]
    #[case(AuthError::UnknownUser)]
    #[case(AuthError::Credential(HashError::InvalidCredential))]
    #[case(AuthError::Credential(HashError::MalformedDigest))]
    fn credential_failures_share_one_message(#[case] err: AuthError) {
        assert_eq!(
            ApiError::from(err),
            ApiError::Unauthorized(ERR_INCORRECT_CREDENTIALS.to_string())
        );
    }

    #[rstest]
    #[case(TokenError::InvalidToken)]
    #[case(TokenError::NoClaims)]
    #[case(TokenError::Expired)]
    fn token_failures_share_one_message(#[case] err: TokenError) {
        assert_eq!(
            ApiError::from(err),
            ApiError::Unauthorized(ERR_UNAUTHORIZED.to_string())
        );
    }

    #[rstest]
    #[case(RepositoryError::Storage("socket closed".into()))]
    #[case(RepositoryError::Cancelled)]
    #[case(RepositoryError::Hash(HashError::InputTooLong))]
    fn infrastructure_failures_hide_details(#[case] err: RepositoryError) {
        assert_eq!(
            ApiError::from(err),
            ApiError::InternalServerError(ERR_INTERNAL.to_string())
        );
    }

    #[rstest]
    #[case(TokenError::Signing("bad key".into()))]
    #[case(TokenError::LifetimeOutOfRange(i64::MAX))]
    fn token_issuance_failures_are_internal(#[case] err: TokenError) {
        assert_eq!(
            ApiError::from(err),
            ApiError::InternalServerError(ERR_INTERNAL.to_string())
        );
    }

    #[test]
    fn duplicate_email_is_conflict() {
        let err = RepositoryError::EmailAlreadyRegistered("ada@example.com".into());
        assert_eq!(
            ApiError::from(err),
            ApiError::Conflict(ERR_USER_EXISTS.to_string())
        );
    }
}
