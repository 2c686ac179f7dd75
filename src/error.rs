use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Command(#[from] mealplanner_shared::Error),

    #[error(transparent)]
    Query(#[from] anyhow::Error),

    #[error("{0}")]
    BadRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Command(mealplanner_shared::Error::NotFound(message.into()))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use mealplanner_shared::Error;

        let (status, message) = match self {
            ApiError::BadRequest(message)
            | ApiError::Command(Error::User(message)) => (StatusCode::BAD_REQUEST, message),
            ApiError::Command(Error::Validate(errors)) => {
                (StatusCode::BAD_REQUEST, errors.to_string())
            }
            ApiError::Command(Error::NotFound(message)) => (StatusCode::NOT_FOUND, message),
            ApiError::Command(Error::Server(message)) => return internal(message),
            ApiError::Command(Error::Unknown(err)) | ApiError::Query(err) => {
                return internal(err.to_string());
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn internal(message: String) -> Response {
    tracing::error!(err = message, "request failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "message": message,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                ApiError::Command(mealplanner_shared::Error::User("bad".to_owned())),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::bad_request("bad"), StatusCode::BAD_REQUEST),
            (ApiError::not_found("missing"), StatusCode::NOT_FOUND),
            (
                ApiError::Command(mealplanner_shared::Error::Server("boom".to_owned())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::Query(anyhow::anyhow!("store unavailable")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
