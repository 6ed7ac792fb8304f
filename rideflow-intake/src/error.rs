use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rideflow_store::PublishError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Persistence(sqlx::Error),
    Publish(PublishError),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Persistence(err) => {
                tracing::error!("Ride persistence failed: {}", err);
                internal(err.to_string())
            }
            AppError::Publish(err) => {
                tracing::error!("Event publish failed: {}", err);
                internal(err.to_string())
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal error: {}", err);
                internal(err.to_string())
            }
        }
    }
}

fn internal(details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal error", "details": details })),
    )
        .into_response()
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err)
    }
}

impl From<PublishError> for AppError {
    fn from(err: PublishError) -> Self {
        Self::Publish(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}
