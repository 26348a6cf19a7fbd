use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorMessage;
use crate::store::StoreError;

/// The two ways a wallet request fails. Store failures are not classified further:
/// a missing id and a broken connection both surface as 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    ClientInput(String),
    #[error(transparent)]
    StoreOperation(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ClientInput(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ClientInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::ClientInput(message) => tracing::warn!("Rejected request body: {}", message),
            ApiError::StoreOperation(e) => tracing::error!("Store operation failed: {:?}", e),
        }
        (status, Json(ErrorMessage::new(self.to_string()))).into_response()
    }
}
