//! Error type returned by the HTTP layer.
//!
//! Repositories and services report missing records as `Ok(None)` or an
//! empty list; handlers convert those into [`CatalogError::NotFound`] and
//! let database failures flow through [`CatalogError::Database`].
//!
//! ```rust
//! use catalog::errors::CatalogError;
//!
//! let err = CatalogError::NotFound("Product".to_string());
//! assert_eq!(err.to_string(), "Product not found");
//! assert!(err.is_client_error());
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// No record for the requested identifier; holds the entity label
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Database(#[from] sea_orm::DbErr),
}

impl CatalogError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound(entity.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
