use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_helpers::ErrorResponse;
use thiserror::Error;

use crate::models::Attribute;

/// Caller input errors surfaced by the catalog endpoints.
///
/// The catalog is static and the query pipeline is pure computation, so
/// there is no transient class to retry and no internal fault variant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A min/max pair is inverted for the named attribute.
    #[error("{0} min cannot exceed max")]
    InvalidRange(Attribute),

    /// An enumerated or bounded parameter holds a value outside its
    /// allow-list.
    #[error("{message}")]
    InvalidParam {
        field: &'static str,
        message: String,
    },

    /// No product carries the requested identifier.
    #[error("product not found")]
    NotFound,
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::InvalidRange(_) => "INVALID_RANGE",
            CatalogError::InvalidParam { .. } => "INVALID_PARAM",
            CatalogError::NotFound => "NOT_FOUND",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn field(&self) -> Option<String> {
        match self {
            CatalogError::InvalidRange(attribute) => Some(attribute.to_string()),
            CatalogError::InvalidParam { field, .. } => Some((*field).to_string()),
            CatalogError::NotFound => None,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let mut body = ErrorResponse::new(self.code(), self.to_string());
        if let Some(field) = self.field() {
            body = body.with_field(field);
        }
        (self.status(), Json(body)).into_response()
    }
}
