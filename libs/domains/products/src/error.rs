use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// The id is kept for logs; clients only see the fixed message.
    #[error("Product not found")]
    NotFound(String),

    #[error("Invalid product data: check field types and values")]
    InvalidData,
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        let message = err.to_string();
        match err {
            ProductError::NotFound(id) => {
                tracing::debug!(product_id = %id, "Product lookup missed");
                AppError::not_found(message)
            }
            ProductError::InvalidData => AppError::validation(message),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::INVALID_PRODUCT_MESSAGE;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: AppError = ProductError::NotFound("9".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn test_invalid_data_maps_to_400() {
        assert_eq!(ProductError::InvalidData.to_string(), INVALID_PRODUCT_MESSAGE);

        let response = ProductError::InvalidData.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
