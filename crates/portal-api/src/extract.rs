//! Request extractors whose rejections use the API error envelope

use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::error::ApiError;

/// `Json<T>` that answers malformed or mistyped bodies with an [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.status(), rejection.body_text())
    }
}
