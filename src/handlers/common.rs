use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::error::{AppError, AppResult};

/// JSON body extractor whose rejections surface as validation errors
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Reject empty identifiers
pub fn require_id<'a>(id: &'a str, resource: &str) -> AppResult<&'a str> {
    if id.is_empty() {
        return Err(AppError::NotFound(resource.to_string()));
    }
    Ok(id)
}
