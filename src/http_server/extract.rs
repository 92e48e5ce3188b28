//! Request extraction
//!
//! Wraps axum's `Json` and `Path` extractors so their rejections render
//! as `ApiError` bodies:
//! - every body rejection (bad syntax, missing or mistyped field, wrong
//!   content type, oversized body) becomes a 422
//! - an item identifier that cannot be decoded is a 404, like any other
//!   identifier that matches no record

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::errors::ApiError;

/// JSON body extractor rejecting with `ApiError::Validation`
#[derive(Debug, Clone)]
pub struct ItemJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ItemJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Item identifier from the path, rejecting with `ApiError::NotFound`
#[derive(Debug, Clone)]
pub struct ItemId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;
        Ok(Self(id))
    }
}
