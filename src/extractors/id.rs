//! Extract the opening id from the `id` query parameter.

use crate::error::AppError;
use crate::service::OpeningValidator;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;

/// Query parameter name carrying the opening id.
pub const ID_PARAM: &str = "id";

/// Required, positive integer id from `?id=`. Missing or malformed ids are a 400.
#[derive(Clone, Copy, Debug)]
pub struct OpeningId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for OpeningId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("invalid query string".into()))?;
        let raw = params
            .get(ID_PARAM)
            .ok_or_else(|| AppError::BadRequest("id is required".into()))?;
        OpeningValidator::parse_id(raw).map(OpeningId)
    }
}
