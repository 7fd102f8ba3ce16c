//! OpenAPI document for the opening routes. The request and envelope types here exist only
//! to describe the wire shape; handlers validate untyped JSON.

use crate::error::ErrorBody;
use crate::model::Opening;
use crate::response::MessageBody;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct CreateOpeningRequest {
    #[schema(example = "Engineer")]
    pub role: String,
    #[schema(example = "Acme")]
    pub company: String,
    #[schema(example = "Remote")]
    pub location: String,
    /// Must be greater than 0.
    #[schema(example = 1000)]
    pub salary: f64,
    /// Absolute URL with a host.
    #[schema(example = "https://acme.test/job")]
    pub link: String,
    /// Defaults to false.
    pub remote: Option<bool>,
}

/// Only `id` is required. Supplied fields replace the stored value when they differ.
#[derive(Serialize, ToSchema)]
pub struct UpdateOpeningRequest {
    pub id: i64,
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub link: Option<String>,
    pub remote: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct OpeningEnvelope {
    pub message: Option<String>,
    pub data: Opening,
}

#[derive(Serialize, ToSchema)]
pub struct OpeningListEnvelope {
    pub data: Vec<Opening>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Job Openings API"),
    paths(
        crate::handlers::opening::get_opening,
        crate::handlers::opening::create_opening,
        crate::handlers::opening::update_opening,
        crate::handlers::opening::delete_opening,
        crate::handlers::opening::list_openings,
    ),
    components(schemas(
        Opening,
        CreateOpeningRequest,
        UpdateOpeningRequest,
        OpeningEnvelope,
        OpeningListEnvelope,
        MessageBody,
        ErrorBody,
    )),
    tags((name = "openings", description = "Job opening records"))
)]
pub struct ApiDoc;
