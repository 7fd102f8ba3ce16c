//! Request extractors that reject with `AppError` so failures share the error envelope.

pub mod id;
pub mod json;
pub use id::OpeningId;
pub use json::JsonObject;
