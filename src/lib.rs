//! Job openings API: validated CRUD over a SQLite-backed record store, served with axum.

pub mod config;
pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use docs::ApiDoc;
pub use error::{AppError, ConfigError};
pub use model::{NewOpening, Opening, OpeningPatch};
pub use response::{success_many, success_message, success_one, success_one_with_message};
pub use routes::{app, common_routes, common_routes_with_ready, opening_routes, API_BASE};
pub use service::{ListPolicy, OpeningService, OpeningValidator};
pub use state::AppState;
pub use store::{ensure_schema, OpeningStore, SqliteOpeningStore};
