//! Opening operations: validation, store access, and not-found handling.

use crate::error::AppError;
use crate::model::Opening;
use crate::service::OpeningValidator;
use crate::store::OpeningStore;
use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::Arc;

/// What `list` returns when there are no live openings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListPolicy {
    /// 200 with an empty collection.
    #[default]
    EmptyOk,
    /// 404, for clients built against the legacy contract.
    EmptyIsNotFound,
}

#[derive(Clone)]
pub struct OpeningService {
    store: Arc<dyn OpeningStore>,
    list_policy: ListPolicy,
}

impl OpeningService {
    pub fn new(store: Arc<dyn OpeningStore>, list_policy: ListPolicy) -> Self {
        Self { store, list_policy }
    }

    pub fn store(&self) -> &dyn OpeningStore {
        self.store.as_ref()
    }

    pub async fn get(&self, id: i64) -> Result<Opening, AppError> {
        self.store.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, body: &Map<String, Value>) -> Result<Opening, AppError> {
        let new = OpeningValidator::validate_create(body)?;
        let opening = self.store.create(&new).await?;
        tracing::info!(id = opening.id, "opening created");
        Ok(opening)
    }

    /// Partial update. Fields equal to the stored value are skipped; when nothing differs
    /// the stored record is returned as-is and nothing is written.
    pub async fn update(&self, body: &Map<String, Value>) -> Result<Opening, AppError> {
        let (id, patch) = OpeningValidator::validate_update(body)?;
        let mut opening = self.get(id).await?;
        if !patch.apply(&mut opening) {
            return Ok(opening);
        }
        opening.updated_at = Utc::now();
        if !self.store.save(&opening).await? {
            return Err(not_found(id));
        }
        tracing::info!(id, "opening updated");
        Ok(opening)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(id, "opening deleted");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Opening>, AppError> {
        let openings = self.store.find_all().await?;
        if openings.is_empty() && self.list_policy == ListPolicy::EmptyIsNotFound {
            return Err(AppError::NotFound("no openings found".into()));
        }
        Ok(openings)
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("opening with id {} not found", id))
}
