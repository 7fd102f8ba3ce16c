//! Opening record and the validated inputs that create or patch it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A job opening as persisted and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Opening {
    pub id: i64,
    pub role: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    pub link: String,
    pub remote: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker. Rows with a value here are never returned.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create payload after validation. `remote` has already been defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOpening {
    pub role: String,
    pub company: String,
    pub location: String,
    pub salary: f64,
    pub link: String,
    pub remote: bool,
}

/// Update payload after validation. `None` means the field was not supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpeningPatch {
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub link: Option<String>,
    pub remote: Option<bool>,
}

impl OpeningPatch {
    /// Replace every supplied field whose value differs from `opening`.
    /// Returns whether anything changed. Timestamps are left to the caller.
    pub fn apply(&self, opening: &mut Opening) -> bool {
        let mut changed = false;
        changed |= replace_if_differs(&mut opening.role, &self.role);
        changed |= replace_if_differs(&mut opening.company, &self.company);
        changed |= replace_if_differs(&mut opening.location, &self.location);
        changed |= replace_if_differs(&mut opening.salary, &self.salary);
        changed |= replace_if_differs(&mut opening.link, &self.link);
        changed |= replace_if_differs(&mut opening.remote, &self.remote);
        changed
    }

    pub fn is_empty(&self) -> bool {
        *self == OpeningPatch::default()
    }
}

fn replace_if_differs<T: PartialEq + Clone>(current: &mut T, incoming: &Option<T>) -> bool {
    match incoming {
        Some(v) if v != current => {
            *current = v.clone();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Opening {
        let now = Utc::now();
        Opening {
            id: 1,
            role: "Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            salary: 1000.0,
            link: "https://acme.test/job".into(),
            remote: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut opening = sample();
        let before = opening.clone();
        assert!(OpeningPatch::default().is_empty());
        assert!(!OpeningPatch::default().apply(&mut opening));
        assert_eq!(opening, before);
    }

    #[test]
    fn patch_with_identical_values_is_a_no_op() {
        let mut opening = sample();
        let before = opening.clone();
        let patch = OpeningPatch {
            role: Some("Engineer".into()),
            salary: Some(1000.0),
            remote: Some(true),
            ..Default::default()
        };
        assert!(!patch.apply(&mut opening));
        assert_eq!(opening, before);
    }

    #[test]
    fn patch_replaces_only_differing_fields() {
        let mut opening = sample();
        let patch = OpeningPatch {
            salary: Some(2500.0),
            company: Some("Acme".into()),
            ..Default::default()
        };
        assert!(patch.apply(&mut opening));
        assert_eq!(opening.salary, 2500.0);
        assert_eq!(opening.company, "Acme");
        assert_eq!(opening.role, "Engineer");
        assert_eq!(opening.link, "https://acme.test/job");
    }

    #[test]
    fn opening_serializes_snake_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        for key in ["id", "role", "company", "location", "salary", "link", "remote", "created_at", "updated_at", "deleted_at"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["deleted_at"].is_null());
    }
}
