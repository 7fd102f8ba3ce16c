//! Request validation for opening payloads.

use crate::error::AppError;
use crate::model::{NewOpening, OpeningPatch};
use serde_json::{Map, Value};
use url::Url;

pub struct OpeningValidator;

impl OpeningValidator {
    /// Validate a create body. Rules run in field order and the first failure is reported.
    pub fn validate_create(body: &Map<String, Value>) -> Result<NewOpening, AppError> {
        let role = required_text(body, "role")?;
        let company = required_text(body, "company")?;
        let location = required_text(body, "location")?;
        let salary = match present(body, "salary") {
            Some(v) => salary(v)?,
            None => return Err(AppError::Validation("salary is required".into())),
        };
        let link = match present(body, "link") {
            Some(v) => link(v)?,
            None => return Err(AppError::Validation("link is required".into())),
        };
        let remote = present(body, "remote").map(remote).transpose()?.unwrap_or(false);
        Ok(NewOpening {
            role,
            company,
            location,
            salary,
            link,
            remote,
        })
    }

    /// Validate an update body. Only `id` is required; any other field present must pass its create rule.
    pub fn validate_update(body: &Map<String, Value>) -> Result<(i64, OpeningPatch), AppError> {
        let id = match present(body, "id") {
            Some(Value::Number(n)) => n
                .as_i64()
                .filter(|n| *n > 0)
                .ok_or_else(|| AppError::BadRequest("id must be a positive integer".into()))?,
            Some(Value::String(s)) => Self::parse_id(s)?,
            Some(_) => return Err(AppError::BadRequest("id must be a positive integer".into())),
            None => return Err(AppError::BadRequest("id is required".into())),
        };
        let patch = OpeningPatch {
            role: present(body, "role").map(|v| text("role", v)).transpose()?,
            company: present(body, "company").map(|v| text("company", v)).transpose()?,
            location: present(body, "location").map(|v| text("location", v)).transpose()?,
            salary: present(body, "salary").map(salary).transpose()?,
            link: present(body, "link").map(link).transpose()?,
            remote: present(body, "remote").map(remote).transpose()?,
        };
        Ok((id, patch))
    }

    /// Parse an id taken from the query string or a string-typed body field.
    pub fn parse_id(raw: &str) -> Result<i64, AppError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::BadRequest("id is required".into()));
        }
        raw.parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| AppError::BadRequest("id must be a positive integer".into()))
    }
}

/// Field value, treating explicit null as absent.
fn present<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| !v.is_null())
}

fn required_text(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    match present(body, field) {
        Some(v) => text(field, v),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}

fn text(field: &str, v: &Value) -> Result<String, AppError> {
    match v.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        Some(_) => Err(AppError::Validation(format!("{} must not be empty", field))),
        None => Err(AppError::Validation(format!("{} must be a string", field))),
    }
}

fn salary(v: &Value) -> Result<f64, AppError> {
    let n = v
        .as_f64()
        .ok_or_else(|| AppError::Validation("salary must be a number".into()))?;
    if !n.is_finite() || n <= 0.0 {
        return Err(AppError::Validation("salary must be greater than 0".into()));
    }
    Ok(n)
}

fn link(v: &Value) -> Result<String, AppError> {
    let s = text("link", v)?;
    let s = s.trim();
    let url = Url::parse(s).map_err(|_| AppError::Validation("link must be a valid URL".into()))?;
    if url.host().is_none() {
        return Err(AppError::Validation("link must be a valid URL".into()));
    }
    Ok(s.to_string())
}

fn remote(v: &Value) -> Result<bool, AppError> {
    v.as_bool()
        .ok_or_else(|| AppError::Validation("remote must be a boolean".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    fn valid_body() -> Value {
        json!({
            "role": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "salary": 1000,
            "link": "https://acme.test/job",
            "remote": true
        })
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) | AppError::BadRequest(m) => m,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_create_body() {
        let new = OpeningValidator::validate_create(&obj(valid_body())).unwrap();
        assert_eq!(new.role, "Engineer");
        assert_eq!(new.salary, 1000.0);
        assert!(new.remote);
    }

    #[test]
    fn remote_defaults_to_false() {
        let mut body = obj(valid_body());
        body.remove("remote");
        assert!(!OpeningValidator::validate_create(&body).unwrap().remote);
        body.insert("remote".into(), Value::Null);
        assert!(!OpeningValidator::validate_create(&body).unwrap().remote);
    }

    #[test]
    fn rejects_non_positive_salary() {
        for bad in [json!(0), json!(-5), json!(-0.01)] {
            let mut body = obj(valid_body());
            body.insert("salary".into(), bad);
            let err = OpeningValidator::validate_create(&body).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
            assert_eq!(message(err), "salary must be greater than 0");
        }
    }

    #[test]
    fn rejects_malformed_link() {
        for bad in ["not-a-url", "https://", "mailto:someone"] {
            let mut body = obj(valid_body());
            body.insert("link".into(), json!(bad));
            let err = OpeningValidator::validate_create(&body).unwrap_err();
            assert_eq!(message(err), "link must be a valid URL", "input {bad}");
        }
    }

    #[test]
    fn link_is_stored_trimmed() {
        let mut body = obj(valid_body());
        body.insert("link".into(), json!("  https://acme.test/job  "));
        let new = OpeningValidator::validate_create(&body).unwrap();
        assert_eq!(new.link, "https://acme.test/job");

        let (_, patch) =
            OpeningValidator::validate_update(&obj(json!({ "id": 1, "link": "\thttps://acme.test/other\n" }))).unwrap();
        assert_eq!(patch.link.as_deref(), Some("https://acme.test/other"));
    }

    #[test]
    fn reports_first_violated_rule() {
        let body = obj(json!({ "company": "", "salary": 0 }));
        let err = OpeningValidator::validate_create(&body).unwrap_err();
        assert_eq!(message(err), "role is required");

        let body = obj(json!({ "role": "Engineer", "company": "  ", "salary": 0 }));
        let err = OpeningValidator::validate_create(&body).unwrap_err();
        assert_eq!(message(err), "company must not be empty");
    }

    #[test]
    fn rejects_wrong_types() {
        let mut body = obj(valid_body());
        body.insert("salary".into(), json!("1000"));
        assert_eq!(message(OpeningValidator::validate_create(&body).unwrap_err()), "salary must be a number");

        let mut body = obj(valid_body());
        body.insert("remote".into(), json!("yes"));
        assert_eq!(message(OpeningValidator::validate_create(&body).unwrap_err()), "remote must be a boolean");
    }

    #[test]
    fn update_requires_id() {
        let err = OpeningValidator::validate_update(&obj(json!({ "salary": 10 }))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(message(err), "id is required");

        let err = OpeningValidator::validate_update(&obj(json!({ "id": "abc" }))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn update_accepts_partial_body() {
        let (id, patch) = OpeningValidator::validate_update(&obj(json!({ "id": 7, "salary": 2000 }))).unwrap();
        assert_eq!(id, 7);
        assert_eq!(patch.salary, Some(2000.0));
        assert_eq!(patch.role, None);
        assert_eq!(patch.remote, None);

        let (id, patch) = OpeningValidator::validate_update(&obj(json!({ "id": "7" }))).unwrap();
        assert_eq!(id, 7);
        assert!(patch.is_empty());
    }

    #[test]
    fn update_validates_supplied_fields() {
        let err = OpeningValidator::validate_update(&obj(json!({ "id": 1, "salary": -1 }))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = OpeningValidator::validate_update(&obj(json!({ "id": 1, "link": "nope" }))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(OpeningValidator::parse_id(" 42 ").unwrap(), 42);
        assert!(OpeningValidator::parse_id("").is_err());
        assert!(OpeningValidator::parse_id("0").is_err());
        assert!(OpeningValidator::parse_id("x1").is_err());
    }
}
