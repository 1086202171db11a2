//! Wire types for the task service.
//!
//! Field names follow the service contract: the PUT body spells the
//! completion flag `isCompleted`, while responses may spell it either way.
//! Server ids arrive as numbers or strings; both normalize to `String`.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TodoCreateRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TodoUpdateRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(rename = "isCompleted")]
    pub completed: bool,
}

/// A task record as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "isCompleted")]
    pub completed: bool,
}

fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_record_accepts_numeric_id_and_alias() {
        let record: TodoRecord =
            serde_json::from_str(r#"{"id":7,"title":"Buy milk","description":"2%","isCompleted":true}"#)
                .unwrap();
        assert_eq!(record.id, "7");
        assert!(record.completed);

        let record: TodoRecord =
            serde_json::from_str(r#"{"id":"abc","title":"Buy milk","completed":false}"#).unwrap();
        assert_eq!(record.id, "abc");
        assert_eq!(record.description, "");
        assert!(!record.completed);
    }

    #[test]
    fn test_update_request_spells_is_completed() {
        let body = serde_json::to_string(&TodoUpdateRequest {
            title: "t",
            description: "d",
            completed: true,
        })
        .unwrap();
        assert!(body.contains("\"isCompleted\":true"));
    }
}
