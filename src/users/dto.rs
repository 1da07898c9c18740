use serde::Deserialize;
use serde_json::Value;

/// Request body for `PUT /user/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub profile: Option<Value>,
}

impl UpdateUserRequest {
    /// Text to store in the profile column. Absent, null and empty all clear it;
    /// non-string JSON is kept as its serialized text.
    pub fn profile_text(&self) -> Option<String> {
        match self.profile.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
