use serde::{Deserialize, Serialize};

/// Meal ids come from an external catalogue; clients send them either as
/// strings or as bare integers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MealIdInput {
    Text(String),
    Number(i64),
}

impl MealIdInput {
    /// Canonical text form; empty strings and zero count as missing.
    pub fn into_meal_id(self) -> Option<String> {
        match self {
            Self::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            Self::Number(0) => None,
            Self::Number(n) => Some(n.to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMealRequest {
    pub meal_id: Option<MealIdInput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedMealsResponse {
    pub meal_ids: Vec<String>,
}
