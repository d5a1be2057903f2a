// Project record as stored in the `projects` collection.
//
// Notes
// - Classification fields hold dictionary keys. Legacy records may hold labels instead.
// - Owners are user identifiers. Older records stored them as a JSON-encoded string or as a
//   comma separated list; all shapes are normalised on read.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub level: String,
    pub details: String,
    #[serde(rename = "type")]
    pub project_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    pub stage: String,
    pub platform: String,
    pub start_time: String,
    pub attribute: String,
    pub department: String,
    #[serde(deserialize_with = "deserialize_owners")]
    pub owner: Vec<String>,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

fn deserialize_owners<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(normalize_owners(Value::deserialize(deserializer)?))
}

pub fn normalize_owners(raw: Value) -> Vec<String> {
    match raw {
        Value::Array(values) => values.into_iter().filter_map(owner_id).collect(),
        Value::String(text) if text.trim().is_empty() => Vec::new(),
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Array(values)) => values.into_iter().filter_map(owner_id).collect(),
            Ok(single) => owner_id(single).into_iter().collect(),
            Err(_) => text
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
        },
        _ => Vec::new(),
    }
}

fn owner_id(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
