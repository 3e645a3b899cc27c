use std::fs::File;
use std::io::Read;

use serde_json::Value;
use tracing::warn;

use crate::models::room::RoomSummary;

#[derive(Debug)]
pub enum RoomsLoadError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    UnexpectedShape(String),
}

impl From<std::io::Error> for RoomsLoadError {
    fn from(err: std::io::Error) -> Self {
        RoomsLoadError::IoError(err)
    }
}

impl From<serde_json::Error> for RoomsLoadError {
    fn from(err: serde_json::Error) -> Self {
        RoomsLoadError::JsonError(err)
    }
}

impl std::fmt::Display for RoomsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomsLoadError::IoError(e) => write!(f, "IO error: {}", e),
            RoomsLoadError::JsonError(e) => write!(f, "JSON error: {}", e),
            RoomsLoadError::UnexpectedShape(s) => write!(f, "Unexpected catalog shape: {}", s),
        }
    }
}

impl std::error::Error for RoomsLoadError {}

/// Pull the rooms array out of a catalog document. The API normally wraps it
/// as `{"rooms": [...]}` but some cached exports are the bare array.
fn rooms_array(document: Value) -> Result<Vec<Value>, RoomsLoadError> {
    match document {
        Value::Object(mut map) => match map.remove("rooms") {
            Some(Value::Array(rooms)) => Ok(rooms),
            Some(other) => Err(RoomsLoadError::UnexpectedShape(format!(
                "\"rooms\" is {} rather than an array",
                json_type_name(&other)
            ))),
            None => Err(RoomsLoadError::UnexpectedShape(
                "object without a \"rooms\" key".to_string(),
            )),
        },
        Value::Array(rooms) => Ok(rooms),
        other => Err(RoomsLoadError::UnexpectedShape(format!(
            "top-level {} instead of object or array",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Load a room catalog from a local JSON file.
///
/// Individual records that fail to deserialize are skipped with a warning
/// rather than failing the whole load; an incomplete catalog is still a
/// browsable one.
pub fn load_rooms(json_path: &str) -> Result<Vec<RoomSummary>, RoomsLoadError> {
    let mut file = File::open(json_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let document: Value = serde_json::from_str(&contents)?;
    let entries = rooms_array(document)?;

    let mut rooms = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<RoomSummary>(entry) {
            Ok(room) => rooms.push(room),
            Err(e) => warn!("Skipping malformed room record: {}", e),
        }
    }

    Ok(rooms)
}
