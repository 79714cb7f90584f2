//! Query-string encoding for typed parameter structs.

use serde::Serialize;
use serde_json::Value;

use crate::client::error::{ApiError, ApiResult};

/// Flatten a serializable parameter struct into `key=value` pairs.
///
/// `None` fields (serialized as null) are dropped. `()` yields no pairs.
pub fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> ApiResult<Vec<(String, String)>> {
    let value =
        serde_json::to_value(query).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| scalar(value).map(|value| (key, value)))
            .collect()),
        other => Err(ApiError::InvalidRequest(format!(
            "query parameters must be a map, got {}",
            other
        ))),
    }
}

fn scalar(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
