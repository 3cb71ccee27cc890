//! Export every query in a store as a JSON object

use super::CliError;
use crate::QueryStore;

/// Serializes the store as a JSON object mapping names to query text.
/// Keys are emitted in sorted order.
pub fn execute_export(store: &QueryStore, pretty: bool) -> Result<String, CliError> {
    let mut object = serde_json::Map::new();
    for (name, text) in store.iter() {
        object.insert(name.to_string(), serde_json::Value::String(text.to_string()));
    }
    let value = serde_json::Value::Object(object);

    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}
