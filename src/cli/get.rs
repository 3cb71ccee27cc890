//! Print the query registered under a given name

use super::CliError;
use crate::QueryStore;

/// Returns the query text for `name`, or [`CliError::QueryNotFound`].
pub fn execute_get(store: &QueryStore, name: &str) -> Result<String, CliError> {
    store
        .get(name)
        .map(str::to_string)
        .ok_or_else(|| CliError::QueryNotFound(name.to_string()))
}
