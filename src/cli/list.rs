//! List the query names declared in a file

use crate::QueryStore;

/// Renders the store's query names, sorted, one per line.
pub fn execute_list(store: &QueryStore) -> String {
    let mut names: Vec<&str> = store.names().into_iter().collect();
    names.sort_unstable();
    names.join("\n")
}
