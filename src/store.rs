use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::parser::{ParseError, Parser};

/// An immutable set of named SQL queries.
///
/// A store is built once, by [`Parser::parse`] or [`QueryStore::from_path`],
/// and is read-only afterwards. Because it owns plain string data and never
/// mutates, a finished store can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use sqlfile::Parser;
///
/// let src = "\
/// -- #countOrders
/// -- Total number of orders
/// SELECT COUNT(*) FROM orders;
/// ";
/// let store = Parser::new().parse(src.as_bytes()).unwrap();
///
/// assert_eq!(store.len(), 1);
/// assert!(store.names().contains("countOrders"));
/// assert_eq!(store.get("countOrders"), Some("SELECT COUNT(*) FROM orders"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStore {
    queries: HashMap<String, String>,
}

impl QueryStore {
    pub(crate) fn new(queries: HashMap<String, String>) -> Self {
        QueryStore { queries }
    }

    /// Opens the file at `path` and parses it with the default
    /// comment-stripping [`Parser`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Parser::new().parse(BufReader::new(file))
    }

    /// Names of all queries registered in this store. Order is not
    /// significant.
    pub fn names(&self) -> HashSet<&str> {
        self.queries.keys().map(String::as_str).collect()
    }

    /// The query registered under `name`, or `None` if no query with that
    /// name was declared. A registered query is never the empty string.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.queries.get(name).map(String::as_str)
    }

    /// Number of registered queries.
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Whether the store holds no queries at all.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Iterates over `(name, query)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.queries
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }
}
