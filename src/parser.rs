use std::collections::HashMap;
use std::io::BufRead;
use std::mem;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::store::QueryStore;

/// Recognizes a name-declaration line: `-- #queryName`, with anything after
/// the name ignored.
static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^--\s*#\w+").unwrap());

/// Captures the name token out of a name-declaration line.
static NAME_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());

/// An inline `--` comment, from the first dashes to the end of the line.
static INLINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--.*$").unwrap());

/// A trailing statement terminator, anchored to the end of the whole query so
/// semicolons inside string literals are never touched.
static TERMINATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\s*$").unwrap());

/// Errors that can occur while building a [`QueryStore`].
#[derive(Debug)]
pub enum ParseError {
    /// The underlying reader failed before the end of input
    Io(std::io::Error),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "SQL file could not be read: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Scanner state for a single parse pass.
enum ScanState {
    /// No name declaration seen yet; body lines are discarded
    Idle,
    /// Collecting body lines for the most recent name declaration
    Collecting { name: String, body: Vec<String> },
}

/// Parses annotated SQL files into a [`QueryStore`].
///
/// A query file holds one or more SQL statements, each preceded by a comment
/// line naming it:
///
/// ```text
/// -- #activeUsers
/// -- Free-text description lines are ignored.
/// SELECT * FROM users
/// WHERE active = 1;
/// ```
///
/// By default inline `--` comments are removed from query bodies;
/// [`Parser::preserving_comments`] keeps them verbatim.
///
/// # Examples
///
/// ```
/// use sqlfile::Parser;
///
/// let src = "-- #activeUsers\nSELECT * FROM users WHERE active = 1;\n";
/// let store = Parser::new().parse(src.as_bytes()).unwrap();
///
/// assert_eq!(store.get("activeUsers"), Some("SELECT * FROM users WHERE active = 1"));
/// assert_eq!(store.get("missing"), None);
/// ```
pub struct Parser {
    strip_inline_comments: bool,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl Parser {
    /// Creates a parser that strips inline `--` comments from query bodies.
    pub fn new() -> Self {
        Parser {
            strip_inline_comments: true,
        }
    }

    /// Creates a parser that keeps inline `--` comments in query bodies
    /// verbatim.
    pub fn preserving_comments() -> Self {
        Parser {
            strip_inline_comments: false,
        }
    }

    /// Reads `reader` to the end and returns the registered queries.
    ///
    /// The scan is a single forward pass. A name-declaration line finalizes
    /// the query in progress and starts a new one; blank lines and comment
    /// lines without a name marker are skipped; every other line belongs to
    /// the query currently being collected. Body lines seen before the first
    /// name declaration are discarded.
    ///
    /// Returns [`ParseError::Io`] if the reader fails; no partial store is
    /// ever returned.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<QueryStore, ParseError> {
        let mut queries = HashMap::new();
        let mut state = ScanState::Idle;

        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();

            if NAME_LINE.is_match(trimmed) {
                let next = ScanState::Collecting {
                    name: extract_name(trimmed),
                    body: Vec::new(),
                };
                if let ScanState::Collecting { name, body } = mem::replace(&mut state, next) {
                    self.register(&mut queries, name, body);
                }
            } else if trimmed.is_empty() || trimmed.starts_with("--") {
                // Blank line or description comment, never part of a body
            } else if let ScanState::Collecting { body, .. } = &mut state {
                body.push(line);
            }
        }

        if let ScanState::Collecting { name, body } = state {
            self.register(&mut queries, name, body);
        }

        let store = QueryStore::new(queries);
        let mut names: Vec<&str> = store.names().into_iter().collect();
        names.sort_unstable();
        info!("{} named queries initialized: {:?}", names.len(), names);

        Ok(store)
    }

    /// Finalizes a collected query. Declarations with an empty name or no
    /// body lines register nothing; a repeated name replaces the earlier
    /// entry.
    fn register(&self, queries: &mut HashMap<String, String>, name: String, body: Vec<String>) {
        if name.trim().is_empty() || body.is_empty() {
            return;
        }

        let joined = if self.strip_inline_comments {
            body.iter()
                .map(|line| INLINE_COMMENT.replace(line, "").into_owned())
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            body.join("\n")
        };

        let text = TERMINATOR.replace(&joined, "");
        if text.trim().is_empty() {
            return;
        }

        debug!("registered query {:?}", name);
        queries.insert(name, text.into_owned());
    }
}

/// Extracts the name token from a name-declaration line. The empty string is
/// returned when no token is present, which registers nothing downstream.
fn extract_name(line: &str) -> String {
    NAME_TOKEN
        .captures(line)
        .map(|c| c[1].to_string())
        .unwrap_or_default()
}

#[test]
fn test_name_line_classification() {
    assert!(NAME_LINE.is_match("-- #myQuery"));
    assert!(NAME_LINE.is_match("--#myQuery"));
    assert!(NAME_LINE.is_match("-- #query_2 trailing text is ignored"));
    assert!(!NAME_LINE.is_match("-- plain description"));
    assert!(!NAME_LINE.is_match("SELECT 1"));
    assert!(!NAME_LINE.is_match("-- # spaced name"));
}

#[test]
fn test_extract_name() {
    assert_eq!(extract_name("-- #myQuery"), "myQuery");
    assert_eq!(extract_name("--   #under_score9 rest"), "under_score9");
    assert_eq!(extract_name("-- no marker"), "");
}
