//! Case-insensitive substring search patterns for SQL `LIKE`
//!
//! SQLite's `LIKE` only folds ASCII case, so searchable columns keep a
//! `*_folded` copy written through [`fold_case`] and patterns are built from
//! the folded term. Wildcards in user input are escaped so a term such as
//! `100%` matches literally.

/// Escape character used in every generated pattern.
pub const LIKE_ESCAPE: char = '\\';

/// SQL fragment to append after `column LIKE ?`.
pub const LIKE_ESCAPE_CLAUSE: &str = r"ESCAPE '\'";

/// Free-text search term as submitted by the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(term: impl Into<String>) -> Self {
        Self(term.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `%term%`, case-folded, with wildcards escaped. The empty term yields `%`.
    pub fn pattern(&self) -> String {
        like_pattern(&fold_case(&self.0))
    }
}

impl From<Option<String>> for SearchTerm {
    fn from(term: Option<String>) -> Self {
        Self(term.unwrap_or_default())
    }
}

/// Unicode lowercase form stored alongside searchable text.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Build a `LIKE` pattern matching `term` anywhere in the column.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    if !term.is_empty() {
        pattern.push('%');
    }
    pattern
}
