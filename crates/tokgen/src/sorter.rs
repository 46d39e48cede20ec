use tracing::debug;

use crate::catalog::{Catalog, TokenEntry};

/// Returns the entries ordered by lexeme, comparing codepoint by codepoint.
///
/// Rust orders `str` by its UTF-8 bytes, which matches codepoint order, so a
/// shorter prefix (`+`) always lands before its extensions (`++`). The sort
/// is stable and leaves `entries` untouched.
pub fn sort_entries(entries: &[TokenEntry]) -> Vec<TokenEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.lexeme.cmp(&b.lexeme));
    sorted
}

/// A catalog in lexeme order, the layout the generated token table has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    entries: Vec<TokenEntry>,
}

impl TokenTable {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let entries = sort_entries(catalog.entries());
        debug!(entries = entries.len(), "sorted token table");
        TokenTable { entries }
    }

    pub fn entries(&self) -> &[TokenEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of `lexeme` in the table, found by binary search the same way
    /// the lexer resolves a reserved word against the generated array.
    pub fn position(&self, lexeme: &str) -> Option<usize> {
        self.entries
            .binary_search_by(|entry| entry.lexeme.as_str().cmp(lexeme))
            .ok()
    }

    pub fn lookup(&self, lexeme: &str) -> Option<&TokenEntry> {
        self.position(lexeme).map(|idx| &self.entries[idx])
    }
}
