use std::collections::HashMap;
use std::fmt;

use convert_case::{Case, Casing};
use thiserror::Error;
use tracing::{debug, trace};

/// Reserved tokens of the mirac lexer, used when no catalog file is given.
pub const BUILTIN_CATALOG: &str = include_str!("../data/reserved.def");

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenEntry {
    pub name: String,
    pub lexeme: String,
}

impl TokenEntry {
    pub fn new(name: impl Into<String>, lexeme: impl Into<String>) -> Self {
        TokenEntry {
            name: name.into(),
            lexeme: lexeme.into(),
        }
    }
}

/// Where an entry was declared: a line of a catalog file, or a position in
/// an in-memory list. Both are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Line(usize),
    Entry(usize),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Line(line) => write!(f, "line {}", line),
            Origin::Entry(idx) => write!(f, "entry {}", idx),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Name,
    Lexeme,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Name => f.write_str("name"),
            KeyKind::Lexeme => f.write_str("lexeme"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("name is empty")]
    EmptyName,
    #[error("lexeme is empty")]
    EmptyLexeme,
    #[error("name is not an identifier")]
    InvalidName,
    #[error("no name can be derived from a bare lexeme")]
    UnnamedBareLexeme,
    #[error("lexeme contains a control character")]
    NonPrintableLexeme,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{origin}: malformed entry `{text}`: {reason}")]
    MalformedEntry {
        origin: Origin,
        reason: MalformedReason,
        text: String,
    },
    #[error("{second}: duplicate {kind} `{value}` (first declared at {first})")]
    DuplicateKey {
        kind: KeyKind,
        value: String,
        first: Origin,
        second: Origin,
    },
}

/// A validated token catalog. Names and lexemes are non-empty and unique;
/// entries stay in declaration order and cannot be modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<TokenEntry>,
}

impl Catalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse(BUILTIN_CATALOG)
    }

    /// Parses catalog text.
    ///
    /// Each line is `name: lexeme` or `name<TAB>lexeme`, split at the first
    /// delimiter and trimmed on both sides. Blank lines and lines starting
    /// with `#` are skipped. A line without a delimiter is a bare keyword:
    /// the whole line is the lexeme and its PascalCase form is the name,
    /// which must come out as an identifier.
    pub fn parse(def_string: &str) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();
        for (idx, line) in def_string.lines().enumerate() {
            let origin = Origin::Line(idx + 1);
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let entry = match line.split_once(|c: char| c == ':' || c == '\t') {
                Some((name, lexeme)) => TokenEntry::new(name.trim(), lexeme.trim()),
                None => {
                    let name = line.to_case(Case::Pascal);
                    if !is_identifier(&name) {
                        return Err(CatalogError::MalformedEntry {
                            origin,
                            reason: MalformedReason::UnnamedBareLexeme,
                            text: line.to_string(),
                        });
                    }
                    TokenEntry::new(name, line)
                }
            };
            trace!(%origin, name = %entry.name, lexeme = %entry.lexeme, "parsed entry");
            entries.push((origin, entry));
        }

        Self::validate(entries)
    }

    pub fn from_pairs<I, N, L>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(idx, (name, lexeme))| (Origin::Entry(idx + 1), TokenEntry::new(name, lexeme)))
            .collect();

        Self::validate(entries)
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

    fn validate(entries: Vec<(Origin, TokenEntry)>) -> Result<Self, CatalogError> {
        let mut names: HashMap<&str, Origin> = HashMap::with_capacity(entries.len());
        let mut lexemes: HashMap<&str, Origin> = HashMap::with_capacity(entries.len());

        for (origin, entry) in &entries {
            check_fields(*origin, entry)?;

            if let Some(first) = names.insert(&entry.name, *origin) {
                return Err(CatalogError::DuplicateKey {
                    kind: KeyKind::Name,
                    value: entry.name.clone(),
                    first,
                    second: *origin,
                });
            }
            if let Some(first) = lexemes.insert(&entry.lexeme, *origin) {
                return Err(CatalogError::DuplicateKey {
                    kind: KeyKind::Lexeme,
                    value: entry.lexeme.clone(),
                    first,
                    second: *origin,
                });
            }
        }

        debug!(entries = entries.len(), "catalog validated");
        Ok(Catalog {
            entries: entries.into_iter().map(|(_, entry)| entry).collect(),
        })
    }
}

fn check_fields(origin: Origin, entry: &TokenEntry) -> Result<(), CatalogError> {
    let reason = if entry.name.is_empty() {
        MalformedReason::EmptyName
    } else if entry.lexeme.is_empty() {
        MalformedReason::EmptyLexeme
    } else if !is_identifier(&entry.name) {
        MalformedReason::InvalidName
    } else if entry.lexeme.chars().any(char::is_control) {
        MalformedReason::NonPrintableLexeme
    } else {
        return Ok(());
    };

    // control characters would break the diagnostic line itself
    let lexeme: String = entry
        .lexeme
        .chars()
        .map(|c| {
            if c.is_control() {
                c.escape_debug().to_string()
            } else {
                c.to_string()
            }
        })
        .collect();

    Err(CatalogError::MalformedEntry {
        origin,
        reason,
        text: format!("{}: {}", entry.name, lexeme),
    })
}

pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
