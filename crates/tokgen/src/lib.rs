//! Sorts a catalog of reserved tokens by lexeme and renders it as the body
//! of a token table, one `<name>, "<lexeme>",` line per entry.

use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

pub mod catalog;
pub mod render;
pub mod sorter;

#[cfg(test)]
mod catalog_tests;

pub use catalog::{Catalog, CatalogError, KeyKind, MalformedReason, Origin, TokenEntry};
pub use render::{parse_rendered_line, render, render_to_string};
pub use sorter::{sort_entries, TokenTable};

#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to write token table")]
    Io(#[from] io::Error),
}

/// Sorts `catalog` and writes the rendered table to `sink`. Returns the
/// number of lines written, which always equals the number of entries.
pub fn generate<W: Write>(catalog: &Catalog, sink: &mut W) -> Result<usize, GenError> {
    let table = TokenTable::from_catalog(catalog);
    render(table.entries(), sink)?;
    info!(lines = table.len(), "wrote token table");
    Ok(table.len())
}

/// Parses `def_string` and generates from it. Nothing reaches `sink` unless
/// the whole catalog is valid.
pub fn generate_from_def<W: Write>(def_string: &str, sink: &mut W) -> Result<usize, GenError> {
    let catalog = Catalog::parse(def_string)?;
    generate(&catalog, sink)
}
