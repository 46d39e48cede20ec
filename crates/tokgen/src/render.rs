use std::io::{self, Write};

use crate::catalog::TokenEntry;

/// Appends `<name>, "<lexeme>",` and a newline. The lexeme is copied as is;
/// any escaping it needs is already part of the catalog.
pub fn render_line(entry: &TokenEntry, out: &mut String) {
    out.push_str(&entry.name);
    out.push_str(", \"");
    out.push_str(&entry.lexeme);
    out.push_str("\",\n");
}

pub fn render_to_string(entries: &[TokenEntry]) -> String {
    let capacity = entries
        .iter()
        .map(|entry| entry.name.len() + entry.lexeme.len() + 6)
        .sum();
    let mut out = String::with_capacity(capacity);
    for entry in entries {
        render_line(entry, &mut out);
    }
    out
}

/// Renders the whole listing in memory, then hands it to `sink` in one
/// write so a failing sink never sees a partial line from us.
pub fn render<W: Write>(entries: &[TokenEntry], sink: &mut W) -> io::Result<()> {
    let rendered = render_to_string(entries);
    sink.write_all(rendered.as_bytes())?;
    sink.flush()
}

/// Splits a rendered line (without its newline) back into name and lexeme.
pub fn parse_rendered_line(line: &str) -> Option<(&str, &str)> {
    let (name, rest) = line.split_once(", \"")?;
    let lexeme = rest.strip_suffix("\",")?;
    Some((name, lexeme))
}
