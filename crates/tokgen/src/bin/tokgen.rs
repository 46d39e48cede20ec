use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tempfile::NamedTempFile;
use tokgen::{generate, Catalog};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sort a reserved-token catalog by lexeme and print it as token-table lines
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Catalog file with one `name: lexeme` entry per line [default: built-in mirac reserved tokens]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the table [default: standard output]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more to stderr; repeat for debug and trace output
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(EnvFilter::new(level))
        .init();
}

fn load_catalog(input: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match input {
        Some(path) => {
            debug!(path = %path.display(), "reading catalog");
            let def_string = fs::read_to_string(path)
                .with_context(|| format!("unable to read catalog {}", path.display()))?;
            Catalog::parse(&def_string)
                .with_context(|| format!("invalid catalog {}", path.display()))
        }
        None => Catalog::builtin().context("invalid built-in catalog"),
    }
}

/// Writes into a temporary file next to `path` and renames it over `path`
/// once complete, so an existing table is either kept or fully replaced.
fn write_table(catalog: &Catalog, path: &Path) -> anyhow::Result<usize> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let lines = generate(catalog, file.as_file_mut())
        .with_context(|| format!("failed to write {}", path.display()))?;
    file.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(lines)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let catalog = load_catalog(args.input.as_ref())?;

    match &args.output {
        Some(path) => {
            let lines = write_table(&catalog, path)?;
            info!("Wrote {}, {} lines", path.display(), lines);
        }
        None => {
            generate(&catalog, &mut io::stdout().lock())
                .context("failed to write to standard output")?;
        }
    }

    Ok(())
}
