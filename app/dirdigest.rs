//! Command-line interface for dirdigest.
//!
//! Walks the given directory and writes the concatenated digest file,
//! printing progress to stdout and warnings to stderr.

use clap::{Parser, ValueEnum};
use dirdigest::{DEFAULT_EXTENSIONS, DigestBuilder, DigestOptions, SortKey, generate_digest};
use std::path::PathBuf;
use std::process::exit;

/// dirdigest — concatenate a directory's text files into one digest
#[derive(Parser)]
#[command(name = "dirdigest", version, about, long_about = None)]
struct Cli {
    /// Root directory to scan for text files
    root: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "digest.txt")]
    output: PathBuf,

    /// File extensions to include, with leading dot (e.g. -e .rs .toml)
    #[arg(short, long, num_args = 1..)]
    extensions: Option<Vec<String>>,

    /// Key used to order files in the digest
    #[arg(long, value_enum, default_value_t = SortBy::Name)]
    sort_by: SortBy,

    /// Reverse the sort order
    #[arg(short, long)]
    reverse: bool,

    /// Follow symlinked directories during the walk
    #[arg(long)]
    follow_links: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SortBy {
    /// Lexicographic order on the full path
    Name,
    /// Creation time, oldest first
    Ctime,
    /// Modification time, oldest first
    Mtime,
}

impl From<SortBy> for SortKey {
    fn from(key: SortBy) -> Self {
        match key {
            SortBy::Name => SortKey::Name,
            SortBy::Ctime => SortKey::Created,
            SortBy::Mtime => SortKey::Modified,
        }
    }
}

/// Ensure every extension carries a leading dot.
fn normalize_extensions(extensions: Vec<String>) -> Vec<String> {
    extensions
        .into_iter()
        .map(|ext| format!(".{}", ext.trim_start_matches('.')))
        .collect()
}

impl Cli {
    fn into_options(self) -> DigestOptions {
        let extensions = match self.extensions {
            Some(extensions) => normalize_extensions(extensions),
            None => DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        };
        DigestBuilder::new(self.root)
            .output(self.output)
            .extensions(extensions)
            .sort_key(self.sort_by.into())
            .reverse(self.reverse)
            .follow_links(self.follow_links)
            .build()
    }
}

fn main() {
    let cli = Cli::parse();
    let options = cli.into_options();
    println!("Scanning directory: {}", options.root.display());
    println!(
        "Looking for file extensions: {}",
        options.extensions.join(", ")
    );
    match generate_digest(options) {
        Ok(report) => {
            for warning in &report.warnings {
                eprintln!("Warning: {}", warning);
            }
            println!("Found {} files to include.", report.files.len());
            println!("Digest written to {}", report.output.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
