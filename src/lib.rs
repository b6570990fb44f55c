//! # Dirdigest
//!
//! `dirdigest` recursively walks a directory, selects text files by
//! extension, and concatenates their contents into a single digest file,
//! prefixed with a directory tree overview when the system `tree` utility is
//! available.
//!
//! The digest is plain UTF-8 text: an optional tree block followed by one
//! block per file, each introduced by a separator rule and a `File:` header
//! naming the path relative to the scanned root. Files that cannot be
//! decoded keep their header and get a visible error marker in place of
//! content, so a single bad file never aborts a run.
//!
//! # Example
//!
//! ```no_run
//! use dirdigest::{DigestBuilder, SortKey, generate_digest};
//!
//! let options = DigestBuilder::new("src")
//!     .output("digest.txt")
//!     .extensions(vec![".rs".into(), ".toml".into()])
//!     .sort_key(SortKey::Name)
//!     .build();
//!
//! let report = generate_digest(options).expect("failed to write digest");
//!
//! for warning in &report.warnings {
//!     eprintln!("Warning: {}", warning);
//! }
//! println!("{} files written to {}", report.files.len(), report.output.display());
//! ```

mod engine;
mod error;
mod options;
mod tree;
mod types;
mod writer;

pub use engine::{generate_digest, generate_digest_with};
pub use error::DigestError;
pub use options::{DEFAULT_EXTENSIONS, DigestBuilder, DigestOptions, SortKey};
pub use tree::{SystemTree, TreeRenderer};
pub use types::{DigestReport, FileEntry};
