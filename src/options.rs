use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extensions scanned when the caller does not supply a list.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".py", ".js", ".html", ".css", ".tex", ".rst", ".json", ".yaml", ".yml",
    ".xml", ".sh", ".bash",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Created,
    Modified,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub extensions: Vec<String>,
    pub sort_key: SortKey,
    pub reverse: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
}
impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("digest.txt"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            sort_key: SortKey::Name,
            reverse: false,
            include_hidden: true,
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct DigestBuilder {
    options: DigestOptions,
}
impl DigestBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DigestOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.options.extensions = extensions;
        self
    }
    pub fn sort_key(mut self, key: SortKey) -> Self {
        self.options.sort_key = key;
        self
    }
    pub fn reverse(mut self, yes: bool) -> Self {
        self.options.reverse = yes;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> DigestOptions {
        self.options
    }
}
