//! Digest file assembly.
//!
//! Writes the tree overview followed by one block per collected file. Each
//! block opens with a separator rule and a `File:` header naming the path
//! relative to the scanned root, so the digest stays parseable even when a
//! file's content had to be replaced with an error marker.

use crate::error::DigestError;
use crate::types::FileEntry;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const SEPARATOR: &str =
    "================================================================================";

pub(crate) struct DigestWriter {
    out: BufWriter<File>,
    path: PathBuf,
}

impl DigestWriter {
    /// Creates (or truncates) the output file, creating missing parent
    /// directories first.
    pub(crate) fn create(path: &Path) -> Result<Self, DigestError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| DigestError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| DigestError::io(path, e))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    pub(crate) fn write_tree(&mut self, tree: &str) -> Result<(), DigestError> {
        self.emit("Directory structure:\n")?;
        self.emit(tree)?;
        if !tree.ends_with('\n') {
            self.emit("\n")?;
        }
        self.emit("\n\n")
    }

    /// Writes one file block. Read and decode failures are downgraded to an
    /// in-digest marker plus a warning; only output I/O errors propagate.
    pub(crate) fn write_entry(
        &mut self,
        entry: &FileEntry,
        warnings: &mut Vec<String>,
    ) -> Result<(), DigestError> {
        let display = format!("/{}", entry.relative.display());
        self.emit(&format!(
            "\n\n{SEPARATOR}\nFile: {display}\n{SEPARATOR}\n\n"
        ))?;
        match fs::read(&entry.path) {
            Ok(bytes) => match decode(bytes) {
                Some(content) => {
                    self.emit(&content)?;
                    if !content.ends_with('\n') {
                        self.emit("\n")?;
                    }
                }
                None => {
                    self.emit(&format!(
                        "[Error: Could not decode file {display} as UTF-8. Skipping content.]\n\n"
                    ))?;
                    warnings.push(format!(
                        "could not decode file {} as UTF-8",
                        entry.path.display()
                    ));
                }
            },
            Err(err) => {
                self.emit(&format!(
                    "[Error: Could not read file {display}: {err}]\n\n"
                ))?;
                warnings.push(format!("could not read file {}: {}", entry.path.display(), err));
            }
        }
        Ok(())
    }

    pub(crate) fn finish(mut self) -> Result<(), DigestError> {
        self.out
            .flush()
            .map_err(|e| DigestError::io(&self.path, e))
    }

    fn emit(&mut self, text: &str) -> Result<(), DigestError> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| DigestError::io(&self.path, e))
    }
}

fn decode(bytes: Vec<u8>) -> Option<String> {
    let probe = &bytes[..bytes.len().min(4096)];
    if content_inspector::inspect(probe).is_binary() {
        return None;
    }
    String::from_utf8(bytes).ok()
}
