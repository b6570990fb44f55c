use crate::error::DigestError;
use crate::options::{DigestOptions, SortKey};
use crate::tree::{SystemTree, TreeRenderer};
use crate::types::{DigestReport, FileEntry};
use crate::writer::DigestWriter;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
#[cfg(feature = "logging")]
use tracing;
struct Collector {
    walk: ignore::Walk,
    matcher: globset::GlobSet,
    root: PathBuf,
    excluded: PathBuf,
}
impl Collector {
    fn new(options: &DigestOptions) -> Result<Self, DigestError> {
        if !options.root.is_dir() {
            return Err(DigestError::Root(options.root.clone()));
        }
        fs::read_dir(&options.root).map_err(|e| DigestError::io(&options.root, e))?;
        let mut glob_builder = globset::GlobSetBuilder::new();
        for ext in &options.extensions {
            let glob = globset::Glob::new(&format!("*{}", ext)).map_err(|e| {
                DigestError::Extension(format!("invalid extension '{}': {}", ext, e))
            })?;
            glob_builder.add(glob);
        }
        let matcher = glob_builder
            .build()
            .map_err(|e| DigestError::Extension(format!("failed to build extension set: {}", e)))?;
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .hidden(!options.include_hidden)
            .follow_links(options.follow_links);
        Ok(Self {
            walk: builder.build(),
            matcher,
            root: options.root.clone(),
            excluded: absolute(&options.output),
        })
    }
    fn collect(self, warnings: &mut Vec<String>) -> Vec<FileEntry> {
        let mut entries = Vec::new();
        for result in self.walk {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warnings.push(format!("skipping unreadable entry: {}", err));
                    continue;
                }
            };
            if !self.matcher.is_match(entry.file_name()) {
                continue;
            }
            // Stat through symlinks, so links to files count as files while
            // unfollowed directory links never do.
            let metadata = match entry.path().metadata() {
                Ok(metadata) => metadata,
                Err(err) => {
                    warnings.push(format!("skipping {}: {}", entry.path().display(), err));
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }
            if entry
                .path()
                .canonicalize()
                .map(|p| p == self.excluded)
                .unwrap_or(false)
            {
                continue;
            }
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            let created = metadata.created().unwrap_or(modified);
            entries.push(FileEntry {
                relative: entry
                    .path()
                    .strip_prefix(&self.root)
                    .unwrap_or(entry.path())
                    .to_path_buf(),
                path: entry.path().to_path_buf(),
                size: metadata.len(),
                created,
                modified,
            });
        }
        entries
    }
}

/// Resolves the output path to a canonical absolute form for self-exclusion,
/// even when the file does not exist yet.
fn absolute(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    match (parent, path.file_name()) {
        (Some(parent), Some(name)) => parent
            .canonicalize()
            .map(|p| p.join(name))
            .unwrap_or_else(|_| path.to_path_buf()),
        _ => path.to_path_buf(),
    }
}

fn sort_entries(entries: &mut [FileEntry], key: SortKey, reverse: bool) {
    entries.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.path.as_os_str().cmp(b.path.as_os_str()),
            SortKey::Created => a
                .created
                .cmp(&b.created)
                .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str())),
            SortKey::Modified => a
                .modified
                .cmp(&b.modified)
                .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str())),
        };
        if reverse { ordering.reverse() } else { ordering }
    });
}

/// Walks `options.root`, sorts the matched files, and writes the digest to
/// `options.output` with a tree overview from the system `tree` utility.
///
/// Problems local to one entry (permission denied, undecodable content, a
/// missing `tree` binary) are downgraded to warnings in the returned
/// [`DigestReport`]; only a bad root or an output I/O failure aborts the run.
/// A failed run may leave a partial output file behind.
pub fn generate_digest(options: DigestOptions) -> Result<DigestReport, DigestError> {
    generate_digest_with(options, &SystemTree)
}

/// Like [`generate_digest`], with an explicit tree renderer.
pub fn generate_digest_with(
    options: DigestOptions,
    renderer: &dyn TreeRenderer,
) -> Result<DigestReport, DigestError> {
    #[cfg(feature = "logging")]
    tracing::debug!("starting digest of {}", options.root.display());
    let mut warnings = Vec::new();
    let collector = Collector::new(&options)?;
    let mut files = collector.collect(&mut warnings);
    if files.is_empty() {
        warnings.push("no files matched the requested extensions".to_string());
    }
    sort_entries(&mut files, options.sort_key, options.reverse);
    #[cfg(feature = "logging")]
    tracing::debug!("collected {} files", files.len());
    let tree = renderer.render(&options.root);
    if tree.is_none() {
        warnings.push("tree utility unavailable, omitting directory overview".to_string());
    }
    let mut writer = DigestWriter::create(&options.output)?;
    if let Some(tree) = tree.as_deref() {
        writer.write_tree(tree)?;
    }
    for file in &files {
        writer.write_entry(file, &mut warnings)?;
    }
    writer.finish()?;
    Ok(DigestReport {
        output: options.output,
        tree_included: tree.is_some(),
        files,
        warnings,
    })
}
