//! Tree overview rendering.
//!
//! The digest opens with a diagram of the scanned directory produced by the
//! system `tree` utility. Rendering is best effort: a missing or failing
//! utility only drops the overview block, never the digest.

use std::path::Path;
use std::process::Command;

/// Produces the directory overview placed at the top of a digest.
///
/// Implementations return `None` when no diagram can be produced; the digest
/// is then written without an overview block.
pub trait TreeRenderer {
    fn render(&self, root: &Path) -> Option<String>;
}

/// Renders the overview by running the system `tree` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTree;

impl TreeRenderer for SystemTree {
    fn render(&self, root: &Path) -> Option<String> {
        let output = Command::new("tree").arg(root.as_os_str()).output().ok()?;
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
