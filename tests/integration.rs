use dirdigest::{DigestBuilder, TreeRenderer, generate_digest, generate_digest_with};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

struct StubTree;

impl TreeRenderer for StubTree {
    fn render(&self, root: &Path) -> Option<String> {
        Some(format!("{}\n`-- stub\n", root.display()))
    }
}

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.py"), "print('hi')\n").unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/guide.md"), "# Guide").unwrap();
    fs::write(dir.path().join("image.bin"), [0u8, 159, 146, 150]).unwrap();
    let out = dir.path().join("digest.txt");
    let options = DigestBuilder::new(dir.path()).output(&out).build();
    let report = generate_digest_with(options, &StubTree).unwrap();
    assert!(report.tree_included);
    assert_eq!(report.files.len(), 2);
    let digest = fs::read_to_string(&out).unwrap();
    assert!(digest.starts_with("Directory structure:\n"));
    let guide = digest.find("File: /docs/guide.md").unwrap();
    let main = digest.find("File: /main.py").unwrap();
    assert!(guide < main);
    assert!(digest.contains("print('hi')"));
    assert!(digest.contains("# Guide"));
    assert!(!digest.contains("image.bin"));
}

#[test]
fn integration_default_renderer_never_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "A").unwrap();
    let out = dir.path().join("digest.txt");
    let options = DigestBuilder::new(dir.path()).output(&out).build();
    let report = generate_digest(options).unwrap();
    assert_eq!(report.files.len(), 1);
    let digest = fs::read_to_string(&out).unwrap();
    assert!(digest.contains("File: /a.txt"));
}
