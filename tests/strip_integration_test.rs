use std::fs;
use std::path::Path;
use strip_comments::{CliConfig, CommentStripper, LocalStorage};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn test_strips_tree_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(
        root,
        "src/app.ts",
        b"const x = 1;\n// drop me\n/** keep me */\n  // also drop\n",
    );
    write(root, "src/lib/util.js", b"// note");
    write(root, "src/types/index.d.ts", b"  // header\nexport type A = string;\n");
    write(root, "src/view.tsx", b"// untouched\n");
    write(root, "README.md", b"// not code\n");

    let stripper = CommentStripper::new(LocalStorage::new(), CliConfig::new(root));
    let mut lines = Vec::new();
    let summary = stripper.run_with(|report| lines.push(report.console_line()));

    assert_eq!(summary.files_processed, 3);
    assert_eq!(summary.files_failed, 0);
    assert_eq!(summary.files_skipped, 2);
    assert_eq!(summary.lines_removed, 4);
    assert!(lines.iter().all(|line| line.starts_with("Processed: ")));

    assert_eq!(read(root, "src/app.ts"), "const x = 1;\n/** keep me */\n");
    assert_eq!(read(root, "src/lib/util.js"), "");
    assert_eq!(read(root, "src/types/index.d.ts"), "export type A = string;\n");
    assert_eq!(read(root, "src/view.tsx"), "// untouched\n");
    assert_eq!(read(root, "README.md"), "// not code\n");
}

#[test]
fn test_second_run_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "a.js", b"// one\nlet a = 1; // trailing stays\n/** doc */\n");

    let stripper = CommentStripper::new(LocalStorage::new(), CliConfig::new(root));
    let first = stripper.run_with(|_| {});
    let after_first = read(root, "a.js");
    let second = stripper.run_with(|_| {});

    assert_eq!(first.lines_removed, 1);
    assert_eq!(second.lines_removed, 0);
    assert_eq!(read(root, "a.js"), after_first);
}

#[test]
fn test_invalid_utf8_reported_and_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let bad = [b'/', b'/', b' ', 0xff, 0xfe, b'\n'];
    write(root, "bad.ts", &bad);
    write(root, "good.ts", b"// x\ny();\n");

    let stripper = CommentStripper::new(LocalStorage::new(), CliConfig::new(root));
    let mut lines = Vec::new();
    let summary = stripper.run_with(|report| lines.push(report.console_line()));

    assert_eq!(summary.files_failed, 1);
    assert_eq!(summary.files_processed, 1);
    assert_eq!(fs::read(root.join("bad.ts")).unwrap(), bad);
    assert_eq!(read(root, "good.ts"), "y();\n");

    let bad_line = format!("Error processing {}: ", root.join("bad.ts").display());
    assert!(lines.iter().any(|line| line.starts_with(&bad_line)));
}

#[test]
fn test_custom_extensions() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "m.mjs", b"// x\nexport {};\n");
    write(root, "a.ts", b"// x\n");

    let mut config = CliConfig::new(root);
    config.extensions = vec![".mjs".to_string()];
    let stripper = CommentStripper::new(LocalStorage::new(), config.normalized());
    let summary = stripper.run_with(|_| {});

    assert_eq!(summary.files_processed, 1);
    assert_eq!(read(root, "m.mjs"), "export {};\n");
    assert_eq!(read(root, "a.ts"), "// x\n");
}
