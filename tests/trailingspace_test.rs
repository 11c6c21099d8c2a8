use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use whitespace_tools::{process_trailingspace, trailingspace, ProcessingOptions};

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_single_file_scenarios() {
    let cases = [
        (
            "trailing spaces",
            "line with spaces   \nline with tabs\t\t\nclean line\n",
            "line with spaces\nline with tabs\nclean line\n",
        ),
        ("mixed", "mixed \t \nanother \t\nclean\n", "mixed\nanother\nclean\n"),
        ("whitespace-only first line", "  \t\nline3\n", "\nline3\n"),
        ("only whitespace lines", "   \n\t\t\n \t \n", "\n\n\n"),
        ("no final newline", "content\t\t", "content"),
        ("empty", "", ""),
        (
            "blank lines kept",
            "content\n  \n\t\n \t \nmore content\n",
            "content\n\n\n\nmore content\n",
        ),
    ];

    let temp_dir = TempDir::new().unwrap();
    for (name, input, want) in cases {
        let path = write(temp_dir.path(), "case.txt", input);

        trailingspace(&path).unwrap();
        assert_eq!(read(&path), want, "{name}");

        trailingspace(&path).unwrap();
        assert_eq!(read(&path), want, "{name} (idempotent)");
    }
}

#[test]
fn test_long_line_with_embedded_nuls() {
    // A direct file target is processed whatever its content
    let temp_dir = TempDir::new().unwrap();
    let nuls = "\0".repeat(1000);
    let path = write(temp_dir.path(), "nuls", &format!("a{nuls}content   \n"));

    trailingspace(&path).unwrap();
    assert_eq!(read(&path), format!("a{nuls}content\n"));
}

#[test]
fn test_directory_walk() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let top = write(root, "top.txt", "top  \n");
    let nested = write(root, "a/b/nested.rs", "fn main() {}\t\n");
    let hidden = write(root, ".git/config", "[core]  \n");

    process_trailingspace(root, &ProcessingOptions::default()).unwrap();

    assert_eq!(read(&top), "top\n");
    assert_eq!(read(&nested), "fn main() {}\n");
    assert_eq!(read(&hidden), "[core]  \n");
}

#[test]
fn test_directory_walk_with_hidden_and_excludes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let hidden = write(root, ".config/settings.ini", "key = value \n");
    let markdown = write(root, "docs/README.md", "hard break  \n");

    let options = ProcessingOptions::new().include_hidden(true).exclude("*.md");
    process_trailingspace(root, &options).unwrap();

    assert_eq!(read(&hidden), "key = value\n");
    assert_eq!(read(&markdown), "hard break  \n");
}

#[test]
fn test_unicode_content_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "i18n.txt", "こんにちは  \nGrüße\t\n🦀 \n");

    trailingspace(&path).unwrap();
    assert_eq!(read(&path), "こんにちは\nGrüße\n🦀\n");
}

#[test]
fn test_invalid_pattern_aborts_before_changes() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(temp_dir.path(), "keep.txt", "untouched  \n");

    let options = ProcessingOptions::new().exclude("a[");
    assert!(process_trailingspace(temp_dir.path(), &options).is_err());
    assert_eq!(read(&path), "untouched  \n");
}
