use gemclean_fs::io;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Gemfile");

    io::write_atomic(&path, b"gem \"rake\"\n").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "gem \"rake\"\n");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Gemfile");
    fs::write(&path, "original").unwrap();

    io::write_atomic(&path, b"updated").unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "updated");
}

#[test]
fn test_write_atomic_creates_missing_parents() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app").join("Gemfile");

    io::write_text(&path, "source \"https://rubygems.org\"\n").unwrap();

    assert_eq!(
        io::read_text(&path).unwrap(),
        "source \"https://rubygems.org\"\n"
    );
}

#[test]
fn test_read_bytes_preserves_non_utf8() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Gemfile.lock");
    let payload = vec![0xff, 0xfe, b'\r', b'\n', 0x00];
    fs::write(&path, &payload).unwrap();

    assert_eq!(io::read_bytes(&path).unwrap(), payload);
}

#[test]
fn test_read_text_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let result = io::read_text(&temp.path().join("missing"));
    assert!(result.is_err());
}

#[test]
fn test_remove_file_if_exists() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Gemfile.lock");
    fs::write(&path, "GEM\n").unwrap();

    assert!(io::remove_file_if_exists(&path).unwrap());
    assert!(!path.exists());
    assert!(!io::remove_file_if_exists(&path).unwrap());
}
