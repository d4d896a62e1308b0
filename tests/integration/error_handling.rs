//! Error handling integration tests.
//!
//! These tests verify that each operation reports the right error kind
//! and leaves the filesystem untouched when it fails early:
//! - Missing inputs surface as open errors
//! - Directories are rejected
//! - Destinations are not created when the source is unusable

#[path = "../common/mod.rs"]
mod common;

use common::TestFixture;
use filehelpers::{Error, are_files_identical, copy_file, hash_for_file};
use std::fs;
use std::io;

#[test]
fn test_hash_missing_file_is_open_error() {
    let fx = TestFixture::new();
    let missing = fx.path("missing.bin");

    let err = hash_for_file(&missing).unwrap_err();

    assert!(matches!(err, Error::Open { .. }));
    assert_eq!(err.path(), missing);
    assert_eq!(
        err.io_error().map(io::Error::kind),
        Some(io::ErrorKind::NotFound)
    );
}

#[test]
fn test_copy_missing_source_does_not_create_destination() {
    let fx = TestFixture::new();
    let missing = fx.path("missing.bin");
    let dst = fx.path("dst.bin");

    let err = copy_file(&missing, &dst).unwrap_err();

    assert!(matches!(err, Error::Open { .. }));
    assert_eq!(err.path(), missing);
    assert!(!dst.exists());
}

#[test]
fn test_copy_missing_source_does_not_modify_destination() {
    let fx = TestFixture::new();
    let missing = fx.path("missing.bin");
    let dst = fx.write("dst.bin", b"existing");

    assert!(copy_file(&missing, &dst).is_err());

    fx.assert_file_bytes(&dst, b"existing");
}

#[test]
fn test_compare_missing_lhs() {
    let fx = TestFixture::new();
    let missing = fx.path("missing.bin");
    let present = fx.write("present.bin", b"content");

    let err = are_files_identical(&missing, &present).unwrap_err();

    assert!(matches!(err, Error::Open { .. }));
    assert_eq!(err.path(), missing);
}

#[cfg(unix)]
#[test]
fn test_compare_directory_on_either_side() {
    let fx = TestFixture::new();
    let file = fx.write("file.bin", b"content");
    let dir = fx.mkdir("subdir");

    let err = are_files_identical(&dir, &file).unwrap_err();
    assert!(matches!(err, Error::CompareDirectory(ref p) if *p == dir));
    assert!(err.to_string().contains("Cannot compare directories"));

    let err = are_files_identical(&file, &dir).unwrap_err();
    assert!(matches!(err, Error::CompareDirectory(ref p) if *p == dir));

    let err = are_files_identical(&dir, &dir).unwrap_err();
    assert!(matches!(err, Error::CompareDirectory(_)));
}

#[cfg(unix)]
#[test]
fn test_copy_directory_source_is_rejected() {
    let fx = TestFixture::new();
    let dir = fx.mkdir("subdir");
    let dst = fx.path("dst.bin");

    let err = copy_file(&dir, &dst).unwrap_err();

    assert!(matches!(err, Error::IsADirectory(ref p) if *p == dir));
    assert!(!dst.exists());
}

#[cfg(unix)]
#[test]
fn test_copy_to_unwritable_destination() {
    use std::os::unix::fs::PermissionsExt;

    let fx = TestFixture::new();
    let src = fx.write("src.bin", b"content");
    let locked = fx.mkdir("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let dst = locked.join("dst.bin");
    let result = copy_file(&src, &dst);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    // Root ignores directory permissions
    if let Err(err) = result {
        assert!(matches!(err, Error::Create { .. }));
        assert_eq!(err.path(), dst);
    }
}

#[cfg(unix)]
#[test]
fn test_hash_unreadable_file() {
    use std::os::unix::fs::PermissionsExt;

    let fx = TestFixture::new();
    let file = fx.write("secret.bin", b"content");
    fs::set_permissions(&file, fs::Permissions::from_mode(0o000)).unwrap();

    let result = hash_for_file(&file);

    fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();

    // Root ignores file permissions
    if let Err(err) = result {
        assert!(matches!(err, Error::Open { .. }));
    }
}
