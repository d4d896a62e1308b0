//! End-to-end behavior of hashing, copying, and comparing files.

#[path = "../common/mod.rs"]
mod common;

use common::{TestFixture, patterned};
use filehelpers::{
    CompareOptions, CopyOptions, HashOptions, are_files_identical,
    are_files_identical_with_options, copy_file, copy_file_with_options, hash_for_file,
    hash_for_file_with_options,
};
use rstest::rstest;

#[rstest]
#[case::empty(0)]
#[case::one_byte(1)]
#[case::exact_chunk(256)]
#[case::two_chunks(300)]
#[case::exact_compare_block(1024)]
#[case::odd(4099)]
#[case::large(200_000)]
fn test_copy_then_compare_and_hash(#[case] len: usize) {
    let fx = TestFixture::new();
    let src = fx.write_patterned("src.bin", len);
    let dst = fx.path("dst.bin");

    let copied = copy_file(&src, &dst).unwrap();

    assert_eq!(copied, len as u64);
    fx.assert_file_bytes(&dst, &patterned(len));
    assert!(are_files_identical(&src, &dst).unwrap());
    assert_eq!(hash_for_file(&src).unwrap(), hash_for_file(&dst).unwrap());
}

#[test]
fn test_hash_is_deterministic() {
    let fx = TestFixture::new();
    let file = fx.write_patterned("data.bin", 10_000);

    let first = hash_for_file(&file).unwrap();
    for _ in 0..3 {
        assert_eq!(hash_for_file(&file).unwrap(), first);
    }
}

#[test]
fn test_hash_differs_for_different_contents() {
    let fx = TestFixture::new();
    let a = fx.write("a.txt", b"hello world");
    let b = fx.write("b.txt", b"hello World");

    assert_eq!(hash_for_file(&a).unwrap(), "XrY7u-Ae7tCTyyK7j1rNww==");
    assert_ne!(hash_for_file(&a).unwrap(), hash_for_file(&b).unwrap());
}

#[test]
fn test_hash_300_bytes_spans_two_chunks() {
    let fx = TestFixture::new();
    let file = fx.write_patterned("300.bin", 300);

    let digest = hash_for_file(&file).unwrap();

    assert_eq!(digest, "RUvKBsDe59I-yQS-bbbc9A==");
    // 16 digest bytes encode to 24 padded characters
    assert_eq!(digest.len(), 24);
    assert!(digest.ends_with("=="));
}

#[rstest]
#[case(1)]
#[case(100)]
#[case(256)]
#[case(65536)]
fn test_hash_chunk_size_does_not_change_digest(#[case] chunk_size: usize) {
    let fx = TestFixture::new();
    let file = fx.write_patterned("data.bin", 3000);

    let options = HashOptions::default().with_chunk_size(chunk_size);

    assert_eq!(
        hash_for_file_with_options(&file, &options).unwrap(),
        hash_for_file(&file).unwrap()
    );
}

#[test]
fn test_single_byte_difference_at_offset_1500() {
    let fx = TestFixture::new();
    let data = patterned(2048);
    let mut changed = data.clone();
    changed[1500] = changed[1500].wrapping_add(1);

    let a = fx.write("a.bin", &data);
    let b = fx.write("b.bin", &changed);

    assert!(!are_files_identical(&a, &b).unwrap());
    assert!(!are_files_identical(&b, &a).unwrap());
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(1024)]
#[case(1 << 16)]
fn test_compare_buffer_sizes(#[case] buffer_size: usize) {
    let fx = TestFixture::new();
    let data = patterned(5000);
    let mut changed = data.clone();
    changed[4321] ^= 0x80;

    let a = fx.write("a.bin", &data);
    let b = fx.write("b.bin", &data);
    let c = fx.write("c.bin", &changed);

    let options = CompareOptions::default().with_buffer_size(buffer_size);

    assert!(are_files_identical_with_options(&a, &b, &options).unwrap());
    assert!(!are_files_identical_with_options(&a, &c, &options).unwrap());
}

#[test]
fn test_different_sizes_are_not_identical() {
    let fx = TestFixture::new();
    let a = fx.write_patterned("a.bin", 1000);
    let b = fx.write_patterned("b.bin", 1001);

    assert!(!are_files_identical(&a, &b).unwrap());
}

#[test]
fn test_file_is_identical_to_itself() {
    let fx = TestFixture::new();
    let a = fx.write_patterned("a.bin", 4096);

    assert!(are_files_identical(&a, &a).unwrap());
}

#[test]
fn test_copy_overwrites_destination() {
    let fx = TestFixture::new();
    let src = fx.write("src.txt", b"fresh");
    let dst = fx.write("dst.txt", b"stale content that is longer");

    let options = CopyOptions::default().without_fsync();
    copy_file_with_options(&src, &dst, &options).unwrap();

    fx.assert_file_bytes(&dst, b"fresh");
    assert!(are_files_identical(&src, &dst).unwrap());
}
