//! Domain layer unit tests
//!
//! Tests for signature entities, the catalog and the matcher.

use filechecker::domain::entities::{ClassificationResult, FileTypeEntry, SignaturePattern};
use filechecker::domain::services::{Catalog, classify};
use rstest::*;

fn pattern(slots: &[Option<u8>]) -> SignaturePattern {
    SignaturePattern::new(slots.to_vec()).unwrap()
}

fn exact(bytes: &[u8]) -> SignaturePattern {
    SignaturePattern::exact(bytes).unwrap()
}

fn riff(form: &[u8; 4]) -> SignaturePattern {
    let mut slots = vec![Some(0x52), Some(0x49), Some(0x46), Some(0x46), None, None, None, None];
    slots.extend(form.iter().copied().map(Some));
    pattern(&slots)
}

fn matched(label: &str) -> ClassificationResult {
    ClassificationResult::Matched(label.to_string())
}

// ============================================================================
// Wildcard Tests
// ============================================================================

#[fixture]
fn riff_catalog() -> Catalog {
    Catalog::new(vec![
        FileTypeEntry::new("wav", vec![riff(b"WAVE")]),
        FileTypeEntry::new("avi", vec![riff(b"AVI ")]),
        FileTypeEntry::new("webp", vec![riff(b"WEBP")]),
    ])
    .unwrap()
}

#[rstest]
#[case(&[0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x41, 0x56, 0x45], "wav")]
#[case(&[0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x41, 0x56, 0x49, 0x20], "avi")]
#[case(&[0x52, 0x49, 0x46, 0x46, 0x24, 0x08, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50], "webp")]
#[case(b"RIFF\xFF\xFF\xFF\xFFWAVEfmt ", "wav")]
fn test_riff_wildcards(riff_catalog: Catalog, #[case] buffer: &[u8], #[case] expected: &str) {
    assert_eq!(classify(buffer, &riff_catalog), matched(expected));
}

#[rstest]
fn test_riff_unknown_form_is_no_match(riff_catalog: Catalog) {
    assert_eq!(classify(b"RIFF\x00\x00\x00\x00CDXA", &riff_catalog), ClassificationResult::NoMatch);
}

// ============================================================================
// PNG Scenario
// ============================================================================

const PNG: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[fixture]
fn png_catalog() -> Catalog {
    Catalog::new(vec![FileTypeEntry::new("png", vec![exact(&PNG)])]).unwrap()
}

#[rstest]
fn test_png_exact_match(png_catalog: Catalog) {
    assert_eq!(classify(&PNG, &png_catalog), matched("png"));
}

#[rstest]
fn test_png_one_byte_short(png_catalog: Catalog) {
    assert_eq!(classify(&PNG[..7], &png_catalog), ClassificationResult::NoMatch);
}

#[rstest]
fn test_png_with_trailing_bytes(png_catalog: Catalog) {
    let mut buffer = PNG.to_vec();
    buffer.extend_from_slice(&[0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R']);
    assert_eq!(classify(&buffer, &png_catalog), matched("png"));
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[fixture]
fn jpeg_catalog() -> Catalog {
    Catalog::new(vec![
        FileTypeEntry::new(
            "jpg/jpeg",
            vec![pattern(&[
                Some(0xFF),
                Some(0xD8),
                Some(0xFF),
                Some(0xE1),
                None,
                None,
                Some(0x45),
                Some(0x78),
                Some(0x69),
                Some(0x66),
                Some(0x00),
                Some(0x00),
            ])],
        ),
        FileTypeEntry::new("jpg", vec![exact(&[0xFF, 0xD8, 0xFF, 0xE0])]),
    ])
    .unwrap()
}

#[rstest]
fn test_jfif_does_not_hit_exif_pattern(jpeg_catalog: Catalog) {
    assert_eq!(classify(&[0xFF, 0xD8, 0xFF, 0xE0], &jpeg_catalog), matched("jpg"));
    assert_eq!(
        classify(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01], &jpeg_catalog),
        matched("jpg")
    );
}

#[rstest]
fn test_exif_hits_first_entry(jpeg_catalog: Catalog) {
    let exif = [0xFF, 0xD8, 0xFF, 0xE1, 0x1C, 0x45, 0x45, 0x78, 0x69, 0x66, 0x00, 0x00];
    assert_eq!(classify(&exif, &jpeg_catalog), matched("jpg/jpeg"));
}

#[rstest]
fn test_first_entry_wins_when_both_match() {
    let catalog = Catalog::new(vec![
        FileTypeEntry::new("first", vec![exact(&[0xAA, 0xBB, 0xCC])]),
        FileTypeEntry::new("second", vec![exact(&[0xAA])]),
    ])
    .unwrap();
    assert_eq!(classify(&[0xAA, 0xBB, 0xCC, 0xDD], &catalog), matched("first"));

    let reversed = Catalog::new(catalog.entries().iter().rev().cloned().collect()).unwrap();
    assert_eq!(classify(&[0xAA, 0xBB, 0xCC, 0xDD], &reversed), matched("second"));
}

#[rstest]
fn test_later_alternative_of_earlier_entry_beats_later_entry() {
    let catalog = Catalog::new(vec![
        FileTypeEntry::new("zip", vec![exact(b"PK\x03\x04"), exact(b"PK\x05\x06")]),
        FileTypeEntry::new("empty-zip", vec![exact(b"PK\x05\x06")]),
    ])
    .unwrap();
    assert_eq!(classify(b"PK\x05\x06\x00\x00", &catalog), matched("zip"));
}

// ============================================================================
// Buffer Length Tests
// ============================================================================

#[rstest]
#[case(&[0x01])]
#[case(&[0x89, 0x50])]
#[case(&[0x52, 0x49, 0x46, 0x46, 0x00])]
fn test_buffer_shorter_than_every_pattern(riff_catalog: Catalog, #[case] buffer: &[u8]) {
    assert_eq!(classify(buffer, &riff_catalog), ClassificationResult::NoMatch);
}

#[rstest]
fn test_empty_buffer_regardless_of_catalog(
    riff_catalog: Catalog,
    png_catalog: Catalog,
    jpeg_catalog: Catalog,
) {
    for catalog in [riff_catalog, png_catalog, jpeg_catalog, Catalog::empty()] {
        assert_eq!(classify(&[], &catalog), ClassificationResult::BufferTooShort);
    }
}

#[rstest]
fn test_classify_is_idempotent(jpeg_catalog: Catalog) {
    let buffer = [0xFF, 0xD8, 0xFF, 0xE0, 0x00];
    let first = classify(&buffer, &jpeg_catalog);
    for _ in 0..10 {
        assert_eq!(classify(&buffer, &jpeg_catalog), first);
    }
    assert_eq!(jpeg_catalog.classify(&buffer), first);
}

// ============================================================================
// ClassificationResult Tests
// ============================================================================

#[rstest]
#[case(ClassificationResult::Matched("png".into()), "png")]
#[case(ClassificationResult::NoMatch, "unknown")]
#[case(ClassificationResult::BufferTooShort, "failed to read file!")]
fn test_result_labels(#[case] result: ClassificationResult, #[case] expected: &str) {
    assert_eq!(result.label(), expected);
}
