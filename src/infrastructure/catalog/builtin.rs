//! Hardcoded catalog source
//!
//! The same signatures as the bundled JSON asset, compiled in as a table.
//! Useful where the asset cannot be shipped, and as a cross-check that the
//! asset still says what the table says.
//!
//! Reference: https://en.wikipedia.org/wiki/List_of_file_signatures

use crate::core::CatalogLoadError;
use crate::domain::entities::{FileTypeEntry, SignaturePattern};
use crate::domain::repositories::CatalogSource;
use crate::domain::services::Catalog;

/// Catalog source backed by a compiled-in table
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalogSource {
    fn describe(&self) -> String {
        "builtin signature table".to_string()
    }

    fn load(&self) -> Result<Catalog, CatalogLoadError> {
        Catalog::new(builtin_entries()?)
    }
}

fn exact(label: &str, bytes: &[u8]) -> Result<SignaturePattern, CatalogLoadError> {
    SignaturePattern::exact(bytes).ok_or_else(|| CatalogLoadError::EmptyPattern {
        label: label.to_string(),
        pattern: 0,
    })
}

/// "RIFF", four length bytes, then the four-byte form type
fn riff(label: &str, form: &[u8; 4]) -> Result<SignaturePattern, CatalogLoadError> {
    let mut bytes: Vec<Option<u8>> = b"RIFF".iter().copied().map(Some).collect();
    bytes.extend([None; 4]);
    bytes.extend(form.iter().copied().map(Some));
    SignaturePattern::new(bytes).ok_or_else(|| CatalogLoadError::EmptyPattern {
        label: label.to_string(),
        pattern: 0,
    })
}

fn entry(label: &str, patterns: &[&[u8]]) -> Result<FileTypeEntry, CatalogLoadError> {
    let patterns = patterns
        .iter()
        .map(|bytes| exact(label, bytes))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FileTypeEntry::new(label, patterns))
}

fn builtin_entries() -> Result<Vec<FileTypeEntry>, CatalogLoadError> {
    // JFIF and EXIF must stay ahead of the bare 4-byte JPEG marker.
    let exif = SignaturePattern::new(vec![
        Some(0xFF),
        Some(0xD8),
        Some(0xFF),
        Some(0xE1),
        None,
        None,
        Some(b'E'),
        Some(b'x'),
        Some(b'i'),
        Some(b'f'),
        Some(0x00),
        Some(0x00),
    ])
    .ok_or_else(|| CatalogLoadError::EmptyPattern {
        label: "jpg/jpeg".to_string(),
        pattern: 3,
    })?;

    let jpeg = FileTypeEntry::new(
        "jpg/jpeg",
        vec![
            exact("jpg/jpeg", &[0xFF, 0xD8, 0xFF, 0xDB])?,
            exact(
                "jpg/jpeg",
                &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01],
            )?,
            exact("jpg/jpeg", &[0xFF, 0xD8, 0xFF, 0xEE])?,
            exif,
        ],
    );

    Ok(vec![
        entry(
            "zip",
            &[b"PK\x03\x04", b"PK\x05\x06", b"PK\x07\x08"],
        )?,
        entry("png", &[b"\x89PNG\r\n\x1a\n"])?,
        jpeg,
        entry("jpg", &[&[0xFF, 0xD8, 0xFF, 0xE0]])?,
        entry("pdf", &[b"%PDF-"])?,
        entry("mp3", &[&[0xFF, 0xFB], &[0xFF, 0xF3], &[0xFF, 0xF2], b"ID3"])?,
        FileTypeEntry::new("wav", vec![riff("wav", b"WAVE")?]),
        FileTypeEntry::new("avi", vec![riff("avi", b"AVI ")?]),
        entry("iso", &[b"CD001"])?,
        entry("tar", &[b"ustar\x0000", b"ustar  \x00"])?,
        entry("7z", &[&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C]])?,
        entry("xz", &[&[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00]])?,
        entry("gz", &[&[0x1F, 0x8B]])?,
        entry("mkv", &[&[0x1A, 0x45, 0xDF, 0xA3]])?,
        entry("mp4", &[b"ftypisom", b"ftypMSNV"])?,
        entry("sqlite", &[b"SQLite format 3\x00"])?,
        entry("gif", &[b"GIF87a", b"GIF89a"])?,
        entry("tif", &[b"II*\x00", b"MM\x00*"])?,
        entry("mz", &[b"MZ"])?,
        entry("exe", &[b"ZM"])?,
        entry("rar", &[b"Rar!\x1a\x07\x00", b"Rar!\x1a\x07\x01\x00"])?,
        entry("elf", &[b"\x7fELF"])?,
        entry("java class", &[&[0xCA, 0xFE, 0xBA, 0xBE]])?,
        entry("ogg", &[b"OggS"])?,
        entry("bmp", &[b"BM"])?,
        entry(
            "crt",
            &[b"C64 CARTRIDGE   ", b"-----BEGIN CERTIFICATE-----"],
        )?,
        entry("csr", &[b"-----BEGIN CERTIFICATE REQUEST-----"])?,
        FileTypeEntry::new("webp", vec![riff("webp", b"WEBP")?]),
    ])
}
