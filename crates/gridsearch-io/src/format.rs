//! Image format identification

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// PBM bitmap (P1 plain or P4 raw)
    Pbm,
}

impl ImageFormat {
    /// Conventional file extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Unknown => "",
            ImageFormat::Png => "png",
            ImageFormat::Pbm => "pbm",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" => ImageFormat::Png,
            "pbm" => ImageFormat::Pbm,
            _ => ImageFormat::Unknown,
        }
    }
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Detect the format of encoded image data from its magic bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> ImageFormat {
    if data.starts_with(&PNG_SIGNATURE) {
        ImageFormat::Png
    } else if data.starts_with(b"P1") || data.starts_with(b"P4") {
        ImageFormat::Pbm
    } else {
        ImageFormat::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(detect_format_from_bytes(&PNG_SIGNATURE), ImageFormat::Png);
        assert_eq!(detect_format_from_bytes(b"P4\n2 2\n"), ImageFormat::Pbm);
        assert_eq!(detect_format_from_bytes(b"P1 1 1 0"), ImageFormat::Pbm);
        assert_eq!(detect_format_from_bytes(b"GIF89a"), ImageFormat::Unknown);
        assert_eq!(detect_format_from_bytes(&[]), ImageFormat::Unknown);
    }

    #[test]
    fn test_extension() {
        assert_eq!(ImageFormat::from_extension("PNG"), ImageFormat::Png);
        assert_eq!(ImageFormat::Pbm.extension(), "pbm");
        assert_eq!(ImageFormat::from_extension("tif"), ImageFormat::Unknown);
    }
}
