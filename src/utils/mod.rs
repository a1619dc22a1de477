const KILOBYTE: f64 = 1024.0;
const MEGABYTE: f64 = 1024.0 * 1024.0;
const GIGABYTE: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn sanitize_filename(filename: &str) -> String {
    // Remove or replace characters that are invalid in filenames
    filename
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '|' | '?' | '*' => '_',
            '/' | '\\' => '-',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Human-readable size with binary thresholds. A unit is used only when the
/// size is strictly above it.
pub fn format_display_size(size: u64) -> String {
    let bytes = size as f64;

    if bytes > GIGABYTE {
        format!("{:.2} GB", bytes / GIGABYTE)
    } else if bytes > MEGABYTE {
        format!("{:.2} MB", bytes / MEGABYTE)
    } else if bytes > KILOBYTE {
        format!("{:.1} KB", bytes / KILOBYTE)
    } else {
        format!("{} bytes", size)
    }
}

/// Decodes UTF-8, dropping invalid bytes instead of substituting them.
pub fn decode_lenient(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("hello/world"), "hello-world");
        assert_eq!(sanitize_filename("test<>file"), "test__file");
        assert_eq!(sanitize_filename("normal_file.flv"), "normal_file.flv");
        assert_eq!(
            sanitize_filename("Networks: Opportunities"),
            "Networks_ Opportunities"
        );
    }

    #[test]
    fn test_format_display_size() {
        assert_eq!(format_display_size(0), "0 bytes");
        assert_eq!(format_display_size(500), "500 bytes");
        assert_eq!(format_display_size(1024), "1024 bytes");
        assert_eq!(format_display_size(2048), "2.0 KB");
        assert_eq!(format_display_size(1024 * 1024), "1024.0 KB");
        assert_eq!(format_display_size(1024 * 1024 * 3 / 2), "1.50 MB");
        assert_eq!(format_display_size(1024 * 1024 * 1024), "1024.00 MB");
        assert_eq!(format_display_size(1024 * 1024 * 1024 * 5 / 2), "2.50 GB");
    }

    #[test]
    fn test_decode_lenient() {
        assert_eq!(decode_lenient(b"plain"), "plain");
        assert_eq!(decode_lenient(b"ab\xffcd"), "abcd");
        assert_eq!(decode_lenient("caf\u{e9}".as_bytes()), "caf\u{e9}");
        // truncated multi-byte sequence at the end
        assert_eq!(decode_lenient(b"abc\xe2\x82"), "abc");
    }
}
