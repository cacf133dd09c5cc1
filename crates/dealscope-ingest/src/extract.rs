//! Extension-keyed plain-text extraction.
//!
//! Each supported extension maps to an extractor function; unknown
//! extensions fall through to a lossy UTF-8 passthrough so uploads never
//! fail on format grounds. Binary formats (pdf, docx, images) are the
//! domain of external extraction services and are not parsed here.

type Extractor = fn(&[u8]) -> String;

/// Extracts plain text from raw document bytes based on the filename's
/// extension. Case-insensitive; never fails — unextractable content yields
/// an empty string or a lossy decode, not an error.
#[must_use]
pub fn extract_text(filename: &str, raw: &[u8]) -> String {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    extractor_for(&extension)(raw)
}

/// Capability lookup: extension (lowercase, no dot) → extractor.
fn extractor_for(extension: &str) -> Extractor {
    match extension {
        "txt" | "md" => extract_plain,
        "json" => extract_json,
        "csv" => extract_csv,
        _ => extract_plain,
    }
}

fn extract_plain(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Pretty-prints valid JSON; unparsable input yields an empty string.
fn extract_json(raw: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(raw);
    serde_json::from_str::<serde_json::Value>(&decoded)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_default()
}

/// Re-joins CSV rows as comma-separated prose lines.
fn extract_csv(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .lines()
        .map(|line| {
            line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_and_md_decode_lossily() {
        assert_eq!(extract_text("deck.txt", b"hello world"), "hello world");
        assert_eq!(extract_text("notes.MD", b"# title"), "# title");
        // Invalid UTF-8 is replaced, not rejected.
        let text = extract_text("deck.txt", &[0x68, 0xff, 0x69]);
        assert!(text.contains('h') && text.contains('i'));
    }

    #[test]
    fn json_is_pretty_printed() {
        let text = extract_text("metrics.json", br#"{"a":1}"#);
        assert_eq!(text, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn invalid_json_yields_empty_string() {
        assert_eq!(extract_text("metrics.json", b"{not json"), "");
    }

    #[test]
    fn csv_rows_are_rejoined() {
        let text = extract_text("kpis.csv", b"metric,value\nrevenue, 12");
        assert_eq!(text, "metric, value\nrevenue, 12");
    }

    #[test]
    fn unknown_extension_passes_through() {
        assert_eq!(extract_text("raw.bin", b"opaque"), "opaque");
        assert_eq!(extract_text("no-extension", b"plain"), "plain");
    }
}
