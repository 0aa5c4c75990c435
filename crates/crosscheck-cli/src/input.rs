//! Business-list loading and line normalization.
//!
//! The input file is plain text, one business per line. Some registry
//! exports place the legal-form token after the name
//! (`"MAKMUR, PT Kabupaten Pasaman"`); those lines are reordered to the
//! query form the search expects (`"PT MAKMUR Kabupaten Pasaman"`).

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static SPECIAL_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>()]").expect("valid regex"));
static LEGAL_FORM_REORDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?),\s*([^,]+?)\s+(Kabupaten|Kota)\s+(.+)$").expect("valid regex")
});

/// Failure to read the business-list file. Reported by the caller, which
/// then proceeds with an empty batch rather than aborting the run.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read business list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Loads and normalizes the business list: blank lines skipped, `<>()`
/// stripped, trailing legal-form tokens moved to the front.
///
/// # Errors
///
/// Returns [`InputError::Io`] when the file cannot be read.
pub fn load_businesses(path: &Path) -> Result<Vec<String>, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(normalize_line)
        .collect())
}

fn normalize_line(line: &str) -> String {
    let cleaned = SPECIAL_CHARS_RE.replace_all(line, "");

    if let Some(caps) = LEGAL_FORM_REORDER_RE.captures(&cleaned) {
        let name = caps[1].trim();
        let legal_form = caps[2].trim().to_uppercase();
        let jurisdiction = caps[3].trim();
        let location = caps[4].trim();
        return format!("{legal_form} {name} {jurisdiction} {location}");
    }

    cleaned.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_passes_through() {
        assert_eq!(
            normalize_line("Toko Makmur Kabupaten Pasaman"),
            "Toko Makmur Kabupaten Pasaman"
        );
    }

    #[test]
    fn trailing_legal_form_is_moved_to_front_and_uppercased() {
        assert_eq!(
            normalize_line("ANUGRAH TANI, pt Kabupaten Pasaman"),
            "PT ANUGRAH TANI Kabupaten Pasaman"
        );
    }

    #[test]
    fn angle_and_parenthesis_characters_are_stripped() {
        assert_eq!(
            normalize_line("Toko Makmur (Pusat) Kabupaten Pasaman"),
            "Toko Makmur Pusat Kabupaten Pasaman"
        );
    }

    #[test]
    fn kota_lines_are_also_reordered() {
        assert_eq!(
            normalize_line("SINAR JAYA, CV Kota Padang"),
            "CV SINAR JAYA Kota Padang"
        );
    }

    #[test]
    fn load_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bisnis.txt");
        std::fs::write(&path, "Toko Makmur\n\n  \nWarung Bu Ros Kota Padang\n").unwrap();
        let businesses = load_businesses(&path).unwrap();
        assert_eq!(businesses, vec!["Toko Makmur", "Warung Bu Ros Kota Padang"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_businesses(Path::new("/nonexistent/bisnis.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
