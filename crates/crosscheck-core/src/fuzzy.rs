//! String similarity primitives for name and location comparison.
//!
//! Both scores are case-insensitive, operate on whitespace-collapsed
//! strings, and report an integer in `0..=100`. [`ratio`] measures whole
//! strings against each other; [`partial_ratio`] measures the shorter
//! string against its best-aligned window of the longer one, which keeps
//! the score high when one side is an extended or truncated form of the
//! other (`"Toko Makmur"` vs `"Toko Makmur Jaya Abadi"`).

use strsim::levenshtein;

/// Whole-string similarity based on Levenshtein edit distance, 0–100.
///
/// Identical strings (after case folding and whitespace collapsing) score
/// 100; two empty strings also score 100.
#[must_use]
pub fn ratio(a: &str, b: &str) -> u32 {
    scaled_levenshtein(&normalize(a), &normalize(b))
}

/// Best-alignment similarity of the shorter string against every
/// equal-length window of the longer string, 0–100.
///
/// Exactly one empty input scores 0: an empty needle says nothing about
/// the haystack.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    let a = normalize(a);
    let b = normalize(b);

    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let long_chars: Vec<char> = long.chars().collect();
    let window = short.chars().count();

    if window == 0 {
        return if long_chars.is_empty() { 100 } else { 0 };
    }
    if window == long_chars.len() {
        return scaled_levenshtein(&short, &long);
    }

    let mut best = 0;
    for start in 0..=(long_chars.len() - window) {
        let slice: String = long_chars[start..start + window].iter().collect();
        best = best.max(scaled_levenshtein(&short, &slice));
        if best == 100 {
            break;
        }
    }
    best
}

/// Lowercases and collapses runs of whitespace to single spaces.
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// `round((1 - distance / max_len) * 100)` over already-normalized input.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_levenshtein(a: &str, b: &str) -> u32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100;
    }
    #[allow(clippy::cast_precision_loss)]
    let similarity = 1.0 - levenshtein(a, b) as f64 / max_len as f64;
    (similarity * 100.0).round() as u32
}

#[cfg(test)]
#[path = "fuzzy_test.rs"]
mod tests;
