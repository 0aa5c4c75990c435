use super::*;

// -----------------------------------------------------------------------
// ratio
// -----------------------------------------------------------------------

#[test]
fn ratio_exact_match_is_100() {
    assert_eq!(ratio("Toko Makmur", "Toko Makmur"), 100);
}

#[test]
fn ratio_is_case_insensitive() {
    assert_eq!(ratio("Toko Makmur", "toko makmur"), 100);
}

#[test]
fn ratio_collapses_whitespace() {
    assert_eq!(ratio("Toko  Makmur", " Toko Makmur "), 100);
}

#[test]
fn ratio_completely_different_strings_score_low() {
    assert!(ratio("Toko Makmur", "Bengkel Pak Udin") < 40);
}

#[test]
fn ratio_both_empty_is_100() {
    assert_eq!(ratio("", ""), 100);
}

#[test]
fn ratio_one_empty_is_0() {
    assert_eq!(ratio("Toko Makmur", ""), 0);
}

#[test]
fn ratio_single_edit() {
    // One substitution over 11 chars: round((1 - 1/11) * 100) = 91.
    assert_eq!(ratio("Toko Makmur", "Toko Makmor"), 91);
}

// -----------------------------------------------------------------------
// partial_ratio
// -----------------------------------------------------------------------

#[test]
fn partial_ratio_substring_scores_100() {
    assert_eq!(partial_ratio("Toko Makmur", "Toko Makmur Jaya Abadi"), 100);
}

#[test]
fn partial_ratio_is_symmetric_in_argument_order() {
    assert_eq!(
        partial_ratio("Toko Makmur Jaya Abadi", "Toko Makmur"),
        partial_ratio("Toko Makmur", "Toko Makmur Jaya Abadi"),
    );
}

#[test]
fn partial_ratio_equal_length_falls_back_to_ratio() {
    assert_eq!(
        partial_ratio("Toko Makmur", "Toko Makmor"),
        ratio("Toko Makmur", "Toko Makmor"),
    );
}

#[test]
fn partial_ratio_empty_needle_against_text_is_0() {
    assert_eq!(partial_ratio("", "Toko Makmur"), 0);
}

#[test]
fn partial_ratio_both_empty_is_100() {
    assert_eq!(partial_ratio("", ""), 100);
}

#[test]
fn partial_ratio_at_least_ratio_for_substring_relationships() {
    let whole = "RM Sederhana Masakan Padang";
    let part = "RM Sederhana";
    assert!(partial_ratio(part, whole) >= ratio(part, whole));
}
