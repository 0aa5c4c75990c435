use super::*;

// -----------------------------------------------------------------------
// candidates_from_links
// -----------------------------------------------------------------------

#[test]
fn link_round_trip_name_and_coordinate() {
    let links = ["https://www.google.com/maps/place/Toko+Makmur/data=!4m7!3m6!3d0.123!4d99.456"];
    let candidates = candidates_from_links(&links);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].name.as_deref(), Some("Toko Makmur"));
    let coordinate = candidates[0].coordinate.expect("expected a coordinate");
    assert!((coordinate.lat - 0.123).abs() < f64::EPSILON);
    assert!((coordinate.lon - 99.456).abs() < f64::EPSILON);
}

#[test]
fn link_is_percent_decoded_before_extraction() {
    let links = ["https://maps.example/place/Warung%20Bu%20Ros/data=!3d-0.5!4d100.25"];
    let candidates = candidates_from_links(&links);
    assert_eq!(candidates[0].name.as_deref(), Some("Warung Bu Ros"));
}

#[test]
fn negative_coordinates_parse() {
    let links = ["https://maps.example/place/Toko+Selatan/data=!3d-0.123!4d-99.456"];
    let candidates = candidates_from_links(&links);
    let coordinate = candidates[0].coordinate.expect("expected a coordinate");
    assert!(coordinate.lat < 0.0);
    assert!(coordinate.lon < 0.0);
}

#[test]
fn link_without_place_segment_yields_nameless_candidate() {
    let links = ["https://maps.example/search?q=toko!3d0.1!4d100.0"];
    let candidates = candidates_from_links(&links);
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].name.is_none());
    assert!(candidates[0].coordinate.is_some());
}

#[test]
fn missing_longitude_marker_drops_whole_coordinate() {
    let links = ["https://maps.example/place/Toko+Makmur/data=!3d0.123"];
    let candidates = candidates_from_links(&links);
    assert_eq!(candidates[0].name.as_deref(), Some("Toko Makmur"));
    assert!(candidates[0].coordinate.is_none());
}

#[test]
fn empty_link_list_yields_no_candidates() {
    let links: [&str; 0] = [];
    assert!(candidates_from_links(&links).is_empty());
}

// -----------------------------------------------------------------------
// app-state payload
// -----------------------------------------------------------------------

/// Builds a payload whose record slot [9][0] holds `record`.
fn payload_with_record(record: &str) -> String {
    let mut outer = vec![serde_json::Value::Null; 9];
    outer.push(serde_json::json!([record]));
    serde_json::to_string(&outer).expect("valid test payload")
}

#[test]
fn payload_record_splits_into_name_and_location() {
    let payload = payload_with_record("Toko Makmur · Jl. Sudirman, Kabupaten Pasaman, Sumatera Barat");
    let (name, location) = name_and_location_from_payload(&payload);
    assert_eq!(name.as_deref(), Some("Toko Makmur"));
    assert_eq!(location.as_deref(), Some("Kabupaten Pasaman"));
}

#[test]
fn payload_location_is_none_without_jurisdiction_marker() {
    let payload = payload_with_record("Toko Makmur · Jl. Sudirman No 4");
    let (name, location) = name_and_location_from_payload(&payload);
    assert_eq!(name.as_deref(), Some("Toko Makmur"));
    assert!(location.is_none());
}

#[test]
fn payload_without_separator_yields_nothing() {
    let payload = payload_with_record("Toko Makmur Jl. Sudirman");
    assert_eq!(name_and_location_from_payload(&payload), (None, None));
}

#[test]
fn malformed_payload_yields_nothing() {
    assert_eq!(name_and_location_from_payload("not json"), (None, None));
}

#[test]
fn short_payload_array_yields_nothing() {
    assert_eq!(name_and_location_from_payload("[1, 2, 3]"), (None, None));
}

#[test]
fn app_state_blob_slices_between_markers() {
    let html = r#"<html>…;window.APP_INITIALIZATION_STATE=[null,[1]];window.APP_FLAGS=[];</html>"#;
    assert_eq!(app_state_blob(html), Some("[null,[1]]"));
}

#[test]
fn app_state_blob_missing_marker_is_none() {
    assert!(app_state_blob("<html>no state here</html>").is_none());
}

// -----------------------------------------------------------------------
// coordinate_from_url
// -----------------------------------------------------------------------

#[test]
fn url_coordinate_parses_lat_then_lon() {
    let coordinate =
        coordinate_from_url("https://www.google.com/maps/place/Toko+Makmur/@0.1234,99.8765,17z")
            .expect("expected a coordinate");
    assert!((coordinate.lat - 0.1234).abs() < f64::EPSILON);
    assert!((coordinate.lon - 99.8765).abs() < f64::EPSILON);
}

#[test]
fn url_without_at_marker_has_no_coordinate() {
    assert!(coordinate_from_url("https://www.google.com/maps/search/toko+makmur").is_none());
}

#[test]
fn url_negative_coordinates_parse() {
    let coordinate = coordinate_from_url("https://maps.example/@-6.2088,106.8456,12z")
        .expect("expected a coordinate");
    assert!(coordinate.lat < 0.0);
}

// -----------------------------------------------------------------------
// profile_location_from_address
// -----------------------------------------------------------------------

#[test]
fn english_regency_form_is_normalized() {
    let location = profile_location_from_address(
        "Jl. Sudirman No 4, Lubuk Sikaping, Pasaman Regency, West Sumatra 26318",
    );
    assert_eq!(location.as_deref(), Some("Kabupaten Pasaman"));
}

#[test]
fn indonesian_kabupaten_form_is_a_fallback() {
    let location =
        profile_location_from_address("Jl. Sudirman No 4, Kabupaten Pasaman, Sumatera Barat");
    assert_eq!(location.as_deref(), Some("Kabupaten Pasaman"));
}

#[test]
fn address_without_jurisdiction_yields_none() {
    assert!(profile_location_from_address("Jl. Sudirman No 4").is_none());
}
