//! CSV report writing for verdict records.

use std::path::Path;

use crosscheck_core::VerdictRecord;

const HEADER: [&str; 5] = [
    "Business Name",
    "Query",
    "Crosscheck Result",
    "Latitude",
    "Longitude",
];

/// Writes one row per verdict, in input order, with a `Found`/`Not Found`
/// result column and empty coordinate cells when none were recovered.
///
/// # Errors
///
/// Returns a [`csv::Error`] when the file cannot be created or a row
/// cannot be written.
pub fn write_report(path: &Path, records: &[VerdictRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;

    for record in records {
        let result = if record.found { "Found" } else { "Not Found" };
        let latitude = record.latitude.map(|v| v.to_string()).unwrap_or_default();
        let longitude = record.longitude.map(|v| v.to_string()).unwrap_or_default();
        writer.write_record([
            record.business_name.as_str(),
            record.query.as_str(),
            result,
            latitude.as_str(),
            longitude.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
