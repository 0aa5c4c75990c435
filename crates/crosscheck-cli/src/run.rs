//! The batch crosscheck run: load region and businesses, resolve each
//! query sequentially, write the CSV report.

use std::path::Path;
use std::time::Duration;

use crosscheck_core::{AppConfig, MatchThresholds, Region};
use crosscheck_maps::{crosscheck_business, CrosscheckOptions, ReplayDir};

use crate::input::load_businesses;
use crate::report::write_report;

fn options_from_config(config: &AppConfig) -> CrosscheckOptions {
    CrosscheckOptions {
        max_list_candidates: config.max_list_candidates,
        redirect_poll_attempts: config.redirect_poll_attempts,
        redirect_poll_interval: Duration::from_secs(config.redirect_poll_interval_secs),
        region_phrase: config.region_phrase.clone(),
        thresholds: MatchThresholds::default(),
    }
}

/// Runs the full crosscheck batch.
///
/// Queries are processed strictly sequentially; a query that fails is
/// recorded as not found and the batch continues. An unreadable business
/// list is reported and treated as an empty batch.
///
/// # Errors
///
/// Returns an error only for run-fatal conditions: an unloadable region
/// boundary or an unwritable report file.
pub(crate) async fn run_crosscheck(
    config: &AppConfig,
    input: &Path,
    pages: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let region = Region::from_geojson_file(&config.region_path)
        .map_err(|e| anyhow::anyhow!("failed to load region boundary: {e}"))?;

    let businesses = match load_businesses(input) {
        Ok(businesses) => businesses,
        Err(err) => {
            tracing::error!(error = %err, "business list not loadable — proceeding with empty batch");
            Vec::new()
        }
    };
    tracing::info!(total = businesses.len(), "starting crosscheck batch");

    let source = ReplayDir::new(pages);
    let options = options_from_config(config);

    let mut records = Vec::with_capacity(businesses.len());
    for query in &businesses {
        let record = crosscheck_business(&source, query, &region, &options).await;
        tracing::info!(
            business = %record.business_name,
            found = record.found,
            "query resolved"
        );
        records.push(record);
    }

    write_report(output, &records)
        .map_err(|e| anyhow::anyhow!("failed to write report {}: {e}", output.display()))?;

    let found = records.iter().filter(|r| r.found).count();
    tracing::info!(
        total = records.len(),
        found,
        not_found = records.len() - found,
        report = %output.display(),
        "crosscheck batch complete"
    );

    Ok(())
}
