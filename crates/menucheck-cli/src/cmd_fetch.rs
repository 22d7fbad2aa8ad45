use anyhow::{Context, Result};
use menucheck::v1::{ValidateOptions, validate_with};
use menucheck_fetch::{FetchConfig, HttpSource, PageSource, fetch_all};
use std::time::Duration;

use crate::cmd_check::{Output, format_result};

pub fn run(
    url: String,
    retries: u32,
    timeout_secs: u64,
    options: &ValidateOptions,
    output: Output,
) -> Result<()> {
    let config = FetchConfig {
        base_url: url,
        timeout: Duration::from_secs(timeout_secs),
        max_retries: retries,
        ..FetchConfig::default()
    };
    let source = HttpSource::new(config).context("Failed to build HTTP client")?;
    println!("{}", run_with_source(&source, options, output)?);
    Ok(())
}

fn run_with_source<S: PageSource>(
    source: S,
    options: &ValidateOptions,
    output: Output,
) -> Result<String> {
    let fetched = fetch_all(source).context("Failed to fetch menus")?;
    tracing::info!(
        menus = fetched.records.len(),
        pages = fetched.pages,
        total = fetched.pagination.total,
        "fetched menus"
    );
    if fetched.records.len() != fetched.pagination.total as usize {
        tracing::warn!(
            fetched = fetched.records.len(),
            total = fetched.pagination.total,
            "record count differs from the declared total"
        );
    }
    let result = validate_with(&fetched.graph(), options);
    format_result(&result, output)
}
