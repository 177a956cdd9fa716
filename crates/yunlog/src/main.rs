mod bootstrap;

use anyhow::Result;
use clap::Parser;
use yunlog_core::settings::Settings;
use yunlog_data::{aggregator, selector};

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("yunlog v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data path: {}, filter: {}, count: {}",
        settings.data_path.display(),
        settings.filter,
        settings.count
    );

    let filter = settings.filter_regex()?;
    let files = selector::last_files(
        &settings.data_path,
        &filter,
        settings.count,
        settings.sort,
    )?;
    let points = aggregator::datadict(&files)?;

    println!("{}", serde_json::to_string_pretty(&points)?);

    Ok(())
}
