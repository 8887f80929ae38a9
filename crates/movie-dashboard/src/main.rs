mod bootstrap;
mod report;

use anyhow::Result;
use dashboard_core::settings::Settings;
use dashboard_data::analysis::analyze_dataset;
use dashboard_data::normalizer::ColorPolicy;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Movie Dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Policy: {}, Top-N: {}, Output: {}",
        settings.unknown_color,
        settings.top_n,
        settings.output
    );

    // Explicit path wins; otherwise probe the conventional locations.
    let data_path = match settings.data_path.clone() {
        Some(path) => path,
        None => bootstrap::discover_data_path().ok_or_else(|| {
            anyhow::anyhow!("no dataset found; pass --data-path <FILE or DIRECTORY>")
        })?,
    };

    let policy = match settings.unknown_color.as_str() {
        "drop" => ColorPolicy::DropUnknown,
        _ => ColorPolicy::KeepUnknown,
    };

    // The normalized table and metric bundle are threaded as plain values
    // from here on; nothing holds dataset state globally.
    let result = analyze_dataset(&data_path, policy)?;

    let top_n = settings.top_n as usize;
    let rendered = match settings.output.as_str() {
        "json" => report::render_json(&result, top_n)?,
        _ => report::render_text(&result, top_n),
    };
    print!("{rendered}");

    Ok(())
}
