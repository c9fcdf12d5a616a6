use std::path::PathBuf;

use kernlab_cli::{build_filter, determine_output_path, parse_filter_kind};

/// Execute the filter command: run one per-pixel filter and write a PNG.
pub fn cmd_filter(
    input: PathBuf,
    name: String,
    value: Option<f32>,
    out: Option<PathBuf>,
) -> Result<(), String> {
    kernlab_core::config::log_config_usage();
    let defaults = &kernlab_core::config::config_handle().config.filters;

    let kind = parse_filter_kind(&name)?;
    let filter = build_filter(kind, value, defaults)?;

    let image = kernlab_core::decoders::decode_image(&input)?;
    println!(
        "Applying {} to {} ({}x{})...",
        kind.name(),
        input.display(),
        image.width(),
        image.height()
    );
    let filtered = filter.run(&image);

    let output = determine_output_path(&input, out.as_deref(), kind.name())?;
    kernlab_core::exporters::export_png(&filtered, &output)?;
    println!("Wrote {}", output.display());

    Ok(())
}
