use std::path::PathBuf;
use std::time::Instant;

use kernlab_core::fractal::{render_mandelbrot, Precision};

/// Execute the mandelbrot command: render the default viewport to a PNG.
pub fn cmd_mandelbrot(
    width: Option<u32>,
    height: Option<u32>,
    iterations: Option<u32>,
    double: bool,
    out: PathBuf,
) -> Result<(), String> {
    kernlab_core::config::log_config_usage();
    let defaults = &kernlab_core::config::config_handle().config.mandelbrot;

    let mut params = defaults.to_params();
    params.width = width.unwrap_or(params.width);
    params.height = height.unwrap_or(params.height);
    params.max_iterations = iterations.unwrap_or(params.max_iterations);
    let precision = if double {
        Precision::Double
    } else {
        defaults.precision
    };

    println!(
        "Rendering {}x{} mandelbrot ({:?} precision, {} iterations)...",
        params.width, params.height, precision, params.max_iterations
    );
    let start = Instant::now();
    let image = render_mandelbrot(params, precision).map_err(|e| e.to_string())?;
    tracing::info!("Rendered in {:.2?}", start.elapsed());

    kernlab_core::exporters::export_png(&image, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
}
