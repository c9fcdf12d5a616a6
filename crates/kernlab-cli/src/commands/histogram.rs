use serde::Serialize;
use std::path::PathBuf;

use kernlab_core::white_balance::{
    estimate_white_point, Histogram, HistogramSummary, ScaleFactors, WhitePointEstimate,
};

/// Histogram analysis result for JSON output.
#[derive(Serialize)]
pub struct HistogramResult {
    pub file: String,
    pub dimensions: [u32; 2],
    pub summary: HistogramSummary,
    pub estimate: WhitePointEstimate,
    pub scale: ScaleFactors,
}

/// Execute the histogram command: print per-channel extents and the estimate.
pub fn cmd_histogram(input: PathBuf, json_output: bool) -> Result<(), String> {
    let image = kernlab_core::decoders::decode_image(&input)?;
    let histogram = Histogram::from_image(&image);
    let estimate = estimate_white_point(&histogram);

    let result = HistogramResult {
        file: input.display().to_string(),
        dimensions: [image.width(), image.height()],
        summary: histogram.summary(),
        estimate,
        scale: ScaleFactors::from_estimate(&estimate),
    };

    if json_output {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize histogram: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    println!("Histogram: {}\n", input.display());
    println!("  Dimensions: {}x{}", image.width(), image.height());
    for (name, extent) in ["Red", "Green", "Blue"]
        .iter()
        .zip(result.summary.channels.iter())
    {
        let range = match (extent.min, extent.max) {
            (Some(min), Some(max)) => format!("{}..={}", min, max),
            _ => "empty".to_string(),
        };
        println!("  {:<6} sum={:<10} range={}", name, extent.sum, range);
    }
    let [er, eg, eb] = estimate.to_array();
    println!("\n  White point: [{}, {}, {}]", er, eg, eb);
    println!(
        "  Scale RGB: [{:.4}, {:.4}, {:.4}]",
        result.scale.r, result.scale.g, result.scale.b
    );

    Ok(())
}
