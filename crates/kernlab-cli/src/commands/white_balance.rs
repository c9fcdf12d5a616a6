use serde::Serialize;
use std::path::PathBuf;

use kernlab_cli::determine_output_path;
use kernlab_core::white_balance::{auto_white_balance, WhiteBalancePass};

/// White balance result for JSON output.
#[derive(Serialize)]
pub struct WhiteBalanceResult {
    pub file: String,
    pub output: String,
    pub dimensions: [u32; 2],
    pub fallback: bool,
    #[serde(flatten)]
    pub pass: WhiteBalancePass,
}

/// Execute the white-balance command: estimate, correct and write a PNG.
pub fn cmd_white_balance(
    input: PathBuf,
    out: Option<PathBuf>,
    json_output: bool,
) -> Result<(), String> {
    let mut image = kernlab_core::decoders::decode_image(&input)?;
    let pass = auto_white_balance(&mut image);

    let output = determine_output_path(&input, out.as_deref(), "awb")?;
    kernlab_core::exporters::export_png(&image, &output)?;

    let result = WhiteBalanceResult {
        file: input.display().to_string(),
        output: output.display().to_string(),
        dimensions: [image.width(), image.height()],
        fallback: pass.estimate.is_fallback(),
        pass,
    };

    if json_output {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize white balance: {}", e))?;
        println!("{}", json);
    } else {
        let [er, eg, eb] = pass.estimate.to_array();
        println!("White balancing: {}\n", input.display());
        println!("  Dimensions: {}x{}", image.width(), image.height());
        println!("  White point: [{}, {}, {}]", er, eg, eb);
        if result.fallback {
            println!("  (no usable highlight band; falling back to full scale)");
        }
        println!(
            "  Scale RGB: [{:.4}, {:.4}, {:.4}]",
            pass.scale.r, pass.scale.g, pass.scale.b
        );
        println!("\nWrote {}", output.display());
    }

    Ok(())
}
