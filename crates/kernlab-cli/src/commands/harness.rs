use std::thread;

use kernlab_core::harness::{ChannelReporter, MultiInputHarness, TestOutcome, MAX_INDEXED_DIM};

/// Execute the harness command: run, verify and report the multi-input kernels.
///
/// Returns the outcome so the caller can pick the exit code.
pub fn cmd_harness(dim: Option<usize>, corrupt: Option<usize>) -> Result<TestOutcome, String> {
    kernlab_core::config::log_config_usage();
    let dim = dim.unwrap_or(kernlab_core::config::config_handle().config.harness.dim);
    if dim == 0 {
        return Err("Harness dimension must be at least 1".to_string());
    }
    // ain3 is u16, so larger runs would always fail sum_mixed
    if dim > MAX_INDEXED_DIM {
        return Err(format!(
            "Harness dimension {} exceeds {} (ain3 holds u16 indices)",
            dim, MAX_INDEXED_DIM
        ));
    }

    println!("Running multi-input harness over {} elements...", dim);
    let mut run = MultiInputHarness::new(dim).run_kernels();

    if let Some(index) = corrupt {
        let aout0 = &mut run.outputs_mut().aout0;
        let slot = aout0.get_mut(index).ok_or_else(|| {
            format!("Corrupt index {} out of range for dimension {}", index, dim)
        })?;
        *slot = slot.wrapping_add(1);
        println!("  Corrupted aout0[{}]", index);
    }

    for report in run.verify_outputs() {
        println!(
            "  {:<24} {} ({} of {} mismatched)",
            report.name,
            if report.passed() { "PASSED" } else { "FAILED" },
            report.mismatches,
            report.checked
        );
    }

    let (reporter, receiver) = ChannelReporter::rendezvous();
    let received = thread::scope(|s| {
        let observer = s.spawn(move || receiver.recv());
        let sent = run.finish(&reporter);
        let received = observer
            .join()
            .map_err(|_| "Result observer panicked".to_string())?;
        sent.map_err(|e| e.to_string())?;
        received.map_err(|e| format!("Failed to receive harness result: {}", e))
    })?;

    println!("\n{} (code {})", received, received.code());
    Ok(received)
}
