//! Logging and thread pool setup.

/// Install the tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `info` with `--verbose`.
/// `log` records from kernlab-core are forwarded through the subscriber.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Configure the global rayon pool if a thread count was given
pub fn configure_threads(threads: Option<usize>) -> Result<(), String> {
    if let Some(num_threads) = threads {
        if num_threads == 0 {
            return Err("Thread count must be at least 1".to_string());
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        tracing::info!("Using {} threads for parallel processing", num_threads);
    }
    Ok(())
}
