//! Kernel configuration management.
//!
//! This module provides configuration loading, the global verbose flag,
//! and the default parameter sets used by the CLI.

mod defaults;

pub use defaults::{FilterDefaults, HarnessDefaults, MandelbrotDefaults};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Candidate config file names searched for on disk.
const CONFIG_FILENAMES: &[&str] = &["kernlab.yml", "kernlab.yaml"];

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "KERNLAB_CONFIG";

/// Loaded configuration with its source path and any warnings.
#[derive(Debug)]
pub struct KernlabConfigHandle {
    pub config: KernlabConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl KernlabConfigHandle {
    fn with_config(config: KernlabConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct KernlabConfig {
    pub filters: FilterDefaults,
    pub mandelbrot: MandelbrotDefaults,
    pub harness: HarnessDefaults,
}

impl KernlabConfig {
    fn sanitize(mut self) -> Self {
        self.filters.sanitize();
        self.mandelbrot.sanitize();
        self.harness.sanitize();
        self
    }

    /// Parse and sanitize a YAML document
    pub fn from_yaml(contents: &str) -> Result<Self, String> {
        serde_yaml::from_str::<KernlabConfig>(contents)
            .map(KernlabConfig::sanitize)
            .map_err(|e| e.to_string())
    }
}

/// Load configuration from disk, optionally forcing a specific path.
///
/// The first candidate that parses wins; unreadable or malformed files are
/// skipped with a warning and built-in defaults are the final fallback.
pub fn load_config(custom_path: Option<&Path>) -> KernlabConfigHandle {
    let mut warnings = Vec::new();

    for candidate in config_candidates(custom_path) {
        if !candidate.is_file() {
            continue;
        }

        match fs::read_to_string(&candidate) {
            Ok(contents) => match KernlabConfig::from_yaml(&contents) {
                Ok(config) => {
                    let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                    return KernlabConfigHandle::with_config(config, Some(source), warnings);
                }
                Err(err) => warnings.push(format!(
                    "Failed to parse config {}: {}",
                    candidate.display(),
                    err
                )),
            },
            Err(err) => warnings.push(format!(
                "Failed to read config {}: {}",
                candidate.display(),
                err
            )),
        }
    }

    warnings.push("No kernlab config found; using built-in defaults.".to_string());
    KernlabConfigHandle::with_config(KernlabConfig::default(), None, warnings)
}

/// Config file candidates in search order
fn config_candidates(custom_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = custom_path {
        candidates.push(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(home_dir) = dirs::home_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(home_dir.join("kernlab").join(name));
        }
    }

    candidates
}

static CONFIG_HANDLE: OnceLock<KernlabConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Load the process-wide configuration, honouring `custom_path` on first call.
///
/// Later calls return the already loaded handle and ignore their argument.
pub fn init_config(custom_path: Option<&Path>) -> &'static KernlabConfigHandle {
    CONFIG_HANDLE.get_or_init(|| load_config(custom_path))
}

/// Access the global configuration (loaded once per process).
pub fn config_handle() -> &'static KernlabConfigHandle {
    init_config(None)
}

/// Log config source and warnings the first time it is requested.
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        let handle = config_handle();
        match &handle.source {
            Some(source) => log::info!("Loaded kernlab config from {}", source.display()),
            None => log::info!("Using built-in kernlab defaults"),
        }

        for warning in &handle.warnings {
            if is_verbose() {
                log::warn!("Config warning: {}", warning);
            } else {
                log::debug!("Config warning: {}", warning);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::Precision;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = KernlabConfig::from_yaml("{}").unwrap();
        assert_eq!(config, KernlabConfig::default());
        assert_eq!(config.mandelbrot.to_params().max_iterations, 500);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "filters:\n  contrast: 20\nmandelbrot:\n  precision: double\n";
        let config = KernlabConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.filters.contrast, 20.0);
        assert_eq!(config.filters.alpha, 128);
        assert_eq!(config.mandelbrot.precision, Precision::Double);
        assert_eq!(config.mandelbrot.width, 1024);
    }

    #[test]
    fn test_sanitize_clamps_out_of_range() {
        let yaml = "filters:\n  exposure: 300\nmandelbrot:\n  max_iterations: 1\n  width: 0\nharness:\n  dim: 0\n";
        let config = KernlabConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.filters.exposure, 254.0);
        assert_eq!(config.mandelbrot.max_iterations, 3);
        assert_eq!(config.mandelbrot.width, 1);
        assert_eq!(config.harness.dim, 1);
        assert!(config.mandelbrot.to_params().validate().is_ok());
    }

    #[test]
    fn test_sanitize_caps_harness_dim_at_u16_range() {
        let config = KernlabConfig::from_yaml("harness:\n  dim: 100000\n").unwrap();
        assert_eq!(config.harness.dim, crate::harness::MAX_INDEXED_DIM);
        assert!(KernlabConfig::default().harness.dim <= crate::harness::MAX_INDEXED_DIM);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(KernlabConfig::from_yaml("filters: [1, 2").is_err());
    }

    #[test]
    fn test_load_config_from_custom_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kernlab.yml");
        fs::write(&path, "harness:\n  dim: 42\n").unwrap();

        let handle = load_config(Some(path.as_path()));
        assert_eq!(handle.config.harness.dim, 42);
        assert!(handle.source.is_some());
    }

    #[test]
    fn test_load_config_skips_bad_file_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yml");
        fs::write(&path, "filters: [").unwrap();

        let handle = load_config(Some(path.as_path()));
        assert!(handle
            .warnings
            .iter()
            .any(|w| w.contains("Failed to parse config")));
    }

    #[test]
    fn test_verbose_flag_round_trip() {
        let before = is_verbose();
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(before);
    }
}
