//! Output path utilities.

use std::path::{Path, PathBuf};

/// Determine the PNG output path for a processed input
///
/// # Arguments
/// * `input` - Input file path
/// * `out` - Optional output directory or file path
/// * `suffix` - Appended to the input stem when no file path is given
///
/// # Returns
/// The full output path for the processed image
pub fn determine_output_path(
    input: &Path,
    out: Option<&Path>,
    suffix: &str,
) -> Result<PathBuf, String> {
    let stem = || -> Result<String, String> {
        Ok(input
            .file_stem()
            .ok_or("Invalid input filename")?
            .to_string_lossy()
            .into_owned())
    };

    match out {
        // If out is a directory, use input filename with the suffix
        Some(out_path) if out_path.is_dir() => {
            Ok(out_path.join(format!("{}_{}.png", stem()?, suffix)))
        }
        Some(out_path) => Ok(out_path.to_path_buf()),
        None => {
            let parent = input.parent().unwrap_or(Path::new("."));
            Ok(parent.join(format!("{}_{}.png", stem()?, suffix)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_next_to_input() {
        let path = determine_output_path(Path::new("shots/frame.png"), None, "awb").unwrap();
        assert_eq!(path, PathBuf::from("shots/frame_awb.png"));
    }

    #[test]
    fn test_output_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            determine_output_path(Path::new("frame.png"), Some(dir.path()), "contrast").unwrap();
        assert_eq!(path, dir.path().join("frame_contrast.png"));
    }

    #[test]
    fn test_explicit_output_file_kept() {
        let path = determine_output_path(
            Path::new("frame.png"),
            Some(Path::new("result.png")),
            "awb",
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("result.png"));
    }
}
