//! Filter name parsing and kernel preparation.

use kernlab_core::config::FilterDefaults;
use kernlab_core::filters::{AlphaBlend, Contrast, Exposure, Filter, Vibrance};

/// Filter selected on the command line, before its parameter is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Contrast,
    Exposure,
    Vibrance,
    Mirror,
    Alpha,
}

impl FilterKind {
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Contrast => "contrast",
            FilterKind::Exposure => "exposure",
            FilterKind::Vibrance => "vibrance",
            FilterKind::Mirror => "mirror",
            FilterKind::Alpha => "alpha",
        }
    }
}

/// Parse a filter name (case-insensitive)
pub fn parse_filter_kind(name: &str) -> Result<FilterKind, String> {
    match name.trim().to_lowercase().as_str() {
        "contrast" => Ok(FilterKind::Contrast),
        "exposure" => Ok(FilterKind::Exposure),
        "vibrance" => Ok(FilterKind::Vibrance),
        "mirror" => Ok(FilterKind::Mirror),
        "alpha" | "blend" => Ok(FilterKind::Alpha),
        _ => Err(format!(
            "Unknown filter '{}'. Valid options: contrast, exposure, vibrance, mirror, alpha",
            name
        )),
    }
}

/// Prepare a filter kernel from an explicit value or the configured default
pub fn build_filter(
    kind: FilterKind,
    value: Option<f32>,
    defaults: &FilterDefaults,
) -> Result<Filter, String> {
    let filter = match kind {
        FilterKind::Contrast => Contrast::new(value.unwrap_or(defaults.contrast))
            .map(Filter::Contrast)
            .map_err(|e| e.to_string())?,
        FilterKind::Exposure => Exposure::new(value.unwrap_or(defaults.exposure))
            .map(Filter::Exposure)
            .map_err(|e| e.to_string())?,
        FilterKind::Vibrance => Vibrance::new(value.unwrap_or(defaults.vibrance))
            .map(Filter::Vibrance)
            .map_err(|e| e.to_string())?,
        FilterKind::Mirror => {
            if value.is_some() {
                log::warn!("mirror takes no value; ignoring --value");
            }
            Filter::Mirror
        }
        FilterKind::Alpha => {
            let alpha = match value {
                Some(v) if !(0.0..=255.0).contains(&v) => {
                    return Err(format!("Alpha value {} must be in range [0, 255]", v));
                }
                Some(v) => v as u8,
                None => defaults.alpha,
            };
            Filter::AlphaBlend(AlphaBlend::new(alpha))
        }
    };
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_kind() {
        assert_eq!(parse_filter_kind("Contrast").unwrap(), FilterKind::Contrast);
        assert_eq!(parse_filter_kind(" blend ").unwrap(), FilterKind::Alpha);
        assert!(parse_filter_kind("sepia").is_err());
    }

    #[test]
    fn test_build_filter_uses_defaults() {
        let defaults = FilterDefaults::default();
        let filter = build_filter(FilterKind::Alpha, None, &defaults).unwrap();
        assert_eq!(filter, Filter::AlphaBlend(AlphaBlend::new(defaults.alpha)));

        let filter = build_filter(FilterKind::Contrast, Some(0.0), &defaults).unwrap();
        assert_eq!(filter.name(), "contrast");
    }

    #[test]
    fn test_build_filter_rejects_bad_values() {
        let defaults = FilterDefaults::default();
        assert!(build_filter(FilterKind::Exposure, Some(255.0), &defaults).is_err());
        assert!(build_filter(FilterKind::Alpha, Some(300.0), &defaults).is_err());
        assert!(build_filter(FilterKind::Alpha, Some(f32::NAN), &defaults).is_err());
    }
}
