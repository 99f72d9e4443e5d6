//! Layout config: bundled default via include_str!, parsed with serde_json.

use serde::Deserialize;
use thiserror::Error;

use crate::content::SectionId;
use crate::state::{Breakpoint, Viewport, DEFAULT_DESKTOP_BREAKPOINT_PX};

const DEFAULT_UI_CONFIG: &str = include_str!("../assets/ui_config.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ui config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("desktop breakpoint must be positive, got {0}px")]
    InvalidBreakpoint(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_breakpoint")]
    pub desktop_breakpoint_px: u32,
    #[serde(default)]
    pub initial_section: SectionId,
    /// Viewport assumed until the document reports the media query.
    #[serde(default = "default_viewport_width")]
    pub fallback_viewport_width: u32,
}

fn default_breakpoint() -> u32 {
    DEFAULT_DESKTOP_BREAKPOINT_PX
}

fn default_viewport_width() -> u32 {
    1280
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint_px: default_breakpoint(),
            initial_section: SectionId::default(),
            fallback_viewport_width: default_viewport_width(),
        }
    }
}

impl LayoutConfig {
    /// Bundled config, or defaults if it does not validate.
    pub fn load() -> Self {
        Self::from_json(DEFAULT_UI_CONFIG).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default layout config");
            Self::default()
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_json::from_str(raw)?;
        if config.desktop_breakpoint_px == 0 {
            return Err(ConfigError::InvalidBreakpoint(0));
        }
        Ok(config)
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint {
            min_width_px: self.desktop_breakpoint_px,
        }
    }

    pub fn fallback_viewport(&self) -> Viewport {
        Viewport::new(self.fallback_viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(LayoutConfig::load(), LayoutConfig::default());
        assert_eq!(LayoutConfig::default().breakpoint(), Breakpoint::default());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = LayoutConfig::from_json("{}").unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn overrides_apply() {
        let config = LayoutConfig::from_json(
            r#"{"desktop_breakpoint_px": 900, "initial_section": "analytics", "fallback_viewport_width": 640}"#,
        )
        .unwrap();
        assert_eq!(config.breakpoint().min_width_px, 900);
        assert_eq!(config.initial_section, SectionId::Analytics);
        assert!(!config.breakpoint().is_desktop(config.fallback_viewport()));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = LayoutConfig::from_json(r#"{"initial_section": "settings"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("unknown section id"));
    }

    #[test]
    fn zero_breakpoint_is_rejected() {
        let err = LayoutConfig::from_json(r#"{"desktop_breakpoint_px": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBreakpoint(0)));
    }
}
