//! Configuration loading.
//!
//! `defaults/mdhtml.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`MdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::mdhtml::inlines::PairingOptions;

const DEFAULT_TOML: &str = include_str!("../../defaults/mdhtml.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MdConfig {
    pub render: RenderConfig,
    pub inline: InlineConfig,
}

/// Output and line handling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    pub format: String,
    pub headers: bool,
    pub escape_html: bool,
}

/// Emphasis pairing knobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InlineConfig {
    pub split_unmatched_strong: bool,
}

impl InlineConfig {
    pub fn pairing_options(&self) -> PairingOptions {
        PairingOptions {
            split_unmatched_strong: self.split_unmatched_strong,
        }
    }
}

/// Mirrors `defaults/mdhtml.default.toml`.
impl Default for MdConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig {
                format: "html".to_string(),
                headers: true,
                escape_html: false,
            },
            inline: InlineConfig {
                split_unmatched_strong: false,
            },
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render.format, "html");
        assert!(config.render.headers);
        assert!(!config.inline.split_unmatched_strong);
    }

    #[test]
    fn embedded_defaults_match_default_impl() {
        assert_eq!(load_defaults().unwrap(), MdConfig::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("render.format", "text")
            .expect("override to apply")
            .set_override("inline.split_unmatched_strong", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.render.format, "text");
        assert!(config.inline.pairing_options().split_unmatched_strong);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[render]\nheaders = false").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert!(!config.render.headers);
        assert_eq!(config.render.format, "html");
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new().with_file("/nonexistent/mdhtml.toml").build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/mdhtml.toml")
            .build()
            .unwrap();
        assert_eq!(config, MdConfig::default());
    }
}
