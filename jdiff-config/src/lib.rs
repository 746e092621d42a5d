//! Shared configuration loader for the jdiff toolchain.
//!
//! `defaults/jdiff.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`JDiffConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use jdiff_xml::Compatibility;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/jdiff.default.toml");

/// Top-level configuration consumed by jdiff applications.
#[derive(Debug, Clone, Deserialize)]
pub struct JDiffConfig {
    pub compatibility: CompatibilityConfig,
    pub output: OutputConfig,
}

/// Named starting points for the compatibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Default,
    Legacy,
}

impl Preset {
    pub fn compatibility(self) -> Compatibility {
        match self {
            Preset::Default => Compatibility::default(),
            Preset::Legacy => Compatibility::legacy(),
        }
    }
}

/// A preset plus per-toggle overrides; unset toggles keep the preset's value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompatibilityConfig {
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub extends_for_interface_super_class: Option<bool>,
    #[serde(default)]
    pub omit_type_parameters_in_interfaces: Option<bool>,
    #[serde(default)]
    pub xml_show_array_fields_as_null: Option<bool>,
    #[serde(default)]
    pub xml_skip_enum_fields: Option<bool>,
    #[serde(default)]
    pub xml_skip_annotation_methods: Option<bool>,
    #[serde(default)]
    pub xml_omit_synchronized: Option<bool>,
    #[serde(default)]
    pub xml_annotation_as_object: Option<bool>,
    #[serde(default)]
    pub xml_char_as_int: Option<bool>,
    #[serde(default)]
    pub xml_escape_greater_than: Option<bool>,
    #[serde(default)]
    pub default_enum_methods: Option<bool>,
    #[serde(default)]
    pub filter_throws_classes: Option<bool>,
    #[serde(default)]
    pub space_after_comma_in_types: Option<bool>,
    #[serde(default)]
    pub simple_exception_names: Option<bool>,
}

impl CompatibilityConfig {
    fn overrides(&self) -> [(&'static str, Option<bool>); 13] {
        [
            (
                "extends_for_interface_super_class",
                self.extends_for_interface_super_class,
            ),
            (
                "omit_type_parameters_in_interfaces",
                self.omit_type_parameters_in_interfaces,
            ),
            (
                "xml_show_array_fields_as_null",
                self.xml_show_array_fields_as_null,
            ),
            ("xml_skip_enum_fields", self.xml_skip_enum_fields),
            ("xml_skip_annotation_methods", self.xml_skip_annotation_methods),
            ("xml_omit_synchronized", self.xml_omit_synchronized),
            ("xml_annotation_as_object", self.xml_annotation_as_object),
            ("xml_char_as_int", self.xml_char_as_int),
            ("xml_escape_greater_than", self.xml_escape_greater_than),
            ("default_enum_methods", self.default_enum_methods),
            ("filter_throws_classes", self.filter_throws_classes),
            ("space_after_comma_in_types", self.space_after_comma_in_types),
            ("simple_exception_names", self.simple_exception_names),
        ]
    }
}

impl From<&CompatibilityConfig> for Compatibility {
    fn from(config: &CompatibilityConfig) -> Self {
        let mut compat = config.preset.compatibility();
        for (name, value) in config.overrides() {
            if let Some(value) = value {
                compat.set(name, value);
            }
        }
        compat
    }
}

impl From<CompatibilityConfig> for Compatibility {
    fn from(config: CompatibilityConfig) -> Self {
        Compatibility::from(&config)
    }
}

/// What gets written, independent of how it is spelled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub pre_filtered: bool,
    pub include_hidden: bool,
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
    pub fn build(self) -> Result<JDiffConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<JDiffConfig, ConfigError> {
    Loader::new().build()
}
