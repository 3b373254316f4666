use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::Framework;

/// Name of the project-level configuration file
pub const CONFIG_FILE: &str = "stepgen.toml";

/// Configuration loaded from stepgen.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub format: FormatConfig,
}

/// What the generated class looks like
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Java package of the generated class (blank omits the declaration)
    #[serde(default = "default_package_name")]
    pub package_name: String,
    /// Name of the generated class
    #[serde(default = "default_class_name")]
    pub class_name: String,
    /// Optional superclass for the generated class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_test_class: Option<String>,
    /// Extra imports, appended after the built-in ones
    #[serde(default)]
    pub imports: Vec<String>,
    /// Target framework tag
    #[serde(default)]
    pub framework: Framework,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_name: default_package_name(),
            class_name: default_class_name(),
            base_test_class: None,
            imports: Vec::new(),
            framework: Framework::default(),
        }
    }
}

fn default_package_name() -> String {
    "com.example.steps".to_string()
}

fn default_class_name() -> String {
    "StepDefinitions".to_string()
}

/// Output formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Spaces per indent level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
        }
    }
}

fn default_indent_size() -> usize {
    4
}

/// Values supplied on the command line that win over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub package_name: Option<String>,
    pub class_name: Option<String>,
    pub base_test_class: Option<String>,
    pub imports: Vec<String>,
    pub framework: Option<Framework>,
    pub indent_size: Option<usize>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from stepgen.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config.
    ///
    /// Imports given on the command line are appended to the configured ones
    /// rather than replacing them.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(p) = overrides.package_name {
            self.generator.package_name = p;
        }
        if let Some(c) = overrides.class_name {
            self.generator.class_name = c;
        }
        if let Some(b) = overrides.base_test_class {
            self.generator.base_test_class = Some(b);
        }
        self.generator.imports.extend(overrides.imports);
        if let Some(f) = overrides.framework {
            self.generator.framework = f;
        }
        if let Some(i) = overrides.indent_size {
            self.format.indent_size = i;
        }
        self
    }

    /// Render the config as TOML for writing to disk
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::SerializeError)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(toml::ser::Error),
}
