use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for fw-version.
///
/// Covers header output and tag selection; the define names, include guard,
/// and dirty marker are fixed and not configurable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tags: TagsConfig,
}

/// Returns the default header output path.
fn default_header_path() -> String {
    "version.h".to_string()
}

/// Configuration for generated output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_header_path")]
    pub header_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            header_path: default_header_path(),
        }
    }
}

/// Configuration for tag selection.
///
/// `match_pattern` restricts which tags describe considers (e.g., "v*"),
/// for repositories that mix version tags with other markers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TagsConfig {
    #[serde(default)]
    pub match_pattern: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
            tags: TagsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `fwversion.toml` in current directory
/// 3. `~/.config/.fwversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./fwversion.toml").exists() {
        fs::read_to_string("./fwversion.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".fwversion.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.header_path, "version.h");
        assert_eq!(config.tags.match_pattern, None);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[output]
header_path = "include/version.h"

[tags]
match_pattern = "v*"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.output.header_path, "include/version.h");
        assert_eq!(config.tags.match_pattern.as_deref(), Some("v*"));
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let toml_content = r#"
[tags]
match_pattern = "fw-*"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.output.header_path, "version.h");
        assert_eq!(config.tags.match_pattern.as_deref(), Some("fw-*"));
    }
}
