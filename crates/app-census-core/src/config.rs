use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::CategoriesConfig;
use crate::error::{AppCensusError, Result};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# app-census configuration file
# Location: ~/.app-census/config.toml

[filter]
# Additional application names to exclude from the report
# Default: []
# Example: exclude = ["Safari Technology Preview"]
exclude = []

# Custom category assignments, checked before the keyword rules
# Example:
#   "My Tool" = "Development"
[category.overrides]
"#;

/// Global configuration
///
/// A missing config file yields the defaults, so a plain run needs no
/// configuration at all.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub category: CategoriesConfig,
}

/// Filter-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    /// Application names to exclude in addition to the builtin list
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| AppCensusError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| AppCensusError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "filter.exclude" => Some(format!("{:?}", self.filter.exclude)),
            "category.overrides" => {
                let mut entries: Vec<String> = self
                    .category
                    .overrides
                    .iter()
                    .map(|(name, cat)| format!("{:?} = {:?}", name, cat))
                    .collect();
                entries.sort();
                Some(format!("{{{}}}", entries.join(", ")))
            }
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "filter.exclude" => {
                self.filter.exclude = parse_string_list(value)?;
                Ok(())
            }
            _ => Err(AppCensusError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries = vec![(
            "filter.exclude".to_string(),
            format!("{:?}", self.filter.exclude),
        )];

        let mut overrides: Vec<(&String, &String)> = self.category.overrides.iter().collect();
        overrides.sort();
        for (name, category) in overrides {
            entries.push((format!("category.overrides.{:?}", name), category.clone()));
        }

        entries
    }
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Result<Vec<String>> {
    let trimmed = value.trim();

    // Try JSON array format first: ["a", "b"]
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        let inner = &trimmed[1..trimmed.len() - 1];
        if inner.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Vec<String> = inner
            .split(',')
            .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
            .filter(|s| !s.is_empty())
            .collect();
        return Ok(items);
    }

    // Comma-separated format: a,b,c or "a","b"
    let items: Vec<String> = trimmed
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_string_list_comma() {
        let result = parse_string_list("GarageBand,iMovie").unwrap();
        assert_eq!(result, vec!["GarageBand", "iMovie"]);
    }

    #[test]
    fn test_parse_string_list_json() {
        let result = parse_string_list(r#"["GarageBand", "iMovie"]"#).unwrap();
        assert_eq!(result, vec!["GarageBand", "iMovie"]);
    }

    #[test]
    fn test_parse_string_list_empty() {
        let result = parse_string_list("[]").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("filter.exclude", "GarageBand,iMovie").unwrap();
        assert_eq!(config.filter.exclude, vec!["GarageBand", "iMovie"]);

        let value = config.get("filter.exclude").unwrap();
        assert!(value.contains("GarageBand"));
    }

    #[test]
    fn test_config_set_unknown_key() {
        let mut config = Config::default();
        let result = config.set("nope.nothing", "value");
        assert!(matches!(
            result,
            Err(AppCensusError::ConfigKeyNotFound { .. })
        ));
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.filter.exclude.is_empty());
        assert!(config.category.overrides.is_empty());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = TempDir::new().unwrap();

        let mut config = Config::default();
        config.filter.exclude.push("Safari Technology Preview".to_string());
        config
            .category
            .overrides
            .insert("My Tool".to_string(), "Development".to_string());
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.filter.exclude, vec!["Safari Technology Preview"]);
        assert_eq!(
            loaded.category.overrides.get("My Tool").map(|s| s.as_str()),
            Some("Development")
        );
    }

    #[test]
    fn test_config_init_template_parses() {
        let dir = TempDir::new().unwrap();
        let path = Config::init(dir.path()).unwrap();
        assert!(path.exists());

        let loaded = Config::load(dir.path()).unwrap();
        assert!(loaded.filter.exclude.is_empty());
    }
}
