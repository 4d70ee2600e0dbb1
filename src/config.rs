use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub types: TypesConfig,
    #[serde(default)]
    pub type_mappings: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            trailing_newline: false,
        }
    }
}

fn default_extension() -> String {
    "ts".to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct TypesConfig {
    /// Added to the builtin C# value types.
    #[serde(default)]
    pub extra_value_types: Vec<String>,
}

impl Config {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.output.extension, "ts");
        assert!(!config.output.trailing_newline);
        assert!(config.types.extra_value_types.is_empty());
        assert!(config.type_mappings.is_empty());
    }

    #[test]
    fn test_parse_config_full() {
        let toml_str = r#"
[output]
extension = "d.ts"
trailing_newline = true

[types]
extra_value_types = ["long", "float"]

[type_mappings]
Guid = "string"
DateTime = "string"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.extension, "d.ts");
        assert!(config.output.trailing_newline);
        assert_eq!(config.types.extra_value_types, vec!["long", "float"]);
        assert_eq!(config.type_mappings.get("Guid"), Some(&"string".to_string()));
        assert_eq!(config.type_mappings.len(), 2);
    }

    #[test]
    fn test_parse_config_partial_output() {
        let toml_str = r#"
[output]
trailing_newline = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.extension, "ts");
        assert!(config.output.trailing_newline);
    }

    #[test]
    fn test_reject_invalid_config() {
        let result: Result<Config, _> = toml::from_str("[output]\ntrailing_newline = \"yes\"");
        assert!(result.is_err());
    }
}
