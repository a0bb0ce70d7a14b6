use serde::{Deserialize, Serialize};

/// Upgrade driver configuration file (YAML).
///
/// Example `upgrade.yaml`:
/// ```yaml
/// log-level: debug
/// output-format: json
/// continue-on-error: true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpgradeConfigFile {
    #[serde(default, alias = "log-level")]
    pub log_level: Option<String>,
    #[serde(default, alias = "output-format")]
    pub output_format: Option<OutputFormat>,
    #[serde(default, alias = "continue-on-error")]
    pub continue_on_error: Option<bool>,
}

/// Serialization used when writing converted resources.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format '{}' (expected yaml or json)", other),
        }
    }
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_default() {
        let cfg: UpgradeConfigFile =
            load_config_file("/nonexistent/calico/upgrade.yaml").unwrap();
        assert!(cfg.log_level.is_none());
        assert!(cfg.output_format.is_none());
    }

    #[test]
    fn test_kebab_case_aliases() {
        let cfg: UpgradeConfigFile =
            serde_yaml::from_str("log-level: debug\noutput-format: json\ncontinue-on-error: true\n")
                .unwrap();
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
        assert_eq!(cfg.output_format, Some(OutputFormat::Json));
        assert_eq!(cfg.continue_on_error, Some(true));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("toml".parse::<OutputFormat>().is_err());
    }
}
