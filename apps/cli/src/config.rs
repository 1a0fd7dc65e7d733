use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_DIR_NAME: &str = "cost-insights-demo";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_PORT: u16 = 3846;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CliConfig,
    pub file: PathBuf,
    pub created: bool,
}

pub fn load_or_create(explicit: Option<&Path>) -> Result<ConfigLoad, String> {
    let file = match explicit {
        Some(path) => path.to_path_buf(),
        None => default_config_dir()?.join(CONFIG_FILE_NAME),
    };
    load_or_create_at(&file)
}

pub fn load_or_create_at(file: &Path) -> Result<ConfigLoad, String> {
    if file.exists() {
        let contents = fs::read_to_string(file)
            .map_err(|err| format!("read config {}: {}", file.display(), err))?;
        let config: CliConfig = toml::from_str(&contents)
            .map_err(|err| format!("parse config {}: {}", file.display(), err))?;
        return Ok(ConfigLoad {
            config,
            file: file.to_path_buf(),
            created: false,
        });
    }

    if let Some(dir) = file.parent() {
        fs::create_dir_all(dir)
            .map_err(|err| format!("create config dir {}: {}", dir.display(), err))?;
    }
    let config = CliConfig::default();
    let contents =
        toml::to_string_pretty(&config).map_err(|err| format!("serialize config: {}", err))?;
    fs::write(file, contents).map_err(|err| format!("write config {}: {}", file.display(), err))?;

    Ok(ConfigLoad {
        config,
        file: file.to_path_buf(),
        created: true,
    })
}

fn default_config_dir() -> Result<PathBuf, String> {
    let home = std::env::var("HOME").map_err(|err| format!("resolve HOME: {}", err))?;
    Ok(PathBuf::from(home).join(".config").join(CONFIG_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_default_config_when_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let load = load_or_create_at(&file).expect("load");
        assert!(load.created);
        assert_eq!(load.config, CliConfig::default());
        assert!(file.exists());

        let again = load_or_create_at(&file).expect("reload");
        assert!(!again.created);
        assert_eq!(again.config.port, DEFAULT_PORT);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&file, "seed = 42\n").expect("write");

        let load = load_or_create_at(&file).expect("load");
        assert_eq!(load.config.seed, Some(42));
        assert_eq!(load.config.port, DEFAULT_PORT);
        assert_eq!(load.config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn invalid_config_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&file, "port = \"not a number\"\n").expect("write");

        let err = load_or_create_at(&file).expect_err("invalid");
        assert!(err.contains("parse config"), "{err}");
    }
}
