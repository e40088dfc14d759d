use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Lamina configuration (loaded from .lamina.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LaminaConfig {
    #[serde(default)]
    pub inspect: InspectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Normalize reports before running checks
    #[serde(default = "default_normalize")]
    pub normalize: bool,

    /// Checks to disable
    #[serde(default)]
    pub disable: Vec<String>,
}

impl Default for InspectConfig {
    fn default() -> Self {
        InspectConfig {
            normalize: default_normalize(),
            disable: Vec::new(),
        }
    }
}

fn default_normalize() -> bool {
    true
}

impl LaminaConfig {
    /// Try to load .lamina.toml from the given directory or its parents
    pub fn load(start: &Path) -> Option<Self> {
        let config_path = find_config_file(start)?;
        debug!("Found config: {}", config_path.display());

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<LaminaConfig>(&content) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                    None
                }
            },
            Err(e) => {
                debug!("Could not read {}: {}", config_path.display(), e);
                None
            }
        }
    }
}

/// Walk up from the start path to find .lamina.toml
fn find_config_file(start: &Path) -> Option<std::path::PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(".lamina.toml");
        if config.exists() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Create a default .lamina.toml in the current directory
pub fn init_config() -> Result<()> {
    let config_path = std::env::current_dir()?.join(".lamina.toml");

    if config_path.exists() {
        println!("⚠️  .lamina.toml already exists in this directory");
        return Ok(());
    }

    let default_config = r#"# Lamina configuration

[inspect]
# Normalize reports (sort, dedup environments, prune dangling
# entries) before running checks.
normalize = true

# Checks to disable. Run `lamina list-checks` for the full list.
# disable = ["environments"]
"#;

    std::fs::write(&config_path, default_config)?;
    println!("✅ Created .lamina.toml");
    println!("   Edit it to customize inspection settings.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_in_parent_directory_is_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".lamina.toml"), "[inspect]\nnormalize = false\n").unwrap();
        let nested = dir.path().join("reports");
        std::fs::create_dir(&nested).unwrap();

        let config = LaminaConfig::load(&nested).unwrap();
        assert!(!config.inspect.normalize);
    }

    #[test]
    fn broken_config_falls_back_to_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".lamina.toml"), "not toml [").unwrap();
        assert!(LaminaConfig::load(dir.path()).is_none());
    }

    #[test]
    fn defaults_normalize() {
        let config: LaminaConfig = toml::from_str("").unwrap();
        assert!(config.inspect.normalize);
        assert!(config.inspect.disable.is_empty());
    }
}
