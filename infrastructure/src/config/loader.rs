//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `DEEP_INSIGHT_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./deep-insight.toml` or `./.deep-insight.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/deep-insight/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        for filename in &["deep-insight.toml", ".deep-insight.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Env wins over files: DEEP_INSIGHT_MODEL, DEEP_INSIGHT_SIMULATION__MAX_STEPS, ...
        figment = figment.merge(Env::prefixed("DEEP_INSIGHT_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("deep-insight").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_defaults_has_sane_values() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.simulation.max_steps, 50);
        assert!(config.base_url.starts_with("https://"));
    }

    #[test]
    fn global_config_path_points_into_deep_insight() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("deep-insight"));
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
                model = "meta/llama-4"
                gateway_timeout_secs = 10
                "#,
            )?;
            let config = ConfigLoader::load(Some(&PathBuf::from("custom.toml"))).unwrap();
            assert_eq!(config.model, "meta/llama-4");
            assert_eq!(config.gateway_timeout_secs, 10);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("deep-insight.toml", r#"model = "from-file""#)?;
            jail.set_env("DEEP_INSIGHT_MODEL", "from-env");
            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.model, "from-env");
            Ok(())
        });
    }
}
