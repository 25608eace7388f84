//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Application directory name under the platform config/data dirs
const APP_DIR: &str = "misscan-concierge";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["misscan.toml", ".misscan.toml"];

/// Prefix of environment overrides (`MISSCAN_ADVISOR__MODEL`)
const ENV_PREFIX: &str = "MISSCAN_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `MISSCAN_` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./misscan.toml` or `./.misscan.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/misscan-concierge/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Self::base(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
        );

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Defaults merged with the global and project files that exist
    fn base(global: Option<&Path>, project: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/misscan-concierge/config.toml if set,
    /// otherwise falls back to ~/.config/misscan-concierge/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default location of the REPL history file
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt"))
    }

    /// Render the effective configuration as TOML (for --show-config)
    pub fn render(config: &FileConfig) -> String {
        let mut redacted = config.clone();
        if redacted.advisor.api_key.is_some() {
            redacted.advisor.api_key = Some("<redacted>".to_string());
        }
        toml::to_string_pretty(&redacted).unwrap_or_default()
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}* variables", ENV_PREFIX);

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./misscan.toml or ./.misscan.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_domain::Model;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.advisor.model, Model::Gemini25Flash);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("misscan-concierge"));
    }

    #[test]
    fn test_project_file_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("misscan.toml");

        let mut f = std::fs::File::create(&global).unwrap();
        writeln!(f, "[advisor]\nmodel = \"gemini-2.5-pro\"\ntimeout_seconds = 5").unwrap();
        let mut f = std::fs::File::create(&project).unwrap();
        writeln!(f, "[advisor]\nmodel = \"gemini-2.0-flash\"").unwrap();

        let config: FileConfig = ConfigLoader::base(Some(&global), Some(&project))
            .extract()
            .unwrap();
        assert_eq!(config.advisor.model, Model::Gemini20Flash);
        assert_eq!(config.advisor.timeout_seconds, 5);
        assert_eq!(config.advisor.api_key_env, "API_KEY");
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let config: FileConfig = ConfigLoader::base(Some(&missing), None).extract().unwrap();
        assert_eq!(config.advisor.timeout_seconds, 30);
    }

    #[test]
    fn test_render_redacts_api_key() {
        let mut config = FileConfig::default();
        config.advisor.api_key = Some("secret".to_string());
        let rendered = ConfigLoader::render(&config);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("gemini-2.5-flash"));
    }
}
