use crate::config::TransformerConfig;
use crate::utils::{GlslMinifyError, Logger, Result};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "glsl-minify.config.json";

/// Config loader that supports config files with CLI override
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file if it exists
    /// Searches for glsl-minify.config.json in the project root
    pub fn load_from_file(root: &Path) -> Result<Option<TransformerConfig>> {
        let config_path = root.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            Logger::debug(&format!("No {} found, using defaults", CONFIG_FILE_NAME));
            return Ok(None);
        }

        Logger::debug(&format!("Loading config from {}", config_path.display()));

        let content = std::fs::read_to_string(&config_path)?;

        let config: TransformerConfig = serde_json::from_str(&content).map_err(|e| {
            GlslMinifyError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
        })?;

        Logger::debug("✅ Config file loaded successfully");
        Ok(Some(config))
    }

    /// Merge file config with CLI prefixes (CLI takes precedence when non-empty)
    pub fn merge_with_cli(
        file_config: Option<TransformerConfig>,
        cli_prefixes: &[String],
    ) -> TransformerConfig {
        if !cli_prefixes.is_empty() {
            return TransformerConfig::with_prefixes(cli_prefixes.iter().cloned());
        }

        file_config.unwrap_or_default()
    }

    /// Generate example config file
    pub fn generate_example() -> String {
        serde_json::to_string_pretty(&TransformerConfig::default())
            .unwrap_or_else(|_| "{\n  \"customPrefixes\": [\n    \"glsl\"\n  ]\n}".to_string())
    }
}
