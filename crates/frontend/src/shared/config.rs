use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub logging: LoggingConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormConfig {
    pub title: String,
    pub success_message: String,
}

/// Default configuration embedded in the wasm module
const DEFAULT_CONFIG: &str = r#"
[logging]
level = "debug"

[form]
title = "Product Configurator"
success_message = "Order placed successfully!"
"#;

/// Parse a TOML configuration document
pub fn parse_config(contents: &str) -> Result<Config, String> {
    toml::from_str(contents).map_err(|e| format!("Invalid config: {}", e))
}

/// Load the embedded configuration. Runs before the logger exists, so the
/// caller reports a parse failure.
pub fn load_config() -> Result<Config, String> {
    parse_config(DEFAULT_CONFIG)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            form: FormConfig {
                title: "Product Configurator".to_string(),
                success_message: "Order placed successfully!".to_string(),
            },
        }
    }
}

impl LoggingConfig {
    /// Unknown levels fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}
