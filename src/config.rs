use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Known location names (the operator-supplied location catalog)
    #[serde(default)]
    pub locations: Vec<String>,
    /// Capacity of the notification broadcast channel
    #[serde(default = "default_notify_capacity")]
    pub notify_capacity: usize,
    /// Buffer size of the audit log channel
    #[serde(default = "default_audit_buffer")]
    pub audit_buffer: usize,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_notify_capacity() -> usize {
    1000
}

fn default_audit_buffer() -> usize {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locations: Vec::new(),
            notify_capacity: default_notify_capacity(),
            audit_buffer: default_audit_buffer(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Exact-match lookup against the location catalog.
    ///
    /// The catalog is advisory; access decisions compare raw strings and do
    /// not normalize case or whitespace.
    pub fn is_known_location(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l == location)
    }
}
