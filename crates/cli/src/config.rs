//! Startup configuration, read once from the environment.

use stockkeep_observability::{LogFormat, TracingConfig};

pub const CURRENCY_VAR: &str = "STOCKKEEP_CURRENCY";
pub const LOG_FILTER_VAR: &str = "STOCKKEEP_LOG";
pub const LOG_FORMAT_VAR: &str = "STOCKKEEP_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Symbol prefixed to monetary totals.
    pub currency_symbol: String,
    pub tracing: TracingConfig,
    /// Problems found while reading the environment. Tracing is not up yet at
    /// that point, so the caller logs these after initialisation.
    pub warnings: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            tracing: TracingConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(symbol) = lookup(CURRENCY_VAR) {
            config.currency_symbol = symbol;
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.tracing.default_filter = filter;
        }
        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.tracing.format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {e}; falling back to text")),
            }
        }

        config
    }
}
