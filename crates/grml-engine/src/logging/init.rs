use std::sync::Once;

use env_logger::WriteStyle;

/// Filter applied when neither the caller nor `RUST_LOG` names one. Import
/// diagnostics are logged at `warn`.
pub const DEFAULT_FILTER: &str = "warn";

/// Logger settings for the script tools.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter, e.g. "debug" or "grml_script=trace".
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
    /// Prefix records with a timestamp. Off by default; import logs are
    /// usually read next to the script's line numbers.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: WriteStyle::Auto, timestamps: false }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_timestamps(mut self, on: bool) -> Self {
        self.timestamps = on;
        self
    }

    /// Effective filter: explicit setting, then `rust_log`, then
    /// [`DEFAULT_FILTER`].
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        self.env_filter
            .as_deref()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_owned()
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on first call; later calls do nothing.
///
/// Returns whether this call installed it. A logger set up elsewhere (a test
/// harness, an embedding application) is left in place.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter).write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("logger installed with filter {filter:?}");
        }
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig::default().with_filter("grml_script=trace");
        assert_eq!(config.resolve_filter(Some("info")), "grml_script=trace");
    }

    #[test]
    fn falls_back_to_env_then_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.resolve_filter(Some("debug")), "debug");
        assert_eq!(config.resolve_filter(None), DEFAULT_FILTER);
        assert_eq!(config.resolve_filter(Some("  ")), DEFAULT_FILTER);
    }

    #[test]
    fn second_init_is_a_no_op() {
        init_logging(LoggingConfig::default().with_filter("debug"));
        assert!(!init_logging(LoggingConfig::default()));
    }
}
