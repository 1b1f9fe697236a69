use std::sync::Once;

/// Filter applied when neither the config nor `RUST_LOG` provides one.
///
/// wgpu and naga are chatty at `info`; keep them at `warn` unless asked for.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "gridline_engine=debug,wgpu_core=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string actually handed to `env_logger`.
    ///
    /// Precedence: explicit config, then `env` (the value of `RUST_LOG`), then
    /// [`DEFAULT_FILTER`]. Blank values are skipped at each step.
    pub fn resolve_filter(&self, env: Option<String>) -> String {
        let non_blank = |f: &String| !f.trim().is_empty();
        self.env_filter
            .clone()
            .filter(non_blank)
            .or_else(|| env.filter(non_blank))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // `try_init` so a logger installed by a host (tests, embedding) is not fatal.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized (filter: {filter})");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_env() {
        let config = LoggingConfig {
            env_filter: Some("debug".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.resolve_filter(Some("trace".into())), "debug");
    }

    #[test]
    fn env_filter_used_when_config_is_empty() {
        let config = LoggingConfig::default();
        assert_eq!(config.resolve_filter(Some("warn".into())), "warn");
    }

    #[test]
    fn blank_values_fall_back_to_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.resolve_filter(Some("  ".into())), DEFAULT_FILTER);
        assert_eq!(config.resolve_filter(None), DEFAULT_FILTER);
    }

    #[test]
    fn blank_explicit_filter_defers_to_env() {
        let config = LoggingConfig {
            env_filter: Some(String::new()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.resolve_filter(Some("warn".into())), "warn");
        assert_eq!(config.resolve_filter(Some(" ".into())), DEFAULT_FILTER);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
