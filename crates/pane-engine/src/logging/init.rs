use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "pane_engine=debug,pane_android=trace"). When absent, `RUST_LOG` is
/// consulted, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Prefix every record with the emitting thread's name.
    pub thread_names: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            thread_names: true,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. If the embedding application already
/// installed a logger, that logger is kept and a warning is sent through it.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);

        if config.thread_names {
            builder.format(|buf, record| {
                use std::io::Write;

                let thread = std::thread::current();
                writeln!(
                    buf,
                    "[{} {} {}] {}",
                    record.level(),
                    thread.name().unwrap_or("<unnamed>"),
                    record.target(),
                    record.args()
                )
            });
        }

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized"),
            Err(e) => log::warn!("logger already installed, keeping it: {e}"),
        }
    });
}
