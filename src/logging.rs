use tracing_subscriber::fmt;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber
///
/// 0 = warn, 1 = debug (with hyper connection noise suppressed), 2+ = trace.
/// Quiet mode only shows errors and ignores `RUST_LOG`.
pub fn init_logging(verbose_level: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let filter_str = match verbose_level {
            0 => "warn",
            1 => "debug,hyper_util=warn,reqwest::connect=warn",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str))
    };

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    Registry::default().with(filter).with(fmt_layer).init();
}
