use tracing::{Subscriber, metadata::LevelFilter};
use tracing_subscriber::{EnvFilter, filter::ParseError, layer::SubscriberExt};

#[cfg(feature = "file-log")]
pub mod file;

/// Keeps the background log writers alive. Dropping it flushes whatever
/// is still buffered, so hold it until the program exits.
#[must_use]
#[derive(Default)]
pub struct LogGuard {
    #[cfg(feature = "file-log")]
    _file: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Build the subscriber for a `RUST_LOG` style filter string. Falls back
/// to `info` if the string does not parse; the parse error is returned so
/// the caller can report it once logging is up.
pub fn parse_log_level(
    level_regex: &str,
) -> (
    impl Subscriber + Send + Sync + use<>,
    LogGuard,
    Option<ParseError>,
) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("info")
        });
    let (subscriber, guard) = get_subscribers(filter);
    (subscriber, guard, parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> (impl Subscriber + Send + Sync, LogGuard) {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "file-log")]
    let (subscriber, guard) = {
        let (subscriber, file) = file::add_layer(subscriber);
        (subscriber, LogGuard { _file: file })
    };
    #[cfg(not(feature = "file-log"))]
    let guard = LogGuard::default();

    (subscriber, guard)
}

/// Install the global subscriber for `level_regex`.
pub fn setup_logging(level_regex: &str) -> LogGuard {
    let (subscriber, guard, parse_err) = parse_log_level(level_regex);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("A global logger is already set up");
        return guard;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level '{}', using 'info': {}", level_regex, err);
    }
    guard
}
