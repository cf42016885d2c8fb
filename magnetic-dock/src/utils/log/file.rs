use anyhow::Result;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use xdg::BaseDirectories;

const LOG_PREFIX: &str = "magnetic-dock";
const LOG_FILE_NAME: &str = "magnetic-dock.log";

/// Add a layer writing to the log file in the XDG cache directory. The
/// returned guard flushes the file when dropped; without a writable cache
/// directory there is no layer and no guard.
pub fn add_layer<S>(
    subscriber: S,
) -> (
    impl Subscriber + Send + Sync + for<'span> LookupSpan<'span>,
    Option<WorkerGuard>,
)
where
    S: Subscriber + Send + Sync + for<'span> LookupSpan<'span>,
{
    let (writer, guard) = match get_log_writer() {
        Ok((writer, guard)) => (Some(writer), Some(guard)),
        Err(err) => {
            eprintln!("Couldn't set up the log file: {err:#}");
            (None, None)
        }
    };
    let layer = writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });
    (subscriber.with(layer), guard)
}

/// `$XDG_CACHE_HOME/magnetic-dock`, created if missing.
fn log_dir() -> Result<PathBuf> {
    let dirs = BaseDirectories::with_prefix(LOG_PREFIX)?;
    Ok(dirs.create_cache_directory("")?)
}

fn get_log_writer() -> Result<(NonBlocking, WorkerGuard)> {
    let writer = tracing_appender::rolling::never(log_dir()?, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(writer))
}
