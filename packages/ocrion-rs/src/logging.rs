use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs a stderr subscriber so stdout stays free for the assembled text.
///
/// Verbose runs log at INFO; otherwise only fallbacks and errors are shown.
pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose { Level::INFO } else { Level::WARN };
    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
    Ok(())
}
