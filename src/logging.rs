use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs a global fmt subscriber at INFO.
///
/// Fails if a global subscriber has already been set.
pub fn init_logging() -> Result<()> {
    init_logging_with_level(Level::INFO)
}

/// Installs a global fmt subscriber that records events up to `level`.
pub fn init_logging_with_level(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
