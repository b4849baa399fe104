use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `directives` uses `EnvFilter` syntax,
/// e.g. `info` or `circbuf=trace`.
pub fn init(directives: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(directives)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()?;
    Ok(())
}
