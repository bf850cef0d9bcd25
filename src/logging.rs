use tracing_subscriber::EnvFilter;

use crate::error::{ErrorKind, Result};

/// Log filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Logs go to stderr so that stdout only
/// carries projects.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        exn::bail!(ErrorKind::Logging(err.to_string()));
    }
    Ok(())
}
