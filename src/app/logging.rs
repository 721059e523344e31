use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber for the CLI.
/// - Respects `RUST_LOG` if set, defaults to `warn`
/// - Writes to stderr so diagnostics never mix with command output
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
