//! Diagnostic tracing for the launcher.
//!
//! Reads `BAL_LOG` with `EnvFilter` syntax and defaults to `warn`. Output
//! goes to stderr so that child output and completion scripts on stdout
//! stay untouched.
//!
//! ```bash
//! BAL_LOG=bal=debug,bal_shim=debug bal run main.bal
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "BAL_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
