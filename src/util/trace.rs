//! Installs a `tracing_subscriber` formatter so the spans emitted
//! around decoding and refresh merges are written to stdout.
//!
//! The filter is read from the environment, for example:
//! ```bash
//! RUST_LOG=routers_directions=debug
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}
