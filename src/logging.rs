use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// filter, which is `warn` or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "sthelper=debug" } else { "sthelper=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        assert!(EnvFilter::try_new("sthelper=warn").is_ok());
        assert!(EnvFilter::try_new("sthelper=debug").is_ok());
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(false);
        init_logging(true);
    }
}
