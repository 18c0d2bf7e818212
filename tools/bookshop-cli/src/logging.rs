//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug for the
/// bookshop crates with `--verbose`. Logs go to stderr so `--json` output on
/// stdout stays machine-readable.
pub fn init(verbose: bool, json: bool) {
    let default = if verbose {
        "warn,bookshop_commerce=debug,bookshop=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
