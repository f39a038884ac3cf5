use crate::domain::model::OutputFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: bool, level: Option<&str>) -> String {
    match (level, verbose) {
        (Some(level), _) => format!("primes={}", level),
        (None, true) => "primes=debug,info".to_string(),
        (None, false) => "primes=warn".to_string(),
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `level`, which takes precedence over `verbose`.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    // stdout is reserved for results
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON lines on stderr, for when output is consumed by other tools.
pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .init();
}

/// Picks the log layout matching the result format. `verbose` applies to both.
pub fn init_logger(format: OutputFormat, verbose: bool, level: Option<&str>) {
    match format {
        OutputFormat::Json => init_json_logger(verbose, level),
        OutputFormat::Text => init_cli_logger(verbose, level),
    }
}
