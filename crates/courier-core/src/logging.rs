use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{CourierError, Result};

/// Log the time since `start` at trace level, plus optional fields:
/// `trace_time!(start, "relax", sweeps = trace.sweeps)`.
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Filter directive for the CLI verbosity flags.
///
/// An explicit level wins; `--verbose` opens debug events, `--quiet` keeps
/// only errors, and the default shows warnings such as excluded nodes.
pub fn level_for(verbose: bool, quiet: bool, log_level: Option<&str>) -> String {
    match (log_level, verbose, quiet) {
        (Some(level), _, _) => directive_for(level),
        (None, true, _) => directive_for("debug"),
        (None, false, true) => directive_for("error"),
        (None, false, false) => directive_for("warn"),
    }
}

/// Install the global subscriber on stderr.
///
/// `RUST_LOG` wins over `COURIER_LOG`, which wins over `directive`.
pub fn init_tracing(directive: &str, log_json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("COURIER_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()
    };

    installed.map_err(|e| CourierError::Other(format!("failed to initialize logging: {}", e)))
}

/// Scope bare levels to courier targets; full directives pass through
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("courier={}", level)
    }
}
