use clap::error::{ContextKind, ContextValue, ErrorKind};
use courier_core::error::CourierError;
use courier_core::graph::{RelaxationMode, UnreachablePolicy};

/// Parse relaxation mode from string
pub fn parse_mode(s: &str) -> std::result::Result<RelaxationMode, String> {
    s.parse::<RelaxationMode>().map_err(|e| e.to_string())
}

/// Parse unreachable policy from string
pub fn parse_policy(s: &str) -> std::result::Result<UnreachablePolicy, String> {
    s.parse::<UnreachablePolicy>().map_err(|e| e.to_string())
}

/// Map a clap failure onto the courier error taxonomy.
///
/// A rejected flag value becomes `InvalidValue` naming the flag; other
/// command-line mistakes are usage errors. Both exit with code 2.
pub fn usage_error(err: &clap::Error) -> CourierError {
    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            match (
                context(err, ContextKind::InvalidArg),
                context(err, ContextKind::InvalidValue),
            ) {
                (Some(arg), Some(value)) => CourierError::invalid_value(&arg, value),
                _ => CourierError::UsageError(headline(err)),
            }
        }
        ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::NoEquals => CourierError::UsageError(headline(err)),
        _ => CourierError::Other(headline(err)),
    }
}

fn context(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind)? {
        ContextValue::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// First line of clap's rendering without its `error: ` prefix
fn headline(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
