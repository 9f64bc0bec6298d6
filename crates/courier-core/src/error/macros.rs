//! Error macros for courier

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::CourierError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::CourierError::UsageError($msg.to_string()))
    };
}

/// Macro for creating parse errors at a given line
#[macro_export]
macro_rules! bail_parse {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::CourierError::parse($line, format!($($arg)*)))
    };
}
