//! Error types and exit codes for courier
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable edge list, invalid graph, unreachable node)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input or graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while reading, building or surveying a graph
#[derive(Error, Debug)]
pub enum CourierError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Construction errors (exit code 3)
    #[error("invalid node count {count} (expected 0..={max})")]
    InvalidNodeCount { count: i64, max: usize },

    #[error("node {node} is out of range for a graph of {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("the origin cannot declare edges (declared edge to {neighbor})")]
    OriginDeclaration { neighbor: usize },

    #[error("self-loop declared on node {node}")]
    SelfLoop { node: usize },

    #[error("negative weight {weight} on edge {node}-{neighbor}")]
    NegativeWeight {
        node: usize,
        neighbor: usize,
        weight: i64,
    },

    #[error("weight {weight} on edge {node}-{neighbor} exceeds the limit of {max}")]
    WeightTooLarge {
        node: usize,
        neighbor: usize,
        weight: u64,
        max: u64,
    },

    #[error("edge {node}-{neighbor} declared more than once")]
    DuplicateEdge { node: usize, neighbor: usize },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    // Connectivity errors (exit code 3)
    #[error("node {node} is unreachable from the origin")]
    Unreachable { node: usize },

    // Generic failures (exit code 1)
    #[error("engine disagrees with reference on node {node}: engine {engine}, reference {reference}")]
    VerificationFailed {
        node: usize,
        engine: String,
        reference: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl CourierError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CourierError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a parse error at a 1-based input line
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        CourierError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// True for failures raised while building a graph from declarations
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            CourierError::InvalidNodeCount { .. }
                | CourierError::NodeOutOfRange { .. }
                | CourierError::OriginDeclaration { .. }
                | CourierError::SelfLoop { .. }
                | CourierError::NegativeWeight { .. }
                | CourierError::WeightTooLarge { .. }
                | CourierError::DuplicateEdge { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CourierError::UsageError(_) | CourierError::InvalidValue { .. } => ExitCode::Usage,

            CourierError::InvalidNodeCount { .. }
            | CourierError::NodeOutOfRange { .. }
            | CourierError::OriginDeclaration { .. }
            | CourierError::SelfLoop { .. }
            | CourierError::NegativeWeight { .. }
            | CourierError::WeightTooLarge { .. }
            | CourierError::DuplicateEdge { .. }
            | CourierError::Parse { .. }
            | CourierError::Unreachable { .. } => ExitCode::Data,

            CourierError::VerificationFailed { .. }
            | CourierError::Io(_)
            | CourierError::Toml(_)
            | CourierError::Json(_)
            | CourierError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            CourierError::UsageError(_) => "usage_error",
            CourierError::InvalidValue { .. } => "invalid_value",
            CourierError::InvalidNodeCount { .. } => "invalid_node_count",
            CourierError::NodeOutOfRange { .. } => "node_out_of_range",
            CourierError::OriginDeclaration { .. } => "origin_declaration",
            CourierError::SelfLoop { .. } => "self_loop",
            CourierError::NegativeWeight { .. } => "negative_weight",
            CourierError::WeightTooLarge { .. } => "weight_too_large",
            CourierError::DuplicateEdge { .. } => "duplicate_edge",
            CourierError::Parse { .. } => "parse_error",
            CourierError::Unreachable { .. } => "unreachable",
            CourierError::VerificationFailed { .. } => "verification_failed",
            CourierError::Io(_) => "io_error",
            CourierError::Toml(_) => "toml_error",
            CourierError::Json(_) => "json_error",
            CourierError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for courier operations
pub type Result<T> = std::result::Result<T, CourierError>;
