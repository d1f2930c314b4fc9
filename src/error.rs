use thiserror::Error;

/// Errors returned by the breakpoint hook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponsiveError {
    /// An argument was outside what the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
