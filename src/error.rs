//! error type shared by the term/polynomial parsers and the task runner
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolyError {
    /// text that does not follow `[sign]coefficient['x'['^'exponent]]`
    #[error("cannot parse term '{input}': {reason}")]
    TermParse { input: String, reason: String },
    /// text that is not a concatenation of terms
    #[error("cannot parse polynomial '{input}': {reason}")]
    PolynomialParse { input: String, reason: String },
    #[error("task document: {0}")]
    Task(String),
    #[error("unknown log level '{0}', expected one of off, error, warn, info, debug, trace")]
    LogLevel(String),
    #[error("cannot read task file")]
    Io(#[from] std::io::Error),
}

