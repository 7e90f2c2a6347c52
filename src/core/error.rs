//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Message produced by `Logger::errorf`, carrying the formatted text
    #[error("{0}")]
    Message(String),

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unparseable level name or ordinal
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Write or flush attempted after the sink was closed
    #[error("Sink '{sink}' is closed")]
    SinkClosed { sink: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a message error
    pub fn message<S: Into<String>>(msg: S) -> Self {
        LoggerError::Message(msg.into())
    }

    pub fn invalid_level<S: Into<String>>(input: S) -> Self {
        LoggerError::InvalidLevel(input.into())
    }

    pub fn sink_closed<S: Into<String>>(sink: S) -> Self {
        LoggerError::SinkClosed { sink: sink.into() }
    }
}
