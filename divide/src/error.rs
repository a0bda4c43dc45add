use thiserror::Error;

#[derive(Error, Debug)]
pub enum DivideError {
    #[error("Two integer arguments required")]
    Usage,

    #[error("Invalid integer argument '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Division by zero: {0} / 0")]
    DivisionByZero(i32),

    #[error("Integer overflow: {0} / {1} is out of range")]
    Overflow(i32, i32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DivideError {
    /// Process exit status for this error. A usage error reports 255, the
    /// status a `-1` return from `main` surfaces as.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage => 255,
            Self::Parse { .. } => 2,
            Self::DivisionByZero(_) => 3,
            Self::Overflow(..) => 4,
            Self::Config(_) | Self::Io(_) | Self::Serialization(_) => 10,
        }
    }

    /// Stable machine-readable tag, used in JSON error output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Usage => "usage",
            Self::Parse { .. } => "parse",
            Self::DivisionByZero(_) | Self::Overflow(..) => "arithmetic",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}

pub type Result<T> = std::result::Result<T, DivideError>;
