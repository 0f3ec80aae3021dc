use thiserror::Error;

#[derive(Error, Debug)]
pub enum TsugiError {
    /// Domain error raised by the engine during a command. Caught at the
    /// command boundary; never terminates the shell.
    #[error("{0}")]
    Engine(String),

    /// Startup-time error. The only class allowed to escape to the top level.
    #[error("{0}")]
    Fatal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data error: {0}")]
    Data(#[from] serde_json::Error),
}

impl TsugiError {
    /// Machine-readable kind, used as the prefix when rendering errors.
    pub fn kind(&self) -> &'static str {
        match self {
            TsugiError::Engine(_) => "EngineError",
            TsugiError::Fatal(_) => "FatalError",
            TsugiError::Io(_) => "IoError",
            TsugiError::Data(_) => "DataError",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, TsugiError::Fatal(_))
    }
}

pub type Result<T> = std::result::Result<T, TsugiError>;
