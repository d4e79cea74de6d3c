use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Payment strategy not set")]
    StrategyNotSet,

    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleType(String),

    #[error("Runner error: {0}")]
    Runner(String),
}

pub type Result<T> = std::result::Result<T, PatternError>;
