use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Parameter error: {0}")]
    ParameterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Export error: {0}")]
    ExportError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
