use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("Invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Click event carried no coordinate")]
    MissingCoordinate,

    #[error("Invalid selector configuration: {0}")]
    InvalidConfig(String),

    // Raised when a surface operation is requested before `activate`.
    #[error("Map surface is not initialized")]
    SurfaceUnavailable,

    #[error("Selector is already attached to a map surface")]
    AlreadyActive,
}
