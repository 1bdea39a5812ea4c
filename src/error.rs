//! Error types for sparkfield.
//!
//! The particle field itself never fails: a surface that cannot be acquired
//! simply disables the effect. These types describe why that happened, plus
//! the errors of the configuration layer and the windowed host.

use thiserror::Error;

/// Errors that can occur while acquiring a drawing surface.
///
/// Returned from surface constructors and handed to
/// [`ParticleField::attach`](crate::ParticleField::attach), which logs it
/// and degrades to a no-op.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The environment cannot provide a drawing surface at all.
    #[error("Drawing surface unsupported: {0}")]
    Unsupported(String),
    /// The window has no drawable area yet.
    #[error("Drawing surface has zero size")]
    ZeroSize,
    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    Creation(#[from] wgpu::CreateSurfaceError),
    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

/// Errors that can occur when loading or validating a [`FieldConfig`](crate::FieldConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for a field config.
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    /// A parameter is outside its allowed range.
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
    /// A palette colour is not a `#rrggbb` string.
    #[error("Invalid palette colour `{0}`, expected #rrggbb")]
    InvalidColor(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur when running the windowed host.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to create or run the event loop.
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// The configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// The logger could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Logger(#[from] log::SetLoggerError),
    /// The log file could not be created.
    #[error("Failed to create log file: {0}")]
    LogFile(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_names_field() {
        let err = ConfigError::invalid("damping", "must be below 1.0");
        assert_eq!(
            err.to_string(),
            "Invalid config value for `damping`: must be below 1.0"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
