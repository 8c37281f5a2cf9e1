//! Crate error type
//!
//! The simulation itself is total (invalid transitions are ignored, inputs are
//! clamped), so errors only come from the edges: configuration and the
//! browser/native host.

use std::fmt;

/// Errors raised at the crate boundary
#[derive(Debug)]
pub enum Error {
    /// Configuration JSON could not be parsed
    Config(serde_json::Error),
    /// A configuration value is out of range
    InvalidConfig(String),
    /// Configuration file could not be read (native runner)
    Io(std::io::Error),
    /// Browser glue failure (missing element, JS exception)
    Platform(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "failed to parse config: {}", e),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            Error::Io(e) => write!(f, "failed to read config: {}", e),
            Error::Platform(msg) => write!(f, "platform error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::InvalidConfig(_) | Error::Platform(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Platform(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = Error::InvalidConfig("paddle_width must be positive".into());
        assert_eq!(e.to_string(), "invalid config: paddle_width must be positive");

        let e = Error::Platform("no canvas".into());
        assert_eq!(e.to_string(), "platform error: no canvas");
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let e: Error = parse_err.into();
        assert!(matches!(e, Error::Config(_)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
