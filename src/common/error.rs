use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // unknown error
    UnknownError = 1000,
    // bad path, channel or channel selector
    InvalidArgument = 1001,
    // write attempted before the ready handshake
    PortNotReady = 1002,
    // serial device cannot be opened
    PortOpenError = 1003,
    // handshake not seen in time
    ReadyTimeout = 1004,
    // physical write failed or the worker is gone
    TransportError = 1005,
    // config file unreadable or malformed
    ConfigError = 1006,
}

/// driver error, every failure of this crate is reported with this type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverError {
    pub code: ErrorCode,
    pub msg: String,
}

impl DriverError {
    pub fn new(code: ErrorCode, msg: impl Into<String>) -> Self {
        DriverError { code, msg: msg.into() }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, msg)
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransportError, msg)
    }

    pub fn not_ready() -> Self {
        Self::new(ErrorCode::PortNotReady, "Port not ready yet!")
    }
}

impl Display for DriverError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "driver error code: {}, msg: {}", self.code as u16, self.msg)
    }
}

impl Error for DriverError {}

impl From<std::io::Error> for DriverError {
    fn from(e: std::io::Error) -> Self {
        DriverError::transport(e.to_string())
    }
}

impl From<tokio_serial::Error> for DriverError {
    fn from(e: tokio_serial::Error) -> Self {
        DriverError::new(ErrorCode::PortOpenError, e.to_string())
    }
}

impl From<toml::de::Error> for DriverError {
    fn from(e: toml::de::Error) -> Self {
        DriverError::new(ErrorCode::ConfigError, format!("config file format invalid: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_message() {
        let err = DriverError::not_ready();
        assert_eq!(err.code, ErrorCode::PortNotReady);
        assert_eq!(err.msg, "Port not ready yet!");
        assert_eq!(err.to_string(), "driver error code: 1002, msg: Port not ready yet!");
    }

    #[test]
    fn test_io_error_is_transport() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DriverError = io.into();
        assert_eq!(err.code, ErrorCode::TransportError);
        assert!(err.msg.contains("pipe closed"));
    }
}
