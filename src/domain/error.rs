use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Input,
    Resolution,
    Connection,
    Transfer,
    MalformedResponse,
    Timeout,
    Other,
}

impl ErrorClass {
    pub fn tag(&self) -> &'static str {
        match self {
            ErrorClass::Input => "INPUT",
            ErrorClass::Resolution => "DNS",
            ErrorClass::Connection => "TCP",
            ErrorClass::Transfer => "TRANSFER",
            ErrorClass::MalformedResponse => "RESPONSE",
            ErrorClass::Timeout => "TIMEOUT",
            ErrorClass::Other => "ERROR",
        }
    }
}

/// Every failure is fatal to the run; the binary maps any of these to exit code 1.
#[derive(Debug, Error)]
#[error("error[{}]: {}", .class.tag(), .message)]
pub struct GetprofError {
    pub class: ErrorClass,
    pub message: String,
}

impl GetprofError {
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self { class, message: message.into() }
    }

    pub fn input(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Input, msg) }
    pub fn resolution(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Resolution, msg) }
    pub fn connection(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Connection, msg) }
    pub fn transfer(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Transfer, msg) }
    pub fn malformed(msg: impl Into<String>) -> Self { Self::new(ErrorClass::MalformedResponse, msg) }
    pub fn timeout(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Timeout, msg) }
    pub fn other(msg: impl Into<String>) -> Self { Self::new(ErrorClass::Other, msg) }
}
