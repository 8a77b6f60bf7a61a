use std::fmt;
use super::GetprofError;

const STATUS_PREFIX: &[u8] = b"HTTP/";
const STATUS_START: usize = 9;
const STATUS_END: usize = 12;

/// Three ASCII digits taken from the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode([u8; 3]);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(*b"200");

    pub fn as_str(&self) -> &str {
        // Constructed only from ASCII digits.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for StatusCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Full response bytes exactly as read from the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse(Vec<u8>);

impl RawResponse {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads the code out of a `HTTP/1.x NNN` preamble.
    pub fn status_code(&self) -> Result<StatusCode, GetprofError> {
        let bytes = self.as_bytes();
        if bytes.len() < STATUS_END {
            return Err(GetprofError::malformed(format!(
                "response too short for a status line ({} bytes)",
                bytes.len()
            )));
        }
        if !bytes.starts_with(STATUS_PREFIX) {
            return Err(GetprofError::malformed(format!(
                "response does not start with HTTP/: {:?}",
                String::from_utf8_lossy(&bytes[..STATUS_END])
            )));
        }

        let mut code = [0u8; 3];
        code.copy_from_slice(&bytes[STATUS_START..STATUS_END]);
        if !code.iter().all(u8::is_ascii_digit) {
            return Err(GetprofError::malformed(format!(
                "invalid status code: {:?}",
                String::from_utf8_lossy(&code)
            )));
        }
        Ok(StatusCode(code))
    }
}

impl From<Vec<u8>> for RawResponse {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
