use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;
use crate::domain::{GetprofError, RawResponse};
use crate::ports::{HttpClient, BoxedIoStream};

const READ_CHUNK: usize = 8 * 1024;

/// Speaks bare HTTP/1.0: one request per connection, response framed by the peer closing.
pub struct Http10Client;

impl Http10Client {
    pub fn new() -> Self { Self }
}

impl Default for Http10Client {
    fn default() -> Self { Self::new() }
}

impl HttpClient for Http10Client {
    async fn get(&self, mut stream: BoxedIoStream, host: &str, path: &str) -> Result<RawResponse, GetprofError> {
        let request = request_text(host, path);
        stream.write_all(request.as_bytes()).await.map_err(|e| transfer_error("failed to send request", e))?;

        let mut buffer = Vec::with_capacity(READ_CHUNK);
        stream.read_to_end(&mut buffer).await.map_err(|e| transfer_error("failed to read response", e))?;
        debug!(bytes = buffer.len(), "response complete");

        if let Err(e) = stream.shutdown().await {
            debug!(error = %e, "shutdown after read failed");
        }
        Ok(RawResponse::new(buffer))
    }
}

/// `GET <path> HTTP/1.0` plus a Host header, nothing else.
pub fn request_text(host: &str, path: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    format!("GET {} HTTP/1.0\r\nHost: {}\r\n\r\n", path, host)
}

fn transfer_error(context: &str, e: std::io::Error) -> GetprofError {
    let msg = match e.kind() {
        std::io::ErrorKind::ConnectionReset => format!("{}: connection reset by peer", context),
        std::io::ErrorKind::BrokenPipe => format!("{}: connection closed by peer", context),
        _ => format!("{}: {}", context, e),
    };
    GetprofError::transfer(msg)
}
