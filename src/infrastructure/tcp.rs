use std::net::{IpAddr, SocketAddr};
use std::time::Instant;
use tokio::net::TcpStream;
use crate::domain::GetprofError;
use crate::ports::{TcpDialer, TcpConnection, BoxedIoStream};

pub struct TokioTcpDialer;

impl TokioTcpDialer {
    pub fn new() -> Self { Self }
}

impl Default for TokioTcpDialer {
    fn default() -> Self { Self::new() }
}

impl TcpDialer for TokioTcpDialer {
    async fn connect(&self, ip: IpAddr, port: u16) -> Result<TcpConnection, GetprofError> {
        let start = Instant::now();
        let addr = SocketAddr::new(ip, port);
        let stream = TcpStream::connect(addr).await.map_err(|e| {
            let msg = match e.kind() {
                std::io::ErrorKind::ConnectionRefused => format!("connection refused: {}", addr),
                std::io::ErrorKind::TimedOut => format!("connection timed out: {}", addr),
                _ => format!("TCP connect failed to {}: {}", addr, e),
            };
            GetprofError::connection(msg)
        })?;
        Ok(TcpConnection {
            stream: BoxedIoStream::new(stream),
            connect_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}
