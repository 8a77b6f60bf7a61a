use std::collections::VecDeque;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use crate::domain::{GetprofError, RawResponse};
use crate::ports::{BoxedIoStream, Clock, DnsResolver, HttpClient, TcpConnection, TcpDialer};

pub struct StaticResolver {
    pub ips: Vec<IpAddr>,
    pub lookups: Mutex<Vec<String>>,
}

impl StaticResolver {
    pub fn new(ips: Vec<IpAddr>) -> Self {
        Self { ips, lookups: Mutex::new(Vec::new()) }
    }
}

impl DnsResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, GetprofError> {
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push(host.to_string());
        }
        if self.ips.is_empty() {
            return Err(GetprofError::resolution(format!("no DNS records for '{}'", host)));
        }
        Ok(self.ips.clone())
    }
}

pub struct HangingResolver;

impl DnsResolver for HangingResolver {
    async fn resolve(&self, _host: &str) -> Result<Vec<IpAddr>, GetprofError> {
        std::future::pending().await
    }
}

/// Hands out in-memory streams whose far end is already gone.
#[derive(Default)]
pub struct RecordingDialer {
    pub dials: Mutex<Vec<(IpAddr, u16)>>,
}

impl TcpDialer for RecordingDialer {
    async fn connect(&self, ip: IpAddr, port: u16) -> Result<TcpConnection, GetprofError> {
        if let Ok(mut dials) = self.dials.lock() {
            dials.push((ip, port));
        }
        let (client, _server) = tokio::io::duplex(64);
        Ok(TcpConnection { stream: BoxedIoStream::new(client), connect_ms: 0.0 })
    }
}

/// Replies with the queued responses in order, ignoring the stream.
pub struct ScriptedHttp {
    replies: Mutex<VecDeque<Result<Vec<u8>, GetprofError>>>,
    pub requests: Mutex<Vec<(String, String)>>,
}

impl ScriptedHttp {
    pub fn new(replies: Vec<Result<Vec<u8>, GetprofError>>) -> Self {
        Self { replies: Mutex::new(replies.into()), requests: Mutex::new(Vec::new()) }
    }

    pub fn repeating(reply: &[u8], times: usize) -> Self {
        Self::new((0..times).map(|_| Ok(reply.to_vec())).collect())
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

impl HttpClient for ScriptedHttp {
    async fn get(&self, _stream: BoxedIoStream, host: &str, path: &str) -> Result<RawResponse, GetprofError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((host.to_string(), path.to_string()));
        }
        let next = self.replies.lock().ok().and_then(|mut q| q.pop_front());
        match next {
            Some(reply) => reply.map(RawResponse::new),
            None => Err(GetprofError::transfer("no scripted reply left")),
        }
    }
}

/// Each pair of `now()` calls is separated by the next scripted step.
pub struct SteppingClock {
    state: Mutex<(Instant, VecDeque<Duration>, bool)>,
}

impl SteppingClock {
    pub fn new(steps: Vec<Duration>) -> Self {
        Self { state: Mutex::new((Instant::now(), steps.into(), false)) }
    }

    pub fn millis(steps: &[u64]) -> Self {
        Self::new(steps.iter().map(|ms| Duration::from_millis(*ms)).collect())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Instant {
        let Ok(mut guard) = self.state.lock() else {
            return Instant::now();
        };
        let (cursor, steps, closing) = &mut *guard;
        if *closing {
            *cursor += steps.pop_front().unwrap_or_default();
        }
        *closing = !*closing;
        *cursor
    }

    async fn timeout<F, T>(&self, _duration: Duration, future: F) -> Result<T, GetprofError>
    where
        F: std::future::Future<Output = T> + Send,
        T: Send,
    {
        Ok(future.await)
    }
}
