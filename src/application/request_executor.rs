use std::future::Future;
use tracing::debug;
use crate::domain::*;
use crate::ports::*;
use super::Config;

/// Resolves, connects and performs one raw GET per call.
pub struct RequestExecutor<D, T, H, C, A>
where
    D: DnsResolver,
    T: TcpDialer,
    H: HttpClient,
    C: Clock,
    A: Announcer,
{
    pub(crate) dns: D,
    pub(crate) tcp: T,
    pub(crate) http: H,
    clock: C,
    pub(crate) announcer: A,
    config: Config,
}

impl<D, T, H, C, A> RequestExecutor<D, T, H, C, A>
where
    D: DnsResolver,
    T: TcpDialer,
    H: HttpClient,
    C: Clock,
    A: Announcer,
{
    pub fn new(dns: D, tcp: T, http: H, clock: C, announcer: A, config: Config) -> Self {
        Self { dns, tcp, http, clock, announcer, config }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Only the first resolved address is tried.
    pub async fn execute(&self, target: &Target) -> Result<RawResponse, GetprofError> {
        let ips = self.bounded(self.dns.resolve(target.lookup_name())).await?;
        let ip = ips.first().copied().ok_or_else(|| GetprofError::resolution(format!("no IP addresses for {}", target.host)))?;
        let resolved = ResolvedTarget::new(ip, self.config.port, ips);
        debug!(host = %target.host, ips = %resolved.ips_short(), family = %resolved.family, "resolved");

        self.announcer.announce(&format!("GET {} {}", resolved.as_socket_str(), target.path));

        let conn = self.bounded(self.tcp.connect(resolved.ip, resolved.port)).await?;
        debug!(connect_ms = conn.connect_ms, "connected");

        self.bounded(self.http.get(conn.stream, &target.host, &target.path)).await
    }

    async fn bounded<F, R>(&self, future: F) -> Result<R, GetprofError>
    where
        F: Future<Output = Result<R, GetprofError>> + Send,
        R: Send,
    {
        match self.config.timeout {
            Some(limit) => self.clock.timeout(limit, future).await?,
            None => future.await,
        }
    }
}
