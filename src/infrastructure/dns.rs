use std::net::IpAddr;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use tracing::debug;
use crate::domain::GetprofError;
use crate::ports::DnsResolver;

pub struct HickoryDnsResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryDnsResolver {
    /// Uses the system resolver configuration, falling back to hickory's defaults
    /// when it cannot be read.
    pub fn new() -> Self {
        let resolver = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
            debug!(error = %e, "system resolver config unavailable, using defaults");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        });
        Self { resolver }
    }
}

impl Default for HickoryDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsResolver for HickoryDnsResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, GetprofError> {
        let response = self.resolver.lookup_ip(host).await
            .map_err(|e| GetprofError::resolution(format!("DNS lookup failed for '{}': {}", host, e)))?;
        let ips: Vec<IpAddr> = response.iter().collect();
        if ips.is_empty() {
            return Err(GetprofError::resolution(format!("no DNS records for '{}'", host)));
        }
        Ok(ips)
    }
}
