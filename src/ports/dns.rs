use std::net::IpAddr;
use crate::domain::GetprofError;

pub trait DnsResolver: Send + Sync {
    /// All addresses for `host`, never empty on success.
    fn resolve(&self, host: &str) -> impl std::future::Future<Output = Result<Vec<IpAddr>, GetprofError>> + Send;
}
