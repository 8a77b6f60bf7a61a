use crate::domain::{GetprofError, RawResponse};
use super::io::BoxedIoStream;

pub trait HttpClient: Send + Sync {
    /// Sends a bare GET for `path` and returns everything the peer sends until it closes.
    fn get(&self, stream: BoxedIoStream, host: &str, path: &str)
        -> impl std::future::Future<Output = Result<RawResponse, GetprofError>> + Send;
}
