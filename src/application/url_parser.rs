use url::Url;
use tracing::warn;
use crate::domain::{GetprofError, Target};

/// Parses an absolute URL into the host and path to request.
///
/// Only the path is kept: query and fragment are dropped, any explicit port is
/// ignored and no scheme triggers TLS.
pub fn parse_target(input: &str) -> Result<Target, GetprofError> {
    let url = Url::parse(input).map_err(|e| GetprofError::input(format!("invalid URL '{}': {}", input, e)))?;

    let host = url.host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| GetprofError::input(format!("missing host in '{}'", input)))?;

    if url.scheme() != "http" {
        warn!(scheme = url.scheme(), "speaking plain HTTP regardless of scheme");
    }
    if let Some(port) = url.port() {
        warn!(port, "explicit port ignored");
    }

    Ok(Target::new(host, url.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorClass;

    #[test]
    fn splits_host_and_path() {
        let target = parse_target("http://example.com/a/b.html").expect("valid");
        assert_eq!(target.host, "example.com");
        assert_eq!(target.path, "/a/b.html");
    }

    #[test]
    fn bare_host_requests_root() {
        let target = parse_target("http://example.com").expect("valid");
        assert_eq!(target.path, "/");
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        let target = parse_target("http://example.com/search?q=rust#top").expect("valid");
        assert_eq!(target.path, "/search");
    }

    #[test]
    fn https_is_accepted_as_plain_target() {
        let target = parse_target("https://example.com:8443/x").expect("valid");
        assert_eq!(target.host, "example.com");
        assert_eq!(target.path, "/x");
    }

    #[test]
    fn ipv6_host_keeps_brackets() {
        let target = parse_target("http://[::1]/").expect("valid");
        assert_eq!(target.host, "[::1]");
        assert_eq!(target.lookup_name(), "::1");
    }

    #[test]
    fn relative_url_is_input_error() {
        let err = parse_target("example.com/path").unwrap_err();
        assert_eq!(err.class, ErrorClass::Input);
    }

    #[test]
    fn hostless_url_is_input_error() {
        let err = parse_target("mailto:someone@example.com").unwrap_err();
        assert_eq!(err.class, ErrorClass::Input);
    }
}
