use std::sync::Arc;

/// Receives the `GET <addr> <path>` line emitted before each request is sent.
pub trait Announcer: Send + Sync {
    fn announce(&self, line: &str);
}

impl<A: Announcer + ?Sized> Announcer for Arc<A> {
    fn announce(&self, line: &str) {
        (**self).announce(line)
    }
}
