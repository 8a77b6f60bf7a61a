use std::io::Write;
use std::sync::Mutex;
use tracing::debug;
use crate::ports::Announcer;

/// Writes each announcement as its own line, flushed immediately.
pub struct WriteAnnouncer<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriteAnnouncer<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }
}

impl WriteAnnouncer<Vec<u8>> {
    pub fn text(&self) -> String {
        self.out.lock().map(|buf| String::from_utf8_lossy(&buf).into_owned()).unwrap_or_default()
    }
}

impl<W: Write + Send> Announcer for WriteAnnouncer<W> {
    fn announce(&self, line: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // A closed stdout must not abort the request.
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            debug!(error = %e, "announcement not written");
        }
    }
}
