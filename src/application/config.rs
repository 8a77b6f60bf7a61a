use std::time::Duration;

/// Requests always go to this port from the command line.
const DEFAULT_PORT: u16 = 80;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Applied separately to resolution, connect and the exchange. `None` waits forever.
    pub timeout: Option<Duration>,
    pub json_output: bool,
}

impl Config {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, timeout: None, json_output: false }
    }
}

/// Accepts `300ms`, `5s` or a bare number of seconds.
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let v = value.trim();
    let parsed = if let Some(s) = v.strip_suffix("ms") {
        s.parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(s) = v.strip_suffix('s') {
        s.parse::<u64>().ok().map(Duration::from_secs)
    } else {
        v.parse::<u64>().ok().map(Duration::from_secs)
    };
    match parsed {
        Some(d) if !d.is_zero() => Ok(d),
        Some(_) => Err("timeout must be greater than zero".to_string()),
        None => Err(format!("invalid duration '{}', expected e.g. 5s or 300ms", value)),
    }
}
