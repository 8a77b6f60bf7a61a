use std::num::NonZeroUsize;
use std::time::Duration;
use clap::Parser;
use crate::application::{parse_duration, Config};

#[derive(Debug, Parser)]
#[command(
    name = "getprof",
    version,
    about = "Send a raw HTTP/1.0 GET over TCP and print the response, or profile repeated requests"
)]
pub struct Cli {
    /// URL to make a request to
    #[arg(long, value_name = "URL")]
    pub url: String,

    /// Run in profiling mode and perform the given number of requests
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub profile: usize,

    /// Per-request timeout such as 5s or 300ms [default: none]
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Print the profiling summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Log resolution, connect and per-sample details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::default().with_timeout(self.timeout).with_json(self.json)
    }

    /// `None` means single-request mode.
    pub fn profile_count(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.profile)
    }
}

const VALUE_FLAGS: &[&str] = &["url", "profile", "timeout"];

/// Rewrites single-dash long flags (`-url x`, `-profile=5`) to their `--` form.
/// Short flags, flag values and everything after a bare `--` pass through.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    let mut passthrough = false;
    let mut expects_value = false;
    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough || expects_value {
            expects_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let arg = match arg.strip_prefix('-') {
            Some(rest) if is_long_name(rest) => format!("-{}", arg),
            _ => arg,
        };
        if let Some(name) = arg.strip_prefix("--") {
            expects_value = !name.contains('=') && VALUE_FLAGS.contains(&name);
        }
        out.push(arg);
    }
    out
}

fn is_long_name(rest: &str) -> bool {
    let name = rest.split('=').next().unwrap_or(rest);
    name.len() > 1 && name.starts_with(|c: char| c.is_ascii_alphabetic())
}
