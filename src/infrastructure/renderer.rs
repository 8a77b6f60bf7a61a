use std::io::Write;
use std::time::Duration;
use serde::Serialize;
use crate::domain::{GetprofError, ProfileSummary, RawResponse, StatusCode};
use crate::ports::Renderer;

pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self { Self }
}

impl Default for TextRenderer {
    fn default() -> Self { Self::new() }
}

impl Renderer for TextRenderer {
    fn render(&self, summary: &ProfileSummary) -> String {
        let codes: Vec<&str> = summary.error_codes.iter().map(|c| c.as_str()).collect();

        let mut out = String::new();
        out.push_str(&format!("Requests sent: {}\n", summary.requests));
        out.push_str(&format!("Fastest response time: {:?}\n", summary.fastest));
        out.push_str(&format!("Slowest response time: {:?}\n", summary.slowest));
        out.push_str(&format!("Mean response time: {:?}\n", summary.mean));
        out.push_str(&format!("Median response time: {:?}\n", summary.median));
        out.push_str(&format!("Successful response ratio: {}%\n", summary.success_ratio()));
        out.push_str(&format!("Error codes encountered: [{}]\n", codes.join(" ")));
        out.push_str(&format!("Smallest response: {} bytes\n", summary.smallest));
        out.push_str(&format!("Largest response: {} bytes\n", summary.largest));
        out
    }
}

pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self { Self }
}

impl Default for JsonRenderer {
    fn default() -> Self { Self::new() }
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    requests: usize,
    fastest_ms: f64,
    slowest_ms: f64,
    mean_ms: f64,
    median_ms: f64,
    success_ratio: usize,
    successes: usize,
    error_codes: &'a [StatusCode],
    smallest_bytes: usize,
    largest_bytes: usize,
}

impl Renderer for JsonRenderer {
    fn render(&self, summary: &ProfileSummary) -> String {
        let view = SummaryJson {
            requests: summary.requests,
            fastest_ms: millis(summary.fastest),
            slowest_ms: millis(summary.slowest),
            mean_ms: millis(summary.mean),
            median_ms: millis(summary.median),
            success_ratio: summary.success_ratio(),
            successes: summary.successes,
            error_codes: &summary.error_codes,
            smallest_bytes: summary.smallest,
            largest_bytes: summary.largest,
        };
        match serde_json::to_string_pretty(&view) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(e) => error_document(&e.to_string()),
        }
    }
}

fn error_document(message: &str) -> String {
    format!("{}\n", serde_json::json!({ "error": message }))
}

fn millis(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Single-request output: a `Response:` line, the raw bytes untouched, a newline.
pub fn write_response<W: Write>(out: &mut W, response: &RawResponse) -> Result<(), GetprofError> {
    out.write_all(b"Response:\n")
        .and_then(|_| out.write_all(response.as_bytes()))
        .and_then(|_| out.write_all(b"\n"))
        .and_then(|_| out.flush())
        .map_err(|e| GetprofError::other(format!("failed to write response: {}", e)))
}
