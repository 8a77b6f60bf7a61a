
use std::num::NonZeroUsize;
use std::sync::Arc;

use getprof::application::{parse_target, Config, ProfileAggregator, RequestExecutor};
use getprof::domain::ErrorClass;
use getprof::infrastructure::{
    write_response, HickoryDnsResolver, Http10Client, TextRenderer, TokioClock, TokioTcpDialer, WriteAnnouncer,
};
use getprof::ports::Renderer;

use support_server::{closed_port, spawn_http_server};

const HELLO: &[u8] = b"HTTP/1.0 200 OK\r\n\r\nhello";
const SERVER_ERROR: &[u8] = b"HTTP/1.0 500 Internal Server Error\r\n\r\n";

type Announcements = Arc<WriteAnnouncer<Vec<u8>>>;
type Executor = RequestExecutor<HickoryDnsResolver, TokioTcpDialer, Http10Client, TokioClock, Announcements>;

fn executor(port: u16) -> (Executor, Announcements) {
    let announcements = Arc::new(WriteAnnouncer::new(Vec::new()));
    let executor = RequestExecutor::new(
        HickoryDnsResolver::new(),
        TokioTcpDialer::new(),
        Http10Client::new(),
        TokioClock::new(),
        Arc::clone(&announcements),
        Config::default().with_port(port),
    );
    (executor, announcements)
}

fn count(n: usize) -> Result<NonZeroUsize, String> {
    NonZeroUsize::new(n).ok_or_else(|| "count must be non-zero".to_owned())
}

#[tokio::test(flavor = "current_thread")]
async fn single_request_returns_bytes_verbatim() -> Result<(), String> {
    let server = spawn_http_server(HELLO).await?;
    let target = parse_target("http://127.0.0.1/hello").map_err(|e| e.to_string())?;

    let (executor, announcements) = executor(server.port);
    let response = executor.execute(&target).await.map_err(|e| e.to_string())?;

    if response.as_bytes() != HELLO {
        return Err(format!("unexpected body: {:?}", String::from_utf8_lossy(response.as_bytes())));
    }
    let log = server.request_log();
    if log != ["GET /hello HTTP/1.0\r\nHost: 127.0.0.1\r\n\r\n"] {
        return Err(format!("unexpected request on the wire: {:?}", log));
    }

    let expected_line = format!("GET 127.0.0.1:{} /hello\n", server.port);
    if announcements.text() != expected_line {
        return Err(format!("unexpected announcement: {:?}", announcements.text()));
    }

    let mut printed = Vec::new();
    write_response(&mut printed, &response).map_err(|e| e.to_string())?;
    if printed != b"Response:\nHTTP/1.0 200 OK\r\n\r\nhello\n" {
        return Err(format!("unexpected output: {:?}", String::from_utf8_lossy(&printed)));
    }
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn profiles_five_successful_requests() -> Result<(), String> {
    let server = spawn_http_server(HELLO).await?;
    let target = parse_target("http://127.0.0.1/").map_err(|e| e.to_string())?;
    let (executor, announcements) = executor(server.port);

    let summary = ProfileAggregator::new(&executor)
        .run(&target, count(5)?)
        .await
        .map_err(|e| e.to_string())?;

    assert_eq!(summary.requests, 5);
    assert_eq!(summary.successes, 5);
    assert_eq!(summary.success_ratio(), 100);
    assert!(summary.error_codes.is_empty());
    assert_eq!(summary.smallest, HELLO.len());
    assert_eq!(summary.largest, HELLO.len());
    assert!(summary.fastest <= summary.median && summary.median <= summary.slowest);
    assert!(summary.fastest <= summary.mean && summary.mean <= summary.slowest);
    assert_eq!(server.request_log().len(), 5);
    assert_eq!(announcements.text().lines().count(), 5);

    let report = TextRenderer::new().render(&summary);
    assert!(report.starts_with("Requests sent: 5\n"));
    assert!(report.contains("Successful response ratio: 100%\n"));
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn profiles_server_errors() -> Result<(), String> {
    let server = spawn_http_server(SERVER_ERROR).await?;
    let target = parse_target("http://127.0.0.1/").map_err(|e| e.to_string())?;
    let (executor, _announcements) = executor(server.port);

    let summary = ProfileAggregator::new(&executor)
        .run(&target, count(3)?)
        .await
        .map_err(|e| e.to_string())?;

    let codes: Vec<&str> = summary.error_codes.iter().map(|c| c.as_str()).collect();
    assert_eq!(codes, ["500", "500", "500"]);
    assert_eq!(summary.successes, 0);
    assert_eq!(summary.success_ratio(), 0);
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn truncated_response_is_malformed() -> Result<(), String> {
    let server = spawn_http_server(b"HTTP/1.0").await?;
    let target = parse_target("http://127.0.0.1/").map_err(|e| e.to_string())?;
    let (executor, _announcements) = executor(server.port);

    let result = ProfileAggregator::new(&executor).run(&target, count(2)?).await;

    match result {
        Err(err) if err.class == ErrorClass::MalformedResponse => Ok(()),
        other => Err(format!("expected malformed response, got {:?}", other)),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn refused_connection_fails_the_run() -> Result<(), String> {
    let port = closed_port().await?;
    let target = parse_target("http://127.0.0.1/").map_err(|e| e.to_string())?;
    let (executor, _announcements) = executor(port);

    let result = ProfileAggregator::new(&executor).run(&target, count(3)?).await;

    match result {
        Err(err) if err.class == ErrorClass::Connection => Ok(()),
        other => Err(format!("expected connection error, got {:?}", other)),
    }
}
