//! Client tests against a local stand-in for the Gemini endpoint.
//!
//! The stand-in is a bare TCP listener speaking just enough HTTP/1.1 to
//! answer one request with a canned status and body.

use checkers_analysis::{AnalysisClient, AnalysisConfig, AnalysisError};
use checkers_core::Player;
use checkers_engine::INITIAL_BOARD;
use serde_json::json;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn config_for(endpoint: String) -> AnalysisConfig {
    AnalysisConfig {
        endpoint,
        api_key: Some("test-key".to_string()),
        timeout_secs: 5,
        ..AnalysisConfig::default()
    }
}

/// Builds a client that ignores any proxy settings of the test environment.
fn local_client(config: AnalysisConfig) -> AnalysisClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    AnalysisClient::with_http_client(config, http)
}

/// Reads one HTTP request (headers plus `Content-Length` body) and returns it.
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serves a single response and hands back the request it received.
async fn serve_once(
    status: &'static str,
    body: String,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });
    (endpoint, handle)
}

#[tokio::test]
async fn successful_analysis() {
    let payload = r#"{"analysis":"Develop toward the centre.","bestMove":"5,2-4,3","confidence":0.7}"#;
    let envelope = json!({
        "candidates": [{ "content": { "parts": [{ "text": payload }] } }]
    })
    .to_string();
    let (endpoint, server) = serve_once("200 OK", envelope).await;

    let client = local_client(config_for(endpoint));
    let analysis = client.try_analyze(&INITIAL_BOARD, Player::Red).await.unwrap();
    assert_eq!(analysis.best_move, "5,2-4,3");
    assert_eq!(analysis.confidence, 0.7);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /v1beta/models/gemini-3-flash-preview:generateContent"));
    assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
    assert!(request.contains("Current Turn: red"));
    assert!(request.contains("\"thinkingBudget\":0"));
}

#[tokio::test]
async fn error_status_yields_none() {
    let (endpoint, server) =
        serve_once("500 Internal Server Error", r#"{"error":"boom"}"#.to_string()).await;
    let client = local_client(config_for(endpoint.clone()));
    assert!(client.analyze(&INITIAL_BOARD, Player::Black).await.is_none());
    server.await.unwrap();

    let (endpoint, _server) =
        serve_once("403 Forbidden", r#"{"error":"denied"}"#.to_string()).await;
    let client = local_client(config_for(endpoint));
    let err = client
        .try_analyze(&INITIAL_BOARD, Player::Black)
        .await
        .unwrap_err();
    match err {
        AnalysisError::Status { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("denied"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_payload_yields_none() {
    let envelope = json!({
        "candidates": [{ "content": { "parts": [{ "text": "not an object" }] } }]
    })
    .to_string();
    let (endpoint, _server) = serve_once("200 OK", envelope).await;
    let client = local_client(config_for(endpoint));
    assert!(client.analyze(&INITIAL_BOARD, Player::Red).await.is_none());
}

#[tokio::test]
async fn missing_key_is_reported() {
    let client = AnalysisClient::new(AnalysisConfig {
        api_key: None,
        api_key_env: "CHECKERS_ANALYSIS_TEST_KEY_NEVER_SET".to_string(),
        ..AnalysisConfig::default()
    });
    let err = client
        .try_analyze(&INITIAL_BOARD, Player::Red)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::MissingApiKey(ref var) if var == "CHECKERS_ANALYSIS_TEST_KEY_NEVER_SET"));
    assert!(client.analyze(&INITIAL_BOARD, Player::Red).await.is_none());
}

#[tokio::test]
async fn disabled_makes_no_request() {
    let client = AnalysisClient::new(AnalysisConfig {
        enabled: false,
        endpoint: "http://127.0.0.1:1".to_string(),
        ..AnalysisConfig::default()
    });
    assert!(matches!(
        client.try_analyze(&INITIAL_BOARD, Player::Red).await,
        Err(AnalysisError::Disabled)
    ));
}

#[tokio::test]
async fn unreachable_service_yields_none() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = local_client(config_for(format!("http://{addr}")));
    assert!(client.analyze(&INITIAL_BOARD, Player::Red).await.is_none());
}

#[tokio::test]
async fn silent_service_times_out() {
    // Accepts connections but never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    let _hold = tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let client = local_client(AnalysisConfig {
        timeout_secs: 1,
        ..config_for(endpoint)
    });
    let err = client
        .try_analyze(&INITIAL_BOARD, Player::Red)
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Timeout(1)));
}

#[tokio::test]
async fn cancellation_stops_the_request() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    let _hold = tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let client = local_client(AnalysisConfig {
        timeout_secs: 30,
        ..config_for(endpoint)
    });
    let started = Instant::now();
    let result = client
        .analyze_until(
            &INITIAL_BOARD,
            Player::Red,
            tokio::time::sleep(Duration::from_millis(100)),
        )
        .await;
    assert!(result.is_none());
    assert!(started.elapsed() < Duration::from_secs(10));
}
