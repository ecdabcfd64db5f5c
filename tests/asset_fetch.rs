// SPDX-License-Identifier: MPL-2.0
//! Loader behavior against a local HTTP server.

use payo::asset::fetch::{self, FetchError};
use payo::asset::{AssetLoader, AssetResult};
use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Client that ignores proxy settings from the environment.
fn local_client() -> Client {
    Client::builder()
        .no_proxy()
        .build()
        .expect("client builds")
}

/// Serves one response and reports the raw request it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0_u8; 512];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.expect("read");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        let _ = request_tx.send(String::from_utf8_lossy(&request).into_owned());

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: image/svg+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        let _ = socket.shutdown().await;
    });

    (format!("http://{addr}/group.svg"), request_rx)
}

#[tokio::test]
async fn ok_response_loads_exactly_once() {
    let (url, _request) = serve_once("200 OK", "<svg/>").await;
    let (mut loader, ticket) = AssetLoader::new(url.clone());
    assert!(loader.is_pending());

    let outcome = fetch::fetch_text(&local_client(), &url).await;
    assert!(loader.complete(&ticket, outcome));
    assert_eq!(loader.result(), &AssetResult::Loaded("<svg/>".to_string()));

    // A second completion for the same request is ignored.
    assert!(!loader.complete(&ticket, Ok("<svg>other</svg>".to_string())));
    assert_eq!(loader.result(), &AssetResult::Loaded("<svg/>".to_string()));
}

#[tokio::test]
async fn not_found_fails_with_status_code() {
    let (url, _request) = serve_once("404 Not Found", "missing").await;
    let (mut loader, ticket) = AssetLoader::new(url.clone());

    let outcome = fetch::fetch_text(&local_client(), &url).await;
    assert!(loader.complete(&ticket, outcome));
    match loader.result() {
        AssetResult::Failed(reason) => assert!(reason.contains("404"), "reason: {reason}"),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_is_a_failure() {
    let (url, _request) = serve_once("500 Internal Server Error", "").await;
    let outcome = fetch::fetch_text(&local_client(), &url).await;
    assert_eq!(
        outcome,
        Err(FetchError::Status {
            code: 500,
            reason: Some("Internal Server Error".to_string()),
        })
    );
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let outcome = fetch::fetch_text(&local_client(), &format!("http://{addr}/x.svg")).await;
    assert!(matches!(outcome, Err(FetchError::Transport(_))), "{outcome:?}");
}

#[tokio::test]
async fn teardown_before_completion_discards_result() {
    let (url, _request) = serve_once("200 OK", "<svg/>").await;
    let (mut loader, ticket) = AssetLoader::new(url.clone());
    loader.teardown();

    let outcome = fetch::fetch_text(&local_client(), &url).await;
    assert!(!loader.complete(&ticket, outcome));
    assert!(loader.is_pending());
}

#[tokio::test]
async fn url_change_discards_previous_request() {
    let (first_url, _first) = serve_once("200 OK", "<svg id=\"a\"/>").await;
    let (second_url, _second) = serve_once("200 OK", "<svg id=\"b\"/>").await;
    let (mut loader, first_ticket) = AssetLoader::new(first_url.clone());
    let second_ticket = loader.set_url(second_url.clone()).expect("new url");

    let client = local_client();
    let second = fetch::fetch_text(&client, &second_url).await;
    let first = fetch::fetch_text(&client, &first_url).await;

    assert!(loader.complete(&second_ticket, second));
    assert!(!loader.complete(&first_ticket, first));
    assert_eq!(loader.result(), &AssetResult::Loaded("<svg id=\"b\"/>".to_string()));
}

#[tokio::test]
async fn request_bypasses_caches() {
    let (url, request) = serve_once("200 OK", "<svg/>").await;
    let _ = fetch::fetch_text(&local_client(), &url).await;

    let request = request.await.expect("request captured").to_lowercase();
    assert!(request.starts_with("get /group.svg"));
    assert!(request.contains("cache-control: no-store"));
}

#[tokio::test]
async fn bytes_are_returned_unmodified() {
    let (url, _request) = serve_once("200 OK", "OTTO\u{1}\u{2}").await;
    let bytes = fetch::fetch_bytes(&local_client(), &url).await.expect("bytes");
    assert_eq!(bytes, b"OTTO\x01\x02");
}

#[test]
fn shared_client_builds() {
    assert!(fetch::client().is_ok());
}
