//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use response_fixture::{FixtureConfig, RunningServer};

/// Start a fixture on `127.0.0.1:{port}` (0 picks a free port).
pub async fn start_fixture(port: u16) -> RunningServer {
    response_fixture::start(&FixtureConfig::localhost(port))
        .await
        .expect("fixture failed to bind")
}

/// Client that never reuses connections, so each request dials the port.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

pub fn url(addr: SocketAddr, path_and_query: &str) -> String {
    format!("http://{}{}", addr, path_and_query)
}

/// Send `method` to the fixture and return status and body.
pub async fn request(
    client: &reqwest::Client,
    method: reqwest::Method,
    addr: SocketAddr,
    path_and_query: &str,
) -> (u16, String) {
    let res = client
        .request(method, url(addr, path_and_query))
        .body("request bodies are ignored")
        .send()
        .await
        .expect("Fixture unreachable");
    let status = res.status().as_u16();
    (status, res.text().await.unwrap())
}

/// Post the sentinel and wait for the instance to release its port.
#[allow(dead_code)]
pub async fn shut_down(client: &reqwest::Client, server: RunningServer) {
    let addr = server.local_addr();
    let (status, body) = request(client, reqwest::Method::POST, addr, "/shutdown").await;
    assert_eq!(status, 200);
    assert_eq!(body, "");
    tokio::time::timeout(Duration::from_secs(5), server.wait())
        .await
        .expect("fixture did not stop")
        .expect("fixture failed while stopping");
}
