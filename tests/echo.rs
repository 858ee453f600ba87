//! Echo behaviour over real connections.

use reqwest::Method;

mod common;

#[tokio::test]
async fn test_documented_examples() {
    let server = common::start_fixture(0).await;
    let addr = server.local_addr();
    let client = common::client();

    assert_eq!(
        common::request(&client, Method::GET, addr, "/anything?status=404&text=not%20found").await,
        (404, "not found".to_string())
    );
    assert_eq!(
        common::request(&client, Method::DELETE, addr, "/x?text=bye").await,
        (200, "bye".to_string())
    );
    assert_eq!(
        common::request(&client, Method::GET, addr, "/").await,
        (200, "Please provide a \"text\" query param".to_string())
    );

    common::shut_down(&client, server).await;
}

#[tokio::test]
async fn test_all_echo_methods() {
    let server = common::start_fixture(0).await;
    let addr = server.local_addr();
    let client = common::client();

    for (method, status) in [
        (Method::GET, "200"),
        (Method::POST, "201"),
        (Method::PUT, "202"),
        (Method::PATCH, "418"),
        (Method::DELETE, "500"),
    ] {
        let query = format!("/?status={}&text=I%20am%20{}", status, method);
        let (got_status, body) = common::request(&client, method.clone(), addr, &query).await;
        assert_eq!(got_status.to_string(), status);
        assert_eq!(body, format!("I am {}", method));
    }

    common::shut_down(&client, server).await;
}

#[tokio::test]
async fn test_echo_edge_cases() {
    let server = common::start_fixture(0).await;
    let addr = server.local_addr();
    let client = common::client();

    // Repeated parameters resolve to the first occurrence.
    assert_eq!(
        common::request(&client, Method::GET, addr, "/?status=200&status=404&text=first&text=second").await,
        (200, "first".to_string())
    );

    // Empty text is an empty body, not the prompt.
    assert_eq!(
        common::request(&client, Method::GET, addr, "/?status=204&text=").await.0,
        204
    );
    assert_eq!(
        common::request(&client, Method::GET, addr, "/?text=").await,
        (200, String::new())
    );

    // Quotes, reserved characters and non-ASCII text pass through untouched.
    assert_eq!(
        common::request(&client, Method::POST, addr, "/a/b?text=%22I+am+POST%22%20%26%3D%C3%A9").await,
        (200, "\"I am POST\" &=\u{e9}".to_string())
    );

    common::shut_down(&client, server).await;
}

#[tokio::test]
async fn test_malformed_status_does_not_stop_server() {
    let server = common::start_fixture(0).await;
    let addr = server.local_addr();
    let client = common::client();

    let (status, _) = common::request(&client, Method::GET, addr, "/?status=abc&text=x").await;
    assert_eq!(status, 400);

    assert_eq!(
        common::request(&client, Method::GET, addr, "/?text=still%20serving").await,
        (200, "still serving".to_string())
    );

    common::shut_down(&client, server).await;
}

#[tokio::test]
async fn test_unsupported_method_is_not_implemented() {
    let server = common::start_fixture(0).await;
    let addr = server.local_addr();
    let client = common::client();

    let (status, body) = common::request(&client, Method::OPTIONS, addr, "/?text=x").await;
    assert_eq!(status, 501);
    assert_eq!(body, "Unsupported method ('OPTIONS')");

    common::shut_down(&client, server).await;
}
