use planetscale_client::{
    AuthenticatedTransport, CancellationToken, GetCurrentUserResponse, NoAuth, PlanetScaleClient,
    PsError, PsResult, Transport,
};
use reqwest::{Request, Response};
use serde_json::json;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Transport that counts how often it is asked to send
#[derive(Clone)]
struct CountingTransport {
    inner: reqwest::Client,
    calls: Arc<AtomicUsize>,
}

impl CountingTransport {
    fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait::async_trait]
impl Transport for CountingTransport {
    async fn send(&self, request: Request) -> PsResult<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.send(request).await
    }
}

/// Transport that always fails
struct BrokenTransport;

#[async_trait::async_trait]
impl Transport for BrokenTransport {
    async fn send(&self, _request: Request) -> PsResult<Response> {
        Err(PsError::transport("connection reset by peer"))
    }
}

/// Transport that replays a fixed response without any network I/O
struct CannedTransport {
    status: u16,
    body: &'static str,
}

#[async_trait::async_trait]
impl Transport for CannedTransport {
    async fn send(&self, _request: Request) -> PsResult<Response> {
        let canned = http::Response::builder()
            .status(self.status)
            .header("content-type", "application/json")
            .body(self.body)
            .map_err(PsError::transport)?;
        Ok(Response::from(canned))
    }
}

async fn mount_user(server: &MockServer, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/v1/user"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "u1", "email": "ada@acme.test"}))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Test a custom transport is used exactly once per operation
#[tokio::test]
async fn test_custom_transport_called_once() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    mount_user(&server, Duration::ZERO).await;

    let transport = CountingTransport::new();
    let calls = Arc::clone(&transport.calls);
    let client = PlanetScaleClient::with_transport(transport, Some(&format!("{}/v1", server.uri())))
        .expect("Failed to create client");

    let resp = client.users().get_current_user().await.expect("Failed to get user");
    assert!(matches!(resp, GetCurrentUserResponse::Ok(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// Test a cancelled token stops the request before it reaches the transport
#[tokio::test]
async fn test_cancel_before_send() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let transport = CountingTransport::new();
    let calls = Arc::clone(&transport.calls);
    let client = PlanetScaleClient::with_transport(transport, Some(&format!("{}/v1", server.uri())))
        .expect("Failed to create client");

    let token = CancellationToken::new();
    token.cancel();
    let err = client
        .with_cancellation(token)
        .users()
        .get_current_user()
        .await
        .expect_err("Cancelled requests must fail");

    assert!(err.is_cancelled());
    assert!(err.is_transport());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

/// Test cancelling while the server is still answering
#[tokio::test]
async fn test_cancel_in_flight() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    mount_user(&server, Duration::from_secs(5)).await;

    let transport = AuthenticatedTransport::new(NoAuth).expect("Failed to create transport");
    let client = PlanetScaleClient::with_transport(transport, Some(&format!("{}/v1", server.uri())))
        .expect("Failed to create client");

    let token = CancellationToken::new();
    let cancellable = client.with_cancellation(token.clone());
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let started = Instant::now();
    let result = cancellable.users().get_current_user().await;

    assert!(matches!(result, Err(PsError::Cancelled)), "got {:?}", result);
    assert!(started.elapsed() < Duration::from_secs(4));
}

/// Test an uncancelled token does not interfere
#[tokio::test]
async fn test_live_token_passes_through() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    mount_user(&server, Duration::ZERO).await;

    let transport = AuthenticatedTransport::new(NoAuth).expect("Failed to create transport");
    let client = PlanetScaleClient::with_transport(transport, Some(&format!("{}/v1", server.uri())))
        .expect("Failed to create client")
        .with_cancellation(CancellationToken::new());

    let resp = client.users().get_current_user().await.expect("Failed to get user");
    match resp {
        GetCurrentUserResponse::Ok(user) => assert_eq!(user.email, "ada@acme.test"),
        other => panic!("Expected 200 response, got {:?}", other),
    }
}

/// Test transport failures surface without a result
#[tokio::test]
async fn test_transport_failure() {
    let _ = env_logger::try_init();

    let client = PlanetScaleClient::with_transport(BrokenTransport, None)
        .expect("Failed to create client");
    let err = client
        .users()
        .get_current_user()
        .await
        .expect_err("Broken transport must fail");
    assert!(matches!(err, PsError::Transport(_)));
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

/// Test a transport answering with canned responses
#[tokio::test]
async fn test_canned_transport() {
    let _ = env_logger::try_init();

    let transport = CannedTransport {
        status: 404,
        body: r#"{"code":"not_found","message":null}"#,
    };
    let client = PlanetScaleClient::with_transport(transport, None)
        .expect("Failed to create client");
    match client.users().get_current_user().await {
        Ok(GetCurrentUserResponse::NotFound(body)) => {
            assert_eq!(body.code, "not_found");
            assert_eq!(body.message, "");
        }
        other => panic!("Expected 404 response, got {:?}", other),
    }

    let transport = CannedTransport {
        status: 200,
        body: r#"{"id": "u1", "email": "ada@acme.test"}"#,
    };
    let client = PlanetScaleClient::with_transport(transport, None)
        .expect("Failed to create client");
    match client.users().get_current_user().await {
        Ok(GetCurrentUserResponse::Ok(user)) => assert_eq!(user.id, "u1"),
        other => panic!("Expected 200 response, got {:?}", other),
    }
}

/// Test connection errors from the default transport
#[tokio::test]
async fn test_connection_refused() {
    let _ = env_logger::try_init();

    let transport = AuthenticatedTransport::new(NoAuth).expect("Failed to create transport");
    let client = PlanetScaleClient::with_transport(transport, Some("http://127.0.0.1:1/v1"))
        .expect("Failed to create client");
    let err = client
        .users()
        .get_current_user()
        .await
        .expect_err("Nothing listens on port 1");
    assert!(matches!(err, PsError::Http(_)));
    assert!(err.is_transport());
}

/// Test a malformed body is a decode failure
#[tokio::test]
async fn test_malformed_body() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"email": 42"#))
        .mount(&server)
        .await;

    let transport = AuthenticatedTransport::new(NoAuth).expect("Failed to create transport");
    let client = PlanetScaleClient::with_transport(transport, Some(&format!("{}/v1", server.uri())))
        .expect("Failed to create client");
    let err = client
        .users()
        .get_current_user()
        .await
        .expect_err("Malformed JSON must fail");
    assert!(matches!(err, PsError::Decode { status: 200, .. }));
    assert!(!err.is_transport());
}

/// Test base URLs with and without a trailing separator hit the same path
#[tokio::test]
async fn test_base_url_trailing_separator() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    for base in [format!("{}/v1", server.uri()), format!("{}/v1/", server.uri())] {
        let transport = AuthenticatedTransport::new(NoAuth).expect("Failed to create transport");
        let client = PlanetScaleClient::with_transport(transport, Some(&base))
            .expect("Failed to create client");
        let resp = client.users().get_current_user().await.expect("Failed to get user");
        assert_eq!(resp, GetCurrentUserResponse::Ok(Default::default()));
    }

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url, received[1].url);
}

/// Test one handle can serve concurrent tasks
#[tokio::test]
async fn test_concurrent_operations() {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    mount_user(&server, Duration::from_millis(20)).await;

    let transport = CountingTransport::new();
    let calls = Arc::clone(&transport.calls);
    let client = PlanetScaleClient::with_transport(transport, Some(&format!("{}/v1", server.uri())))
        .expect("Failed to create client");

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.users().get_current_user().await })
        })
        .collect();

    for task in tasks {
        let resp = task.await.expect("task panicked").expect("Failed to get user");
        assert!(matches!(resp, GetCurrentUserResponse::Ok(_)));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 8);
}
