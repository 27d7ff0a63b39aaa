//! The hyper transport and its tower layers, driven through `Crest`.

use std::time::Duration;

use crest::{
    Auth, Crest, HeaderValue, HyperClient, args,
    middleware::{AuthLayer, ConcurrencyLimitLayer, LoggingLayer},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn api(server: &MockServer, transport: HyperClient) -> Crest {
    Crest::builder(server.uri())
        .transport(transport)
        .build()
        .expect("client")
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports/7"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let transport = HyperClient::builder()
        .timeout(Duration::from_millis(100))
        .build();

    let err = api(&mock_server, transport)
        .call("getReports", args![7])
        .await
        .expect_err("the server answers after the timeout");

    assert!(err.is_timeout(), "Expected timeout, got: {err}");
}

#[tokio::test]
async fn test_user_agent_default_and_override() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("User-Agent", crest::DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("User-Agent", "reports/2.1"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api(&mock_server, HyperClient::new());
    let response = client.call("getPing", args![]).await.expect("response");
    assert_eq!(response.status(), 204);

    let client = client
        .configure("setHeader", args!["user-agent", "reports/2.1"])
        .expect("configured");
    let response = client.call("getPing", args![]).await.expect("response");
    assert_eq!(response.status(), 202);
}

#[tokio::test]
async fn test_response_headers_ignore_case() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/crest"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"v42\"")
                .set_body_json(json!({"name": "crest"})),
        )
        .mount(&mock_server)
        .await;

    let response = api(&mock_server, HyperClient::new())
        .call("getRepos", args!["crest"])
        .await
        .expect("response");

    assert_eq!(response.header("etag"), Some("\"v42\""));
    assert_eq!(response.header("ETAG"), Some("\"v42\""));
    let body: serde_json::Value = response.json().expect("json");
    assert_eq!(body, json!({"name": "crest"}));
}

#[tokio::test]
async fn test_auth_layer_authorizes_unconfigured_clients() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer from-layer"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HyperClient::builder()
        .layer(AuthLayer::new(&Auth::bearer("from-layer")))
        .build();

    let response = api(&mock_server, transport)
        .call("getMe", args![])
        .await
        .expect("response");
    assert!(response.is_success());
}

#[tokio::test]
async fn test_configured_auth_wins_over_auth_layer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let transport = HyperClient::builder()
        .layer(AuthLayer::new(&Auth::bearer("from-layer")))
        .build();

    api(&mock_server, transport)
        .configure("setHeader", args!["authorization", "Bearer from-call"])
        .expect("configured")
        .call("getMe", args![])
        .await
        .expect("response");

    let received = mock_server.received_requests().await.expect("recording");
    let authorization: Vec<_> = received[0].headers.get_all("authorization").iter().collect();
    assert_eq!(authorization, [&HeaderValue::from_static("Bearer from-call")]);
}

#[tokio::test]
async fn test_layers_under_concurrent_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs/1"))
        .respond_with(ResponseTemplate::new(500).set_delay(Duration::from_millis(50)))
        .expect(4)
        .mount(&mock_server)
        .await;

    let transport = HyperClient::builder()
        .layer(LoggingLayer::debug())
        .layer(ConcurrencyLimitLayer::new(1))
        .layer(AuthLayer::new(&Auth::basic("user", "pass")))
        .build();
    let client = api(&mock_server, transport);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.call("getJobs", args![1]).await })
        })
        .collect();

    for handle in handles {
        let response = handle
            .await
            .expect("task")
            .expect("an HTTP error is still a response");
        assert_eq!(response.status(), 500);
    }
}
