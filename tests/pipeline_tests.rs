//! Request pipeline behavior against a mock upstream

mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use biblion_client::client::ApiClient;
use biblion_client::config::ApiConfig;
use biblion_client::credentials::{NoCredentials, StaticToken};
use biblion_client::error::ApiError;

use common::{api_config, make_client, RecordingNotifier};

const NO_QUERY: &[(&str, &str)] = &[];

fn success_envelope(data: Value) -> Value {
    json!({"code": 200, "message": "", "data": data})
}

#[tokio::test]
async fn attaches_bearer_header_when_token_present() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/api/ping"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(
        &server.uri(),
        Arc::new(StaticToken("secret-token".to_string())),
        Arc::new(RecordingNotifier::default()),
    );

    let _: Value = client.get("/ping", NO_QUERY).await.unwrap();
}

#[tokio::test]
async fn omits_authorization_header_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/api/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(
        &server.uri(),
        Arc::new(NoCredentials),
        Arc::new(RecordingNotifier::default()),
    );

    let _: Value = client.get("/ping", NO_QUERY).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn rewrites_path_behind_proxy_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/proxy/api/widgets"))
        .and(body_json(json!({"kind": "gear"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({"id": 1}))))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(
        &server.uri(),
        Arc::new(NoCredentials),
        Arc::new(RecordingNotifier::default()),
    );

    let created: Value = client.post("/widgets", &json!({"kind": "gear"})).await.unwrap();
    assert_eq!(created, json!({"id": 1}));
}

#[tokio::test]
async fn resolves_envelope_data_exactly() {
    let server = MockServer::start().await;
    let payload = json!({"nested": {"values": [1, 2, 3]}, "total": 7});

    Mock::given(method("GET"))
        .and(path("/proxy/api/anything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(payload.clone())))
        .mount(&server)
        .await;

    let client = make_client(
        &server.uri(),
        Arc::new(NoCredentials),
        Arc::new(RecordingNotifier::default()),
    );

    let resolved: Value = client.get("/anything", NO_QUERY).await.unwrap();
    assert_eq!(resolved, payload);
}

#[tokio::test]
async fn failure_code_rejects_with_message_and_notifies_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/proxy/api/authors"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 500, "message": "name required", "data": null})),
        )
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let client = make_client(&server.uri(), Arc::new(NoCredentials), notifier.clone());

    let result = client.post::<Value, _>("/authors", &json!({})).await;

    match result {
        Err(ApiError::Application { message }) => assert_eq!(message, "name required"),
        other => panic!("expected application error, got {other:?}"),
    }
    assert_eq!(notifier.messages(), vec!["name required".to_string()]);
}

#[tokio::test]
async fn missing_message_falls_back_to_unknown_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/api/authors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 500, "data": null})))
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let client = make_client(&server.uri(), Arc::new(NoCredentials), notifier.clone());

    let result = client.get::<Value, _>("/authors", NO_QUERY).await;

    match result {
        Err(ApiError::Application { message }) => assert_eq!(message, "unknown error"),
        other => panic!("expected application error, got {other:?}"),
    }
    assert_eq!(notifier.messages(), vec!["unknown error".to_string()]);
}

#[tokio::test]
async fn accepts_msg_spelling_in_failure_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/api/authors"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 500, "msg": "boom"})),
        )
        .mount(&server)
        .await;

    let client = make_client(
        &server.uri(),
        Arc::new(NoCredentials),
        Arc::new(RecordingNotifier::default()),
    );

    let result = client.get::<Value, _>("/authors", NO_QUERY).await;

    match result {
        Err(ApiError::Application { message }) => assert_eq!(message, "boom"),
        other => panic!("expected application error, got {other:?}"),
    }
}

#[tokio::test]
async fn envelope_code_overrides_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/api/authors"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"code": 500, "message": "still an envelope", "data": null})),
        )
        .mount(&server)
        .await;

    let client = make_client(
        &server.uri(),
        Arc::new(NoCredentials),
        Arc::new(RecordingNotifier::default()),
    );

    let result = client.get::<Value, _>("/authors", NO_QUERY).await;

    match result {
        Err(ApiError::Application { message }) => assert_eq!(message, "still an envelope"),
        other => panic!("expected application error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/api/authors"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let client = make_client(&server.uri(), Arc::new(NoCredentials), notifier.clone());

    let result = client.get::<Value, _>("/authors", NO_QUERY).await;

    assert!(matches!(result, Err(ApiError::Transport(_))));
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn http_error_without_envelope_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/api/authors"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let client = make_client(&server.uri(), Arc::new(NoCredentials), notifier.clone());

    let result = client.get::<Value, _>("/authors", NO_QUERY).await;

    assert!(matches!(result, Err(ApiError::Transport(_))));
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn slow_upstream_times_out_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/proxy/api/authors"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(json!(null)))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig {
        timeout_ms: 250,
        ..api_config(&server.uri())
    };
    let client = ApiClient::new(
        config,
        Arc::new(NoCredentials),
        Arc::new(RecordingNotifier::default()),
    )
    .unwrap();

    let result = client.get::<Value, _>("/authors", NO_QUERY).await;

    assert!(matches!(result, Err(ApiError::Transport(_))));
}
