use super::*;
use axum::{body, body::Body, http::Request};
use serde_json::{json, Map, Value};
use telemetry::{EventReporter, TelemetryConfig};
use tower::ServiceExt;

fn test_app(capacity: usize) -> Router {
    build_router(AppState {
        events: EventLog::new(capacity),
    })
}

fn post_event(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("request")
}

async fn read_events(app: Router) -> Vec<Value> {
    let request = Request::get("/events").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json")
}

#[tokio::test]
async fn ping_answers_pong() {
    let app = test_app(4);
    for uri in ["/ping", "/ping.txt"] {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(body.as_ref(), b"pong");
    }
}

#[tokio::test]
async fn accepted_events_are_listed_in_arrival_order() {
    let app = test_app(4);

    for name in ["open", "save"] {
        let body = json!({ "app": "gistEditor", "name": name }).to_string();
        let response = app
            .clone()
            .oneshot(post_event("/event", body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response = app
        .clone()
        .oneshot(post_event("/event/extra", json!({ "name": "nested" }).to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let events = read_events(app).await;
    let names: Vec<&str> = events
        .iter()
        .filter_map(|e| e.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["open", "save", "nested"]);
}

#[tokio::test]
async fn event_without_name_is_rejected() {
    let app = test_app(4);

    let response = app
        .clone()
        .oneshot(post_event("/event", json!({ "app": "gistEditor" }).to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let error: ApiError = serde_json::from_slice(&body).expect("error json");
    assert_eq!(error.code, ErrorCode::Validation);

    let response = app
        .clone()
        .oneshot(post_event("/event", "[1, 2]"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(read_events(app).await.is_empty());
}

#[tokio::test]
async fn reporter_delivers_to_collector() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = test_app(8);
    let server_app = app.clone();
    tokio::spawn(async move {
        let _ = axum::serve(listener, server_app).await;
    });

    let reporter = EventReporter::http(TelemetryConfig {
        collector_url: format!("http://{addr}"),
        ..TelemetryConfig::default()
    })
    .expect("reporter");
    let mut meta = Map::new();
    meta.insert("gist".into(), json!("abc123"));
    reporter
        .report("save", 120.0, meta)
        .expect("spawned")
        .await
        .expect("join");

    let events = read_events(app).await;
    assert_eq!(
        events,
        vec![json!({ "app": "gistEditor", "name": "save", "dur": "120", "gist": "abc123" })]
    );
}
