//! Integration tests for the SMS and Signal senders against mock HTTP servers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use egg_shop::config::{AlertChannel, AppConfig, OrderAlert, SignalConfig, TwilioConfig};
use egg_shop::notify::{Notifier, NotifyError, SignalSender, SmsSender};
use egg_shop::router::create_app_router;
use egg_shop::state::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;
use wiremock::matchers::{basic_auth, body_json, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TWILIO_PATH: &str = "/2010-04-01/Accounts/AC123/Messages.json";

fn twilio_config(server: &MockServer) -> TwilioConfig {
    TwilioConfig {
        account_sid: "AC123".into(),
        auth_token: "secret-token".into(),
        from_number: "+15550009999".into(),
        api_url: server.uri(),
    }
}

fn signal_config(server: &MockServer) -> SignalConfig {
    SignalConfig {
        api_url: server.uri(),
        number: "+15550008888".into(),
        device_name: "haileys-garden".into(),
    }
}

#[tokio::test]
async fn sms_posts_form_with_basic_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TWILIO_PATH))
        .and(basic_auth("AC123", "secret-token"))
        .and(body_string_contains("To=%2B15550001111"))
        .and(body_string_contains("From=%2B15550009999"))
        .and(body_string_contains("Body=eggs+ready"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let sender = SmsSender::new(reqwest::Client::new(), Some(twilio_config(&server)));
    sender.send("+15550001111", "eggs ready").await.unwrap();
}

#[tokio::test]
async fn sms_non_success_status_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TWILIO_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let sender = SmsSender::new(reqwest::Client::new(), Some(twilio_config(&server)));
    let err = sender.send("+15550001111", "eggs ready").await.unwrap_err();

    assert!(matches!(
        err,
        NotifyError::Rejected {
            channel: "sms",
            status: 401
        }
    ));
}

#[tokio::test]
async fn signal_posts_json_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_json(json!({
            "message": "eggs ready",
            "number": "+15550008888",
            "recipients": ["+15550001111"]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let sender = SignalSender::new(reqwest::Client::new(), Some(signal_config(&server)));
    sender.send("+15550001111", "eggs ready").await.unwrap();
}

#[tokio::test]
async fn signal_server_error_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let sender = SignalSender::new(reqwest::Client::new(), Some(signal_config(&server)));
    let err = sender.send("+15550001111", "eggs ready").await.unwrap_err();

    assert_eq!(err.to_string(), "signal API returned status: 500");
}

#[tokio::test]
async fn signal_qr_code_link() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/qrcodelink"))
        .and(query_param("device_name", "haileys-garden"))
        .respond_with(ResponseTemplate::new(200).set_body_string("sgnl://linkdevice?uuid=abc"))
        .mount(&server)
        .await;

    let sender = SignalSender::new(reqwest::Client::new(), Some(signal_config(&server)));
    assert_eq!(
        sender.qr_code_link().await.unwrap(),
        "sgnl://linkdevice?uuid=abc"
    );
}

#[tokio::test]
async fn signal_qr_code_requires_plain_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/qrcodelink"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let sender = SignalSender::new(reqwest::Client::new(), Some(signal_config(&server)));
    assert!(matches!(
        sender.qr_code_link().await,
        Err(NotifyError::Rejected { status: 204, .. })
    ));
}

#[tokio::test]
async fn signal_api_url_with_trailing_slash() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/qrcodelink"))
        .respond_with(ResponseTemplate::new(200).set_body_string("sgnl://linkdevice?uuid=abc"))
        .expect(1)
        .mount(&server)
        .await;

    let config = SignalConfig {
        api_url: format!("{}/", server.uri()),
        ..signal_config(&server)
    };
    let sender = SignalSender::new(reqwest::Client::new(), Some(config));

    sender.send("+15550001111", "eggs ready").await.unwrap();
    assert_eq!(
        sender.qr_code_link().await.unwrap(),
        "sgnl://linkdevice?uuid=abc"
    );
}

#[tokio::test]
async fn unreachable_api_is_a_transport_error() {
    let config = SignalConfig {
        api_url: "http://127.0.0.1:1".into(),
        number: "+15550008888".into(),
        device_name: "haileys-garden".into(),
    };

    let sender = SignalSender::new(reqwest::Client::new(), Some(config));
    let err = sender.send("+15550001111", "eggs ready").await.unwrap_err();
    assert!(matches!(err, NotifyError::Transport { channel: "signal", .. }));
}

// =============================================================================
// Through the router
// =============================================================================

async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(json!({})))
}

#[tokio::test]
async fn notify_route_reports_sent_and_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_string_contains("first"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(body_string_contains("second"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let state = AppState::new(AppConfig {
        signal: Some(signal_config(&server)),
        ..AppConfig::default()
    });
    let app = create_app_router(Arc::new(state));

    let (status, body) = post_json(
        &app,
        "/notify/signal",
        json!({ "to": "+15550001111", "message": "first" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "sent", "channel": "signal" }));

    let (status, body) = post_json(
        &app,
        "/notify/signal",
        json!({ "to": "+15550001111", "message": "second" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "remote_rejected");
}

#[tokio::test]
async fn purchase_sends_order_alert() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(TWILIO_PATH))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let state = AppState::new(AppConfig {
        twilio: Some(twilio_config(&server)),
        order_alert: Some(OrderAlert {
            to: "+15550007777".into(),
            channel: AlertChannel::Sms,
        }),
        ..AppConfig::default()
    });
    let app = create_app_router(Arc::new(state));

    let (status, body) = post_json(&app, "/eggs/3/purchase", json!({ "quantity": 2 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    // the alert goes out on a background task
    let mut received = Vec::new();
    for _ in 0..100 {
        received = server.received_requests().await.unwrap_or_default();
        if !received.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(received.len(), 1);
    let form = String::from_utf8(received[0].body.clone()).unwrap();
    assert!(form.contains("To=%2B15550007777"));
    assert!(form.contains("New+order%3A+2+x+Duck+Egg"));
}

#[tokio::test]
async fn refused_purchase_sends_no_alert() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let state = AppState::new(AppConfig {
        twilio: Some(twilio_config(&server)),
        order_alert: Some(OrderAlert {
            to: "+15550007777".into(),
            channel: AlertChannel::Sms,
        }),
        ..AppConfig::default()
    });
    let app = create_app_router(Arc::new(state));

    let (_, body) = post_json(&app, "/eggs/3/purchase", json!({ "quantity": 500 })).await;
    assert_eq!(body["success"], false);

    tokio::time::sleep(Duration::from_millis(50)).await;
}
