//! Router tests against an in-memory upstream.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use ppay_core::gateway::{GatewayError, PaymentGateway};
use ppay_sdk::objects::{DirectPaymentRequest, PaymentMethod, PaymentStatus};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::config::LoadedConfig;
use crate::config::runtime::{ServerConfig, UpstreamConfig};
use crate::server::build_router;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
struct Call {
    method: &'static str,
    path: String,
    body: Option<Value>,
}

type Reply = Box<dyn Fn(&str) -> Result<Value, GatewayError> + Send + Sync>;

/// Upstream stub that records every call and answers with `reply`.
struct StubGateway {
    reply: Reply,
    calls: Mutex<Vec<Call>>,
}

impl StubGateway {
    fn new(reply: impl Fn(&str) -> Result<Value, GatewayError> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            reply: Box::new(reply),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn answering(body: Value) -> Arc<Self> {
        Self::new(move |_| Ok(body.clone()))
    }

    fn failing_with_status(status: u16, body: Value) -> Arc<Self> {
        Self::new(move |_| {
            Err(GatewayError::Api {
                status,
                body: body.clone(),
            })
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn post(&self, path: &str, body: &Value) -> Result<Value, GatewayError> {
        self.calls.lock().unwrap().push(Call {
            method: "POST",
            path: path.to_owned(),
            body: Some(body.clone()),
        });
        (self.reply)(path)
    }

    async fn get(&self, path: &str) -> Result<Value, GatewayError> {
        self.calls.lock().unwrap().push(Call {
            method: "GET",
            path: path.to_owned(),
            body: None,
        });
        (self.reply)(path)
    }
}

fn app(stub: Arc<StubGateway>) -> Router {
    let config = LoadedConfig {
        server: ServerConfig {
            listen: "127.0.0.1:5010".parse().unwrap(),
            public_url: None,
        },
        upstream: UpstreamConfig::new("http://upstream.test/api/v1".parse().unwrap(), "pk_test"),
    };
    build_router(AppState::new(config.into_shared(), stub))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::HOST, "partner.test")
        .header(header::USER_AGENT, "ppay-tests")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::HOST, "partner.test")
        .body(Body::empty())
        .unwrap()
}

async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn succeeded() -> Value {
    json!({"paymentIntentId": "pi_1", "status": "succeeded", "gateway": "STRIPE"})
}

// ---------------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn direct_process_reshapes_upstream_result() {
    let stub = StubGateway::answering(succeeded());
    let (status, body) = send(
        app(stub.clone()),
        post_json(
            "/api/v1/payments/direct/process",
            json!({"orderCode": "ORD_1", "paymentMethod": {"type": "card", "token": "pm_card_visa"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": {
                "paymentIntentId": "pi_1",
                "status": "succeeded",
                "gateway": "STRIPE",
                "threeDSecure": {"required": false}
            }
        })
    );

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "/payments/direct/process");
    let sent = calls[0].body.as_ref().unwrap();
    assert_eq!(sent["orderCode"], "ORD_1");
    assert_eq!(sent["returnUrl"], "http://partner.test/api/v1/payments/return");
    assert_eq!(sent["userAgent"], "ppay-tests");
}

#[tokio::test]
async fn caller_supplied_fields_are_forwarded() {
    let stub = StubGateway::answering(succeeded());
    let request = post_json(
        "/api/v1/payments/begin",
        json!({
            "orderCode": "ORD_1",
            "paymentMethod": {"token": "pm_card_visa"},
            "returnUrl": "https://shop.example.com/back",
            "clientIp": "198.51.100.4"
        }),
    );
    let (status, _) = send(app(stub.clone()), request).await;

    assert_eq!(status, StatusCode::OK);
    let sent = stub.calls()[0].body.clone().unwrap();
    assert_eq!(sent["returnUrl"], "https://shop.example.com/back");
    assert_eq!(sent["clientIp"], "198.51.100.4");
    assert_eq!(sent["paymentMethod"]["type"], "card");
}

#[tokio::test]
async fn requires_action_exposes_three_d_secure() {
    let stub = StubGateway::answering(json!({
        "paymentIntentId": "pi_3ds",
        "status": "requires_action",
        "gateway": "STRIPE",
        "threeDSecure": {
            "type": "REDIRECT",
            "url": "https://hooks.example.com/3ds",
            "paymentIntentClientSecret": "pi_3ds_secret"
        }
    }));
    let (_, body) = send(
        app(stub),
        post_json(
            "/api/v1/payments/direct/process",
            json!({"orderCode": "ORD_1", "paymentMethod": {"token": "pm_card_threeDSecure2Required"}}),
        ),
    )
    .await;

    assert_eq!(
        body["data"]["threeDSecure"],
        json!({
            "required": true,
            "type": "REDIRECT",
            "authenticationUrl": "https://hooks.example.com/3ds",
            "clientSecret": "pi_3ds_secret"
        })
    );
}

#[tokio::test]
async fn missing_order_code_is_rejected_before_upstream() {
    let stub = StubGateway::answering(succeeded());
    let (status, body) = send(
        app(stub.clone()),
        post_json(
            "/api/v1/payments/direct/process",
            json!({"paymentMethod": {"type": "card", "token": "pm_card_visa"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "MISSING_ORDER_CODE");
    assert!(body.get("data").is_none());
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn missing_token_is_rejected_before_upstream() {
    let stub = StubGateway::answering(succeeded());
    let (status, body) = send(
        app(stub.clone()),
        post_json(
            "/api/v1/payments/direct/process",
            json!({"orderCode": "ORD_1", "paymentMethod": {"type": "card", "token": null}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_PAYMENT_METHOD");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn bodyless_post_reports_missing_fields() {
    let stub = StubGateway::answering(succeeded());

    let no_body = Request::builder()
        .method("POST")
        .uri("/api/v1/payments/direct/process")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(stub.clone()), no_body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_ORDER_CODE");

    let empty_json = Request::builder()
        .method("POST")
        .uri("/api/v1/payments/hosted/create-session")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(stub.clone()), empty_json).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_ORDER_CODE");

    let form = Request::builder()
        .method("POST")
        .uri("/api/v1/demo/test-payment")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("scenario=success"))
        .unwrap();
    let (status, body) = send(app(stub.clone()), form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELDS");

    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn decline_without_message_is_forwarded() {
    let stub = StubGateway::answering(json!({
        "status": "failed",
        "gateway": "STRIPE",
        "error": {"code": "card_declined"}
    }));
    let (status, body) = send(
        app(stub),
        post_json(
            "/api/v1/payments/direct/process",
            json!({"orderCode": "ORD_1", "paymentMethod": {"token": "pm_card_chargeDeclined"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "failed");
    assert_eq!(body["data"]["error"], json!({"code": "card_declined"}));
}

#[tokio::test]
async fn unknown_gateway_and_order_fields_pass_through() {
    let order = json!({
        "orderCode": "ORD_1",
        "totalAmount": 10,
        "currency": "MYR",
        "items": [{"sku": "A"}]
    });
    let stub = StubGateway::answering(json!({
        "paymentIntentId": "pi_1",
        "status": "succeeded",
        "gateway": "WORLDPAY",
        "order": order.clone()
    }));
    let (status, body) = send(
        app(stub),
        post_json(
            "/api/v1/payments/direct/process",
            json!({"orderCode": "ORD_1", "paymentMethod": {"token": "pm_card_visa"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["gateway"], "WORLDPAY");
    assert_eq!(body["data"]["order"], order);
}

#[tokio::test]
async fn malformed_body_is_invalid_request_body() {
    let stub = StubGateway::answering(succeeded());
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/payments/direct/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(stub.clone()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_REQUEST_BODY");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn upstream_503_is_propagated_as_api_error() {
    let stub = StubGateway::failing_with_status(503, json!({"message": "maintenance"}));
    let (status, body) = send(
        app(stub),
        post_json(
            "/api/v1/payments/direct/process",
            json!({"orderCode": "ORD_1", "paymentMethod": {"token": "pm_card_visa"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "API_ERROR_503");
    assert_eq!(body["error"]["message"], "maintenance");
    assert_eq!(body["error"]["details"], json!({"message": "maintenance"}));
}

#[tokio::test]
async fn unreachable_upstream_is_service_unavailable() {
    let stub = StubGateway::new(|_| Err(GatewayError::Unreachable("connection refused".into())));
    let (status, body) = send(app(stub), get("/api/v1/payments/direct/status/pi_1")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
    assert!(body["error"].get("details").is_none());
}

#[tokio::test]
async fn timeout_is_network_error() {
    let stub = StubGateway::new(|_| Err(GatewayError::Network("operation timed out".into())));
    let (status, body) = send(app(stub), get("/api/v1/payments/hosted/session/cs_1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "NETWORK_ERROR");
}

#[tokio::test]
async fn direct_status_returns_raw_payload() {
    let payload = json!({"paymentIntentId": "pi_1", "status": "processing", "extra": [1, 2]});
    let stub = StubGateway::answering(payload.clone());
    let (status, body) = send(app(stub.clone()), get("/api/v1/payments/direct/status/pi_1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "data": payload}));
    assert_eq!(stub.calls()[0].path, "/payments/direct/status/pi_1");
}

#[tokio::test]
async fn hosted_session_requires_both_urls() {
    let stub = StubGateway::answering(json!({}));
    let (status, body) = send(
        app(stub.clone()),
        post_json(
            "/api/v1/payments/hosted/create-session",
            json!({"orderCode": "ORD_1", "successUrl": "https://shop.example.com/ok"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_URLS");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn hosted_session_is_exposed_with_url() {
    let stub = StubGateway::answering(json!({
        "sessionId": "cs_1",
        "checkoutUrl": "https://checkout.example.com/c/cs_1",
        "order": {"orderCode": "ORD_1", "totalAmount": 25.5, "currency": "MYR"}
    }));
    let (status, body) = send(
        app(stub),
        post_json(
            "/api/v1/payments/hosted/create-session",
            json!({
                "orderCode": "ORD_1",
                "successUrl": "https://shop.example.com/ok",
                "cancelUrl": "https://shop.example.com/cancel"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sessionId"], "cs_1");
    assert_eq!(body["data"]["url"], "https://checkout.example.com/c/cs_1");
    assert_eq!(body["data"]["order"]["currency"], "MYR");
    assert!(body["data"].get("checkoutUrl").is_none());
}

#[tokio::test]
async fn history_applies_defaults_and_drops_empty_filters() {
    let stub = StubGateway::answering(json!({"data": [], "total": 0}));
    let (status, _) = send(
        app(stub.clone()),
        get("/api/v1/payments/history?status=&orderCode=ORD_1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stub.calls()[0].path,
        "/payments/history?page=1&limit=20&orderCode=ORD_1"
    );
}

#[tokio::test]
async fn history_forwards_page_and_limit_verbatim() {
    let stub = StubGateway::answering(json!({"data": [], "total": 0}));
    let (status, _) = send(
        app(stub.clone()),
        get("/api/v1/payments/history?page=abc&limit=5"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stub.calls()[0].path, "/payments/history?page=abc&limit=5");
}

#[tokio::test]
async fn blank_identifiers_are_rejected_before_upstream() {
    let stub = StubGateway::answering(succeeded());

    let (status, body) = send(app(stub.clone()), get("/api/v1/payments/direct/status/%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_PAYMENT_INTENT_ID");

    let (status, body) = send(app(stub.clone()), get("/api/v1/payments/hosted/session/%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_SESSION_ID");

    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn return_page_is_html() {
    let stub = StubGateway::answering(json!({}));
    let (status, bytes) = send_raw(
        app(stub.clone()),
        get("/api/v1/payments/return?payment_intent=pi_1&redirect_status=succeeded"),
    )
    .await;

    let page = String::from_utf8(bytes).unwrap();
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Payment Status: succeeded"));
    assert!(page.contains("/api/v1/payments/direct/status/pi_1"));
    assert!(stub.calls().is_empty());
}

// ---------------------------------------------------------------------------
// Demo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn scenarios_are_listed() {
    let (status, body) = send(
        app(StubGateway::answering(json!({}))),
        get("/api/v1/demo/scenarios"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let scenarios = body["data"]["scenarios"].as_object().unwrap();
    assert_eq!(scenarios.len(), 3);
    assert_eq!(
        scenarios["declined"]["paymentMethod"]["token"],
        "pm_card_visa_chargeDeclined"
    );
    assert_eq!(body["data"]["usage"]["steps"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn unknown_scenario_lists_valid_ids() {
    let stub = StubGateway::answering(succeeded());
    let (status, body) = send(
        app(stub.clone()),
        post_json(
            "/api/v1/demo/test-payment",
            json!({"scenario": "refund", "orderCode": "ORD_1"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_SCENARIO");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("success, threeDSecure, declined")
    );
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_payment_requires_both_fields() {
    let stub = StubGateway::answering(succeeded());
    let (status, body) = send(
        app(stub.clone()),
        post_json("/api/v1/demo/test-payment", json!({"scenario": "success"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELDS");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_payment_runs_scenario_and_advises() {
    let stub = StubGateway::answering(json!({
        "paymentIntentId": "pi_3ds",
        "status": "requires_action",
        "gateway": "STRIPE",
        "threeDSecure": {"type": "REDIRECT", "url": "https://hooks.example.com/3ds"}
    }));
    let (status, body) = send(
        app(stub.clone()),
        post_json(
            "/api/v1/demo/test-payment",
            json!({"scenario": "threeDSecure", "orderCode": "ORD_1"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["scenario"]["name"], "threeDSecure");
    assert_eq!(body["data"]["payment"]["threeDSecure"]["required"], true);
    let steps = body["data"]["nextSteps"].as_array().unwrap();
    assert!(
        steps
            .iter()
            .any(|s| s.as_str().unwrap().contains("https://hooks.example.com/3ds"))
    );

    let sent = stub.calls()[0].body.clone().unwrap();
    assert_eq!(sent["paymentMethod"]["token"], "pm_card_threeDSecure2Required");
    assert_eq!(sent["paymentMethod"]["last4"], "0002");
    assert_eq!(sent["returnUrl"], "http://partner.test/api/v1/payments/return");
}

#[tokio::test]
async fn test_payment_wraps_upstream_failure() {
    let stub = StubGateway::failing_with_status(
        402,
        json!({"error": {"message": "Your card was declined."}}),
    );
    let (status, body) = send(
        app(stub),
        post_json(
            "/api/v1/demo/test-payment",
            json!({"scenario": "declined", "orderCode": "ORD_1"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "TEST_PAYMENT_FAILED");
    assert_eq!(body["error"]["details"]["error"]["code"], "API_ERROR_402");
    assert_eq!(
        body["error"]["details"]["error"]["message"],
        "Your card was declined."
    );
}

#[tokio::test]
async fn check_status_keeps_payload_and_advises() {
    let payload = json!({
        "paymentIntentId": "pi_1",
        "status": "failed",
        "gateway": "ADYEN",
        "error": {"code": "card_declined", "message": "Insufficient funds"}
    });
    let stub = StubGateway::answering(payload.clone());
    let (status, body) = send(
        app(stub),
        post_json(
            "/api/v1/demo/check-payment-status",
            json!({"paymentIntentId": "pi_1"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["payment"], payload);
    let steps = body["data"]["nextSteps"].as_array().unwrap();
    assert!(steps.contains(&json!("Error: Insufficient funds")));
}

#[tokio::test]
async fn check_status_advises_on_minimal_payload() {
    let payload = json!({"paymentIntentId": "pi_1", "status": "succeeded"});
    let stub = StubGateway::answering(payload.clone());
    let (status, body) = send(
        app(stub),
        post_json(
            "/api/v1/demo/check-payment-status",
            json!({"paymentIntentId": "pi_1"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["payment"], payload);
    assert_eq!(body["data"]["nextSteps"][0], "Payment completed successfully");
}

#[tokio::test]
async fn check_status_rejects_non_payment_payload() {
    let stub = StubGateway::answering(json!({"unexpected": true}));
    let (status, body) = send(
        app(stub),
        post_json(
            "/api/v1/demo/check-payment-status",
            json!({"paymentIntentId": "pi_1"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "CHECK_PAYMENT_STATUS_FAILED");
}

#[tokio::test]
async fn hosted_demo_points_back_at_this_server() {
    let stub = StubGateway::answering(json!({
        "sessionId": "cs_1",
        "checkoutUrl": "https://checkout.example.com/c/cs_1"
    }));
    let (status, body) = send(
        app(stub.clone()),
        post_json("/api/v1/demo/test-hosted-payment", json!({"orderCode": "ORD_1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["scenario"]["name"], "hosted_checkout");
    assert_eq!(body["data"]["session"]["url"], "https://checkout.example.com/c/cs_1");
    assert_eq!(body["data"]["nextSteps"].as_array().unwrap().len(), 4);

    let sent = stub.calls()[0].body.clone().unwrap();
    assert_eq!(sent["successUrl"], "http://partner.test/payment-success.html");
    assert_eq!(sent["cancelUrl"], "http://partner.test/payment-cancel.html");
}

#[tokio::test]
async fn hosted_demo_wraps_unreachable_upstream() {
    let stub = StubGateway::new(|_| Err(GatewayError::Unreachable("dns".into())));
    let (status, body) = send(
        app(stub),
        post_json("/api/v1/demo/test-hosted-payment", json!({"orderCode": "ORD_1"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "TEST_HOSTED_PAYMENT_FAILED");
    assert_eq!(body["error"]["details"]["error"]["code"], "SERVICE_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Application shell
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_health_and_fallback() {
    let stub = StubGateway::answering(json!({}));

    let (status, body) = send(app(stub.clone()), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Partner Payment Integration Sample");

    let (status, body) = send(app(stub.clone()), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(app(stub), get("/api/v1/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Not Found - /api/v1/nope");
}

// ---------------------------------------------------------------------------
// End to end through the SDK client
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sdk_clients_against_live_listener() {
    use ppay_sdk::client::{DemoClient, PaymentsClient};

    let stub = StubGateway::answering(succeeded());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(stub.clone());
    tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    });

    let base: url::Url = format!("http://{addr}").parse().unwrap();
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let payments = PaymentsClient::new(base.clone()).with_http_client(http.clone());

    let envelope = payments
        .process_direct_payment(&DirectPaymentRequest {
            order_code: "ORD_1".into(),
            payment_method: Some(PaymentMethod::card("pm_card_visa")),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().status, PaymentStatus::Succeeded);
    // Peer address is used when no X-Forwarded-For is sent.
    assert_eq!(stub.calls()[0].body.as_ref().unwrap()["clientIp"], "127.0.0.1");

    let rejected = payments
        .process_direct_payment(&DirectPaymentRequest::default())
        .await
        .unwrap();
    assert!(!rejected.success);
    assert_eq!(rejected.error_code(), Some("MISSING_ORDER_CODE"));

    let demo = DemoClient::new(base).with_http_client(http);
    let catalog = demo.scenarios().await.unwrap().data.unwrap();
    assert!(catalog.scenarios.contains_key("success"));

    let run = demo.test_payment("success", "ORD_2").await.unwrap();
    let run = run.data.unwrap();
    assert_eq!(run.scenario.name, "success");
    assert_eq!(run.next_steps[0], "Payment completed successfully");
}
