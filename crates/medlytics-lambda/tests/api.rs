use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;

use medlytics_auth::jwt::Claims;
use medlytics_lambda::app;
use medlytics_lambda::state::AppState;
use medlytics_storage::store::MemoryStore;

const SECRET: &str = "test-secret";

fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), Some(SECRET.to_string()));
    (app(state), store)
}

fn signed(sub: &str, secret: &[u8]) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        exp: u64::try_from(jiff::Timestamp::now().as_second()).unwrap() + 3600,
    };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret)).unwrap()
}

fn token(sub: &str) -> String {
    signed(sub, SECRET.as_bytes())
}

fn request(method: Method, uri: &str, body: Option<Value>, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn predict(app: &Router, kind: &str, body: Value, bearer: Option<&str>) -> (StatusCode, Value) {
    send(app, request(Method::POST, &format!("/{kind}/predict"), Some(body), bearer)).await
}

#[tokio::test]
async fn health() {
    let (app, _) = test_app();
    let (status, body) = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_instruments() {
    let (app, _) = test_app();
    let (status, body) = send(&app, request(Method::GET, "/instruments", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["depression", "anxiety", "sleep", "bmi"]);
}

#[tokio::test]
async fn instrument_detail_lists_items() {
    let (app, _) = test_app();
    let (status, body) = send(&app, request(Method::GET, "/instruments/depression", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "PHQ-9 Depression Screening");
    assert_eq!(body["sections"][0]["items"].as_array().unwrap().len(), 9);

    let (status, body) = send(&app, request(Method::GET, "/instruments/stress", None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "instrument not found: stress");
}

#[tokio::test]
async fn anonymous_depression_prediction_is_stored() {
    let (app, store) = test_app();
    let (status, body) = predict(&app, "depression", json!({ "feelingDown": 2, "littleInterest": 1 }), None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["kind"], "depression");
    assert_eq!(body["ownerId"], Value::Null);
    assert_eq!(body["riskLevel"], "low");
    assert_eq!(body["result"]["phq9Score"], 3);
    assert_eq!(body["input"]["troubleSleeping"], 0);
    assert_eq!(store.len().await, 1);

    let id = body["id"].as_str().unwrap();
    let (status, fetched) = send(&app, request(Method::GET, &format!("/depression/results/{id}"), None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn null_answers_count_as_unanswered() {
    let (app, _) = test_app();
    let (status, body) = predict(
        &app,
        "depression",
        json!({ "feelingDown": 2, "littleInterest": null }),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["result"]["phq9Score"], 2);
    assert_eq!(body["input"]["littleInterest"], 0);
}

#[tokio::test]
async fn subject_named_anonymous_cannot_list_anonymous_analyses() {
    let (app, _) = test_app();
    let (status, _) = predict(&app, "depression", json!({ "feelingDown": 1 }), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let bearer = token("anonymous");
    let (status, body) = send(&app, request(Method::GET, "/depression/history", None, Some(&bearer))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn suicidal_answer_puts_crisis_line_first() {
    let (app, _) = test_app();
    let (status, body) = predict(&app, "depression", json!({ "suicidalThoughts": 3 }), None).await;

    assert_eq!(status, StatusCode::CREATED);
    let result = &body["result"];
    assert_eq!(result["crisisIntervention"], true);
    assert_eq!(result["professionalHelpUrgency"], "emergency");
    assert_eq!(
        result["recommendations"][0],
        "🚨 CRISIS: Call National Suicide Prevention Lifeline: 988 (US) or 112 (India)"
    );
}

#[tokio::test]
async fn anxiety_prediction_uses_neutral_support_default() {
    let (app, _) = test_app();
    let (status, body) = predict(&app, "anxiety", json!({}), None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["input"]["socialSupport"], 5);
    assert_eq!(body["result"]["anxietyScore"], 0);
    assert_eq!(body["result"]["severityLevel"], "Minimal");
}

#[tokio::test]
async fn out_of_range_answers_are_rejected() {
    let (app, store) = test_app();
    let (status, body) = predict(&app, "depression", json!({ "feelingDown": 7, "stressLevel": 15 }), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation failed");
    let fields: Vec<_> = body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["feelingDown", "stressLevel"]);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn bmi_without_measurements_is_rejected() {
    let (app, _) = test_app();
    let (status, body) = predict(&app, "bmi", json!({ "age": 40 }), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["violations"].as_array().unwrap().len(), 2);

    let (status, body) = predict(&app, "bmi", json!({ "height": 170, "weight": 65 }), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["result"]["bmiCategory"], "Normal");
}

#[tokio::test]
async fn wrong_field_types_are_bad_requests() {
    let (app, _) = test_app();
    let (status, body) = predict(&app, "sleep", json!({ "sleepDuration": "eight" }), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("malformed questionnaire"));
}

#[tokio::test]
async fn unknown_kind_is_not_found() {
    let (app, _) = test_app();
    let (status, _) = predict(&app, "stress", json!({}), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, request(Method::GET, "/stress/history", None, Some(&token("u")))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_result_is_not_found() {
    let (app, _) = test_app();
    let uri = format!("/sleep/results/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "analysis not found");
}

#[tokio::test]
async fn results_are_scoped_to_their_owner() {
    let (app, _) = test_app();
    let alice = token("alice");
    let (status, body) = predict(&app, "sleep", json!({ "sleepDuration": 5 }), Some(&alice)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ownerId"], "alice");

    let uri = format!("/sleep/results/{}", body["id"].as_str().unwrap());
    let (status, _) = send(&app, request(Method::GET, &uri, None, Some(&alice))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, request(Method::GET, &uri, None, Some(&token("bob")))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, request(Method::GET, &uri, None, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn history_requires_a_signed_in_caller() {
    let (app, _) = test_app();
    let (status, body) = send(&app, request(Method::GET, "/depression/history", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn history_lists_newest_first_and_filters_by_risk() {
    let (app, _) = test_app();
    let alice = token("alice");

    let answers = [
        json!({}),
        json!({ "littleInterest": 3, "feelingDown": 3, "feelingTired": 3, "feelingBad": 3, "troubleSleeping": 3 }),
        json!({ "feelingDown": 1 }),
    ];
    for body in answers {
        let (status, _) = predict(&app, "depression", body, Some(&alice)).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    predict(&app, "depression", json!({}), Some(&token("bob"))).await;
    predict(&app, "anxiety", json!({}), Some(&alice)).await;

    let (status, body) = send(&app, request(Method::GET, "/depression/history", None, Some(&alice))).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r["ownerId"] == "alice"));
    let timestamps: Vec<_> = records
        .iter()
        .map(|r| r["createdAt"].as_str().unwrap().parse::<jiff::Timestamp>().unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|pair| pair[0] >= pair[1]));

    let (status, body) = send(
        &app,
        request(Method::GET, "/depression/history?riskLevel=high", None, Some(&alice)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["result"]["phq9Score"], 15);
}

#[tokio::test]
async fn unknown_risk_filter_is_a_bad_request() {
    let (app, _) = test_app();
    let uri = "/anxiety/history?riskLevel=extreme";
    let (status, _) = send(&app, request(Method::GET, uri, None, Some(&token("alice")))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_tokens_are_unauthorized() {
    let (app, _) = test_app();

    let (status, _) = predict(&app, "anxiety", json!({}), Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let forged = signed("alice", b"other-secret");
    let (status, _) = predict(&app, "anxiety", json!({}), Some(&forged)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let basic = Request::builder()
        .method(Method::GET)
        .uri("/anxiety/history")
        .header(header::AUTHORIZATION, "Basic YWxpY2U6cHc=")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, basic).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn tokens_are_rejected_without_a_configured_secret() {
    let app = app(AppState::new(Arc::new(MemoryStore::new()), None));

    let (status, _) = predict(&app, "anxiety", json!({}), Some(&token("alice"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = predict(&app, "anxiety", json!({}), None).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn public_routes_ignore_credentials() {
    let (app, _) = test_app();
    let (status, _) = send(&app, request(Method::GET, "/health", None, Some("garbage"))).await;
    assert_eq!(status, StatusCode::OK);
}
