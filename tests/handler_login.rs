mod common;

use auth_api::api::handlers::login_handler;
use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::{Value, json};

fn server() -> TestServer {
    let app = Router::new().route("/login", post(login_handler));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_login_empty_body() {
    let response = server().post("/login").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "msg": "Login ROUTE..." }));
}

#[tokio::test]
async fn test_login_ignores_credentials() {
    let response = server()
        .post("/login")
        .json(&json!({ "email": "nobody@x.com", "password": "wrong" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "msg": "Login ROUTE..." }));
}

#[tokio::test]
async fn test_login_ignores_non_json_body() {
    let response = server().post("/login").text("garbage").await;

    response.assert_status_ok();
    assert_eq!(response.text(), r#"{"msg":"Login ROUTE..."}"#);
}

#[tokio::test]
async fn test_register_then_login_scenario() {
    use auth_api::api::routes::auth_routes;

    let (state, _repo) = common::create_test_state();
    let app = Router::new().merge(auth_routes()).with_state(state);
    let server = TestServer::new(app).unwrap();

    let register = server
        .post("/register")
        .json(&json!({ "name": "Alice", "email": "a@x.com", "password": "secret123" }))
        .await;
    register.assert_status_ok();

    let again = server
        .post("/register")
        .json(&json!({ "name": "Alice", "email": "a@x.com", "password": "whatever1" }))
        .await;
    again.assert_status_bad_request();
    assert_eq!(again.json::<Value>(), json!({ "error": "Email already exists" }));

    let login = server.post("/login").await;
    login.assert_status_ok();
    assert_eq!(login.json::<Value>(), json!({ "msg": "Login ROUTE..." }));
}
