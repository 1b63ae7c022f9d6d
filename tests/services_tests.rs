//! Integration tests for the auth and price service facades.

use rest_resource_client::{AuthService, BaseUrl, BearerToken, ClientConfig, Fields, PriceService};
use wiremock::matchers::{body_string, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_auth_service(server: &MockServer) -> AuthService {
    AuthService::new(&format!("{}/users", server.uri())).unwrap()
}

fn create_price_service(server: &MockServer, token: &str) -> PriceService {
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(format!("{}/prices", server.uri())).unwrap())
        .bearer_token(BearerToken::new(token).unwrap())
        .build()
        .unwrap();
    PriceService::from_config(&config).unwrap()
}

async fn mount(server: &MockServer, verb: &str, route: &str, reply: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// AuthService
// ============================================================================

#[tokio::test]
async fn test_register_and_login_post_to_named_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/register"))
        .and(body_string(r#"{"email":"a@b.c","password":"pw"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":"1"}"#))
        .expect(1)
        .mount(&server)
        .await;
    mount(&server, "POST", "/users/login", r#"{"token":"t"}"#).await;

    let auth = create_auth_service(&server);
    let credentials = Fields::new().with("email", "a@b.c").with("password", "pw");

    assert_eq!(
        auth.register_user(&credentials).await.unwrap(),
        r#"{"id":"1"}"#
    );
    assert_eq!(auth.login_user(&credentials).await.unwrap(), r#"{"token":"t"}"#);
}

#[tokio::test]
async fn test_user_crud_endpoints() {
    let server = MockServer::start().await;
    mount(&server, "GET", "/users/42", "get").await;
    mount(&server, "PUT", "/users/42", "update").await;
    mount(&server, "PUT", "/users/42/password", "password").await;
    mount(&server, "DELETE", "/users/42", "delete").await;

    let auth = create_auth_service(&server);

    assert_eq!(auth.get_user("42").await.unwrap(), "get");
    assert_eq!(
        auth.update_user("42", &Fields::new().with("name", "Ada"))
            .await
            .unwrap(),
        "update"
    );
    assert_eq!(
        auth.change_password("42", &Fields::new().with("password", "new"))
            .await
            .unwrap(),
        "password"
    );
    assert_eq!(auth.delete_user("42").await.unwrap(), "delete");
}

#[tokio::test]
async fn test_auth_service_sends_empty_bearer_token() {
    let server = MockServer::start().await;
    // The server side trims trailing whitespace from header values.
    Mock::given(header_regex("Authorization", r"^Bearer\s*$"))
        .and(method("GET"))
        .and(path("/users/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("user"))
        .expect(1)
        .mount(&server)
        .await;

    let auth = create_auth_service(&server);
    assert_eq!(auth.get_user("42").await.unwrap(), "user");
}

#[tokio::test]
async fn test_auth_errors_carry_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"bad credentials"}"#))
        .mount(&server)
        .await;

    let auth = create_auth_service(&server);
    let error = auth.login_user(&Fields::new()).await.unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert_eq!(error.response_body(), Some(r#"{"error":"bad credentials"}"#));
}

// ============================================================================
// PriceService
// ============================================================================

#[tokio::test]
async fn test_price_endpoints_send_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(header("Authorization", "Bearer price-token"))
        .and(method("GET"))
        .and(path("/prices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(header("Authorization", "Bearer price-token"))
        .and(method("POST"))
        .and(path("/prices"))
        .and(body_string(r#"{"name":"Widget","price":9.99}"#))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let prices = create_price_service(&server, "price-token");

    assert_eq!(prices.get_all_prices().await.unwrap(), "[]");
    assert_eq!(
        prices
            .create_price(&Fields::new().with("name", "Widget").with("price", 9.99))
            .await
            .unwrap(),
        "created"
    );
}

#[tokio::test]
async fn test_update_price_puts_to_collection_root() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/prices"))
        .and(body_string(r#"{"id":"5","price":12.5}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string("updated"))
        .expect(1)
        .mount(&server)
        .await;

    let prices = create_price_service(&server, "price-token");
    let fields = Fields::new().with("id", "5").with("price", 12.5);

    assert_eq!(prices.update_price(&fields).await.unwrap(), "updated");
}

#[tokio::test]
async fn test_delete_price_targets_id() {
    let server = MockServer::start().await;
    mount(&server, "DELETE", "/prices/5", "").await;

    let prices = create_price_service(&server, "price-token");
    assert_eq!(prices.delete_price("5").await.unwrap(), "");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.is_empty());
}
