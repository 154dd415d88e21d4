use axum::http::{header, Method, StatusCode};
use carrental_core::config::Config;
use carrental_core::page::RenderedPage;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn router_for(config: &Config) -> axum::Router {
    let page = RenderedPage::new(&config.page()).unwrap();
    carrental_server::build_router(page, &config.server.page_path)
}

fn default_router() -> axum::Router {
    router_for(&Config::default())
}

/// Send a request via `oneshot` and return (status, content-type, body).
async fn send(app: axum::Router, method: Method, uri: &str) -> (StatusCode, String, Vec<u8>) {
    let req = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, body.to_vec())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String, Vec<u8>) {
    send(app, Method::GET, uri).await
}

// ---------------------------------------------------------------------------
// Welcome page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_root_returns_welcome_page() {
    let (status, content_type, body) = get(default_router(), "/").await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(html.contains("Welcome to Our Car Rental System"));
    assert!(html.contains(r#"<form action="register_customer" method="get">"#));
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let app = default_router();
    let (_, _, first) = get(app.clone(), "/").await;
    for _ in 0..5 {
        let (status, _, body) = get(app.clone(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, first);
    }
}

#[tokio::test]
async fn query_string_does_not_change_response() {
    let app = default_router();
    let (_, _, plain) = get(app.clone(), "/").await;
    let (status, _, with_query) = get(app, "/?lang=fr&session=abc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plain, with_query);
}

#[tokio::test]
async fn request_headers_do_not_change_response() {
    let app = default_router();
    let (_, _, plain) = get(app.clone(), "/").await;

    let req = axum::http::Request::builder()
        .uri("/")
        .header(header::COOKIE, "session=xyz")
        .header(header::ACCEPT_LANGUAGE, "de-DE")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body.to_vec(), plain);
}

#[tokio::test]
async fn body_has_single_form_and_single_control() {
    let (_, _, body) = get(default_router(), "/").await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(html.matches("<form").count(), 1);
    assert_eq!(html.matches("<button").count(), 1);
    assert_eq!(html.matches("<input").count(), 0);
    assert!(html.contains(">Continue to Rent a Car</button>"));
}

#[tokio::test]
async fn head_returns_headers_without_body() {
    let (status, content_type, body) = send(default_router(), Method::HEAD, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(body.is_empty());
}

#[tokio::test]
async fn post_to_page_is_rejected() {
    let (status, _, _) = send(default_router(), Method::POST, "/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn page_path_and_action_are_configurable() {
    let mut config = Config::default();
    config.server.page_path = "/welcome".to_string();
    config.registration.action = "/customers/register".to_string();
    let app = router_for(&config);

    let (status, _, body) = get(app.clone(), "/welcome").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains(r#"action="/customers/register""#));

    let (status, _, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_valid_page_path_is_reachable() {
    for path in ["/welcome/", "/rent-a-car/v1.0_~home", "/index.html"] {
        let mut config = Config::default();
        config.server.page_path = path.to_string();
        assert!(config.ensure_valid().is_ok(), "{path} should validate");

        let (status, _, _) = get(router_for(&config), path).await;
        assert_eq!(status, StatusCode::OK, "GET {path}");
    }
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn registration_target_is_not_served_here() {
    let (status, content_type, body) = get(default_router(), "/register_customer").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.contains("application/json"));
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("/register_customer"));
}

#[tokio::test]
async fn embedded_assets_are_served() {
    let (status, content_type, body) = get(default_router(), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert!(String::from_utf8(body).unwrap().contains("User-agent"));

    let (status, content_type, _) = get(default_router(), "/favicon.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/svg+xml");
}

// ---------------------------------------------------------------------------
// Listener
// ---------------------------------------------------------------------------

#[tokio::test]
async fn serve_on_answers_over_tcp() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        carrental_server::serve_on(&Config::default(), listener, false).await
    });

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let text = String::from_utf8_lossy(&raw);

    assert!(text.starts_with("HTTP/1.1 200 OK"));
    assert!(text.contains("Welcome to Our Car Rental System"));

    server.abort();
}

#[tokio::test]
async fn serve_on_rejects_invalid_config() {
    let mut config = Config::default();
    config.registration.action = String::new();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();

    let err = carrental_server::serve_on(&config, listener, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("registration.action is empty"));
}

#[tokio::test]
async fn serve_on_rejects_route_syntax_in_page_path() {
    let mut config = Config::default();
    config.server.page_path = "/:lang".to_string();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();

    let err = carrental_server::serve_on(&config, listener, false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("server.page_path '/:lang'"));
}
