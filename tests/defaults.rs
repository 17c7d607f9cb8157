use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE},
        HeaderValue, Request, StatusCode,
    },
    routing::get,
    Router,
};
use fallback_pages::{
    create_app, demo_routes, AppState, ErrorResponder, ErrorTemplates, ReasonPhrases,
};
use tower::ServiceExt;

const NON_EXISTING_URLS: [&str; 2] = ["/non_existing_url/", "/other_non_existing_url/"];

async fn panics() -> &'static str {
    panic!("handler exploded")
}

fn app_with(responder: ErrorResponder) -> Router {
    let routes = demo_routes().route("/panics", get(panics));

    create_app(AppState::new(responder), routes)
}

fn app<const N: usize>(templates: [(&str, &str); N]) -> Router {
    app_with(ErrorResponder::new(
        ErrorTemplates::from_templates(templates).unwrap(),
        ReasonPhrases::default(),
    ))
}

async fn get_page(
    app: Router,
    request: Request<Body>,
) -> (StatusCode, Option<HeaderValue>, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response.headers().get(CONTENT_TYPE).cloned();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();

    (
        status,
        content_type,
        String::from_utf8(bytes.to_vec()).unwrap(),
    )
}

async fn get_uri(app: Router, uri: &str) -> (StatusCode, Option<HeaderValue>, String) {
    get_page(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn page_not_found() {
    for url in NON_EXISTING_URLS {
        let (status, _, body) = get_uri(app([]), url).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Not Found"));
        assert!(body.contains(url), "{body} should mention {url}");
    }
}

#[tokio::test]
async fn request_path_in_404_template() {
    let (status, _, body) = get_uri(
        app([("404.html", "[{{ request_path }}]")]),
        "/a%20b/%3Cx%3E",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    // Template autoescaping also encodes `/`, unlike the built-in page.
    assert_eq!(body, "[&#x2f;a b&#x2f;&lt;x&gt;]");
}

#[tokio::test]
async fn csrf_token_in_404() {
    let templates = [("404.html", "token={{ csrf_token }}")];

    for url in NON_EXISTING_URLS {
        let (_, _, body) = get_uri(app(templates), url).await;
        let token = body.trim_start_matches("token=");

        assert!(!token.is_empty());
        assert_ne!(token, "NOTPROVIDED");
    }

    let request = Request::builder()
        .uri("/non_existing_url/")
        .header(COOKIE, "csrftoken=fromcookie42")
        .body(Body::empty())
        .unwrap();
    let (_, _, body) = get_page(app(templates), request).await;

    assert_eq!(body, "token=fromcookie42");
}

#[tokio::test]
async fn server_error() {
    let (status, _, body) = get_uri(app([]), "/server_error").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("<h1>INTERNAL SERVER ERROR (500)</h1>"));
}

#[tokio::test]
async fn custom_templates() {
    let templates = [
        ("404.html", "This is a test template for a 404 error."),
        ("500.html", "This is a test template for a 500 error."),
    ];

    for (code, url) in [(404, "/non_existing_url/"), (500, "/server_error")] {
        let (status, _, body) = get_uri(app(templates), url).await;

        assert_eq!(status.as_u16(), code);
        assert!(body.contains(&format!("test template for a {code} error")));
    }
}

#[tokio::test]
async fn default_content_type_is_text_html() {
    let responder = || {
        ErrorResponder::new(ErrorTemplates::empty(), ReasonPhrases::default())
            .with_default_content_type(HeaderValue::from_static("text/xml"))
    };

    for url in [
        "/raises400",
        "/raises403",
        "/non_existing_url/",
        "/server_error",
    ] {
        let (_, content_type, _) = get_uri(app_with(responder()), url).await;

        assert_eq!(content_type.unwrap(), "text/html", "content type of {url}");
    }
}

#[tokio::test]
async fn templates_use_default_content_type() {
    let responder = ErrorResponder::new(
        ErrorTemplates::from_templates([("403.html", "<denied/>")]).unwrap(),
        ReasonPhrases::default(),
    )
    .with_default_content_type(HeaderValue::from_static("text/xml"));

    let (status, content_type, body) = get_uri(app_with(responder), "/raises403").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(content_type.unwrap(), "text/xml");
    assert_eq!(body, "<denied/>");
}

#[tokio::test]
async fn client_errors() {
    let (status, _, body) = get_uri(app([]), "/raises4xx/405").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body.contains("<h1>METHOD NOT ALLOWED (405)</h1>"));

    let (status, _, body) = get_uri(app([]), "/raises4xx/404").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<h1>NOT FOUND (404)</h1>"));
}

#[tokio::test]
async fn client_error_template() {
    let (status, _, body) = get_uri(
        app([("405.html", "This is a test template for 405.")]),
        "/raises4xx/405",
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(body.contains("test template for 405"));
}

#[tokio::test]
async fn server_errors() {
    let (status, _, body) = get_uri(app([]), "/raises5xx/500").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("<h1>INTERNAL SERVER ERROR (500)</h1>"));

    let (status, _, body) = get_uri(app([]), "/raises5xx/507").await;

    assert_eq!(status, StatusCode::INSUFFICIENT_STORAGE);
    assert!(body.contains("<h1>INSUFFICIENT STORAGE (507)</h1>"));
}

#[tokio::test]
async fn server_error_template() {
    let (status, _, body) = get_uri(
        app([("500.html", "This is a test template for 500.")]),
        "/raises5xx/500",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("test template for 500"));
}

#[tokio::test]
async fn panicking_handler_gets_server_error_page() {
    let (status, content_type, body) = get_uri(app([]), "/panics").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.unwrap(), "text/html");
    assert!(body.contains("<h1>INTERNAL SERVER ERROR (500)</h1>"));

    let (status, _, body) = get_uri(
        app([("500.html", "This is a test template for a 500 error.")]),
        "/panics",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "This is a test template for a 500 error.");
}

#[tokio::test]
async fn unusable_view_type_is_a_plain_server_error() {
    for url in ["/raises4xx/abc", "/raises5xx/42", "/raises5xx/599"] {
        let (status, _, body) = get_uri(app([]), url).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "status of {url}");
        assert_eq!(body, "Something went wrong...");
    }
}
