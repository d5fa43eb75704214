//! In-process tests of the full router.

use axum::Router;
use axum::body::Body;
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vapps::domain::config::{SiteConfig, SslConfig};
use vapps_server::Server;

fn app() -> Router {
    Server::builder().build().expect("server builds").router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn home_is_served_in_the_default_locale() {
    let response = app().oneshot(get("/")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers().get(SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default();
    assert!(cookie.starts_with("NEXT_LOCALE=en;"));

    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"en\">"));
}

#[tokio::test]
async fn accept_language_redirects_to_prefixed_path() {
    let request = Request::builder()
        .uri("/apps/viona?ref=ad")
        .header(ACCEPT_LANGUAGE, "tr-TR,tr;q=0.9,en;q=0.5")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).and_then(|v| v.to_str().ok()), Some("/tr/apps/viona?ref=ad"));
}

#[tokio::test]
async fn cookie_wins_over_accept_language() {
    let request = Request::builder()
        .uri("/")
        .header(COOKIE, "NEXT_LOCALE=en")
        .header(ACCEPT_LANGUAGE, "tr")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none(), "cookie already matches");
}

#[tokio::test]
async fn default_prefix_redirects_and_remembers_choice() {
    let request = Request::builder()
        .uri("/en/apps/qr-sessions")
        .header(COOKIE, "NEXT_LOCALE=tr")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).and_then(|v| v.to_str().ok()), Some("/apps/qr-sessions"));
    let cookie = response.headers().get(SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default();
    assert!(cookie.starts_with("NEXT_LOCALE=en;"));
}

#[tokio::test]
async fn default_prefix_redirect_never_leaves_the_site() {
    for (uri, expected) in
        [("/en//evil.example/phish", "/evil.example/phish"), ("/en/\\evil.example/", "/evil.example/")]
    {
        let response = app().oneshot(get(uri)).await.expect("response");

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
        assert_eq!(response.headers().get(LOCATION).and_then(|v| v.to_str().ok()), Some(expected), "{uri}");
    }
}

#[tokio::test]
async fn prefixed_app_page_renders_localized() {
    let response = app().oneshot(get("/tr/apps/viona")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"tr\">"));
    assert!(html.contains("Viona - Mükemmel randevunuzu alın | Various Apps"));
}

#[tokio::test]
async fn unknown_app_is_not_found() {
    let response = app().oneshot(get("/apps/does-not-exist")).await.expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("App Not Found | Various Apps"));
}

#[tokio::test]
async fn sitemap_and_robots_are_served() {
    let sitemap = app().oneshot(get("/sitemap.xml")).await.expect("response");
    assert_eq!(sitemap.status(), StatusCode::OK);
    assert_eq!(
        sitemap.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/xml; charset=utf-8")
    );
    let xml = body_text(sitemap).await;
    assert!(xml.contains("<loc>https://various-apps.com/tr/apps/posture-pal</loc>"));
    assert!(!xml.contains("/privacy</loc>"));

    let robots = body_text(app().oneshot(get("/robots.txt")).await.expect("response")).await;
    assert!(robots.contains("Sitemap: https://various-apps.com/sitemap.xml"));
}

#[tokio::test]
async fn content_api_lists_apps() {
    let response = app().oneshot(get("/api/apps")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let apps: serde_json::Value = serde_json::from_str(&body_text(response).await).expect("json");
    let ids: Vec<_> = apps.as_array().expect("array").iter().filter_map(|a| a["slug"].as_str()).collect();
    assert_eq!(ids, ["viona", "viona-partner", "qr-sessions", "posture-pal", "ai-poster"]);

    let missing = app().oneshot(get("/api/apps/nope")).await.expect("response");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_skips_negotiation() {
    let request = Request::builder()
        .uri("/health")
        .header(ACCEPT_LANGUAGE, "tr")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn static_files_come_from_the_static_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("favicon.ico"), b"icon").expect("write");

    let app = Server::builder().static_dir(dir.path()).build().expect("server builds").router();

    let response = app.clone().oneshot(get("/favicon.ico")).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "icon");

    let missing = app.oneshot(get("/missing.png")).await.expect("response");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_registered_slices() {
    let response = app().oneshot(get("/health")).await.expect("response");
    let health: serde_json::Value = serde_json::from_str(&body_text(response).await).expect("json");

    assert_eq!(health["status"], "up");
    assert_eq!(health["defaultLocale"], "en");
    assert_eq!(health["slices"], serde_json::json!(["Catalog", "I18n", "Seo"]));
}

#[test]
fn missing_tls_files_fail_the_build() {
    let mut config = SiteConfig::default();
    config.server.ssl = Some(SslConfig { cert: "/nonexistent/cert.pem".into(), key: "/nonexistent/key.pem".into() });

    let err = Server::builder().config(config).build().expect_err("tls files are missing");
    assert!(err.to_string().contains("SSL certificate not found"));
}
