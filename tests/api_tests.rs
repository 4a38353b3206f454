use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use sitelook::api::create_router;
use sitelook::error::FetchError;
use sitelook::service::{FetchedDocument, Fetcher, HtmlExtractor, SearchService};

const SEARCH_PAGE: &str = r#"<html><body>
<input name="q" value="rust">
<div id="search"><div class="g"><div>
  <a href="/url?q=https://www.rust-lang.org/&amp;sa=U"><h3>Rust</h3></a>
  <div data-sncf="1">Rust homepage</div>
</div></div></div>
</body></html>"#;

struct StaticFetcher {
    status: u16,
    body: &'static str,
}

impl Fetcher for StaticFetcher {
    async fn fetch(&self, _url: &str) -> Result<FetchedDocument, FetchError> {
        Ok(FetchedDocument {
            status: self.status,
            body: self.body.to_string(),
        })
    }
}

async fn get(status: u16, body: &'static str, uri: &str) -> (StatusCode, Vec<u8>) {
    let service = SearchService::new(
        StaticFetcher { status, body },
        HtmlExtractor,
        "https://search.example/search",
    );
    let router = create_router(Arc::new(service), "static");

    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_empty_query_is_rejected() {
    let (status, _) = get(200, SEARCH_PAGE, "/api/search?q=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(200, SEARCH_PAGE, "/api/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_search_type_is_rejected() {
    let (status, body) = get(200, SEARCH_PAGE, "/api/search?q=rust&tbm=nws").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8(body).unwrap().contains("nws"));
}

#[tokio::test]
async fn test_search_page_json() {
    let (status, body) = get(200, SEARCH_PAGE, "/api/search?q=rust&start=abc").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["type"], "search");
    assert_eq!(json["search_term"], "rust");
    assert_eq!(json["search_results"][0]["url"], "https://www.rust-lang.org/");
    assert_eq!(json["search_results"][0]["url_title"], "rust-lang.org");
    assert_eq!(json["navigation"]["image_search_href"], "/api/search?q=rust&tbm=isch");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_no_results_is_an_empty_page() {
    let (status, body) = get(200, SEARCH_PAGE, "/api/search?q=rust&tbm=isch").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["type"], "images");
    assert_eq!(json["search_term"], "rust");
    assert!(json["image_results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_captcha() {
    let (status, body) = get(429, "", "/api/search?q=rust").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["type"], "captcha");
    assert_eq!(json["search_redirect_url"], "https://search.example/search?q=rust");
}

#[tokio::test]
async fn test_upstream_failure() {
    let (status, _) = get(500, "", "/api/search?q=rust").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (status, _) = get(200, "<html><body></body></html>", "/api/search?q=rust").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
