//! Integration tests for the Axum web server.
//!
//! Each test bootstraps a catalog in a scratch directory and drives the
//! router with `oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use catalog_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use catalog_axum::routes::create_router;
use catalog_core::{CatalogConfig, StorageBackend, content_address};

const BOUNDARY: &str = "catalog-test-boundary";

async fn test_app(dir: &TempDir, backend: StorageBackend) -> Router {
    let config = ServerConfig::new(CatalogConfig::new(backend, dir.path()));
    let ctx = bootstrap(&config).await.unwrap();
    create_router(ctx, &CorsConfig::AllowAll)
}

fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn post_item(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/items")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields, image)))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn root_returns_greeting() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StorageBackend::Json).await;

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["message"], "Hello, world!");
}

#[tokio::test]
async fn posted_items_are_listed_in_order() {
    for backend in [StorageBackend::Json, StorageBackend::Sqlite] {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, backend).await;

        let response = app
            .clone()
            .oneshot(post_item(&[("name", "shirt"), ("category", "fashion")], None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["message"],
            "item received: shirt, fashion, -"
        );

        let response = app
            .clone()
            .oneshot(post_item(
                &[("name", "pot"), ("category", "kitchen")],
                Some(("pot.jpg", &b"pot image"[..])),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let reference = content_address(b"pot image");
        assert_eq!(
            json_body(response).await["message"],
            format!("item received: pot, kitchen, {reference}")
        );

        let response = app.clone().oneshot(get("/items")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 2, "{backend}");
        assert_eq!(items[0]["name"], "shirt");
        assert_eq!(items[0]["image_name"], Value::Null);
        assert_eq!(items[1]["category"], "kitchen");
        assert_eq!(items[1]["image_name"], reference.as_str());

        let response = app.clone().oneshot(get("/items/2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["name"], "pot");

        let response = app
            .oneshot(get(&format!("/image/{reference}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"pot image");
    }
}

#[tokio::test]
async fn out_of_range_item_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StorageBackend::Json).await;

    for uri in [
        "/items/0",
        "/items/1",
        "/items/-4",
        "/items/-9223372036854775808",
        "/items/9223372036854775807",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(json_body(response).await["status"], 404);
    }
}

#[tokio::test]
async fn non_numeric_item_id_is_json_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StorageBackend::Json).await;

    let response = app.oneshot(get("/items/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["status"], 400);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn blank_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StorageBackend::Json).await;

    let response = app
        .clone()
        .oneshot(post_item(&[("name", "  "), ("category", "fashion")], None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/items")).await.unwrap();
    assert_eq!(json_body(response).await["items"], Value::Array(vec![]));
}

#[tokio::test]
async fn non_jpg_upload_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StorageBackend::Json).await;

    let response = app
        .clone()
        .oneshot(post_item(
            &[("name", "pot"), ("category", "kitchen")],
            Some(("pot.png", &b"png bytes"[..])),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/items")).await.unwrap();
    assert_eq!(json_body(response).await["items"], Value::Array(vec![]));
}

#[tokio::test]
async fn image_without_jpg_suffix_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StorageBackend::Json).await;

    let response = app.oneshot(get("/image/x.png")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["message"],
        "Image path does not end with .jpg"
    );
}

#[tokio::test]
async fn encoded_traversal_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StorageBackend::Json).await;

    let response = app
        .oneshot(get("/image/..%2F..%2Fetc%2Fpasswd.jpg"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_image_serves_default() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StorageBackend::Json).await;
    std::fs::write(dir.path().join("images").join("default.jpg"), b"default image").unwrap();

    let response = app.oneshot(get("/image/missing.jpg")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"default image");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig::new(CatalogConfig::new(StorageBackend::Json, dir.path()))
        .with_max_upload_bytes(1024);
    let app = create_router(bootstrap(&config).await.unwrap(), &CorsConfig::AllowAll);

    let large = vec![0u8; 4096];
    let response = app
        .oneshot(post_item(
            &[("name", "pot"), ("category", "kitchen")],
            Some(("pot.jpg", large.as_slice())),
        ))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn cors_allows_configured_front_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig::new(CatalogConfig::new(StorageBackend::Json, dir.path()));
    let app = create_router(bootstrap(&config).await.unwrap(), &config.cors);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/items")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}
