// ABOUTME: HTTP integration tests for the web frontend routes
// ABOUTME: Live and degraded page renders, template failures, static assets, and unknown paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::{http::StatusCode, routing::get, Json, Router};
use helpers::{
    axum_test::AxumTestRequest,
    fixtures::{
        closed_port_url, spawn_data_service, spawn_router, spawn_stalling_backend, static_tree,
        web_router, web_router_with,
    },
};
use portfolio_site::web::TemplateSet;
use serde_json::json;
use std::time::{Duration, Instant};

const HOME_BANNER: &str = "Some data could not be loaded from the API. Please try again later.";
const SERVICES_BANNER: &str = "Unable to load services from the API.";
const ABOUT_BANNER: &str = "Unable to load profile information from the API.";

#[tokio::test]
async fn test_pages_render_live_data() {
    let api = spawn_data_service().await;
    let assets = static_tree();

    let home = AxumTestRequest::get("/")
        .send(web_router(&api, &assets))
        .await
        .assert_status(StatusCode::OK);
    assert!(home
        .header("content-type")
        .unwrap()
        .starts_with("text/html"));
    let home = home.text();
    assert!(home.contains("Tosin Femi"));
    assert!(home.contains("Kubernetes &amp; Platform Engineering"));
    assert!(!home.contains(HOME_BANNER));

    let services = AxumTestRequest::get("/services")
        .send(web_router(&api, &assets))
        .await
        .assert_status(StatusCode::OK)
        .text();
    let first = services.find("cloud-architecture").unwrap();
    let last = services.find("observability-reliability").unwrap();
    assert!(first < last);
    assert!(!services.contains(SERVICES_BANNER));

    let about = AxumTestRequest::get("/about")
        .send(web_router(&api, &assets))
        .await
        .assert_status(StatusCode::OK)
        .text();
    assert!(about.contains("Argo CD"));
    assert!(about.contains("Calgary · Remote-friendly"));
    assert!(!about.contains(ABOUT_BANNER));
}

#[tokio::test]
async fn test_unreachable_backend_renders_banners() {
    let api = closed_port_url();
    let assets = static_tree();

    for (uri, banner) in [
        ("/", HOME_BANNER),
        ("/services", SERVICES_BANNER),
        ("/about", ABOUT_BANNER),
    ] {
        let body = AxumTestRequest::get(uri)
            .send(web_router(&api, &assets))
            .await
            .assert_status(StatusCode::OK)
            .text();
        assert!(body.contains(banner), "{uri} is missing its banner");
        assert!(!body.contains("Tosin Femi"), "{uri} shows profile data");
    }
}

#[tokio::test]
async fn test_contact_never_calls_backend() {
    let assets = static_tree();
    let body = AxumTestRequest::get("/contact")
        .send(web_router(&closed_port_url(), &assets))
        .await
        .assert_status(StatusCode::OK)
        .text();
    assert!(body.contains("contact-form"));
    assert!(body.contains("http://localhost:8081/api/contact"));
    assert!(!body.contains("banner-error"));
}

#[tokio::test]
async fn test_partial_failure_keeps_successful_data() {
    let profile = json!({
        "name": "Ada",
        "title": "Engineer",
        "tagline": "t",
        "summary": "s",
        "technologies": ["Rust"],
        "location": "London"
    });
    let api = spawn_router(Router::new().route(
        "/api/profile",
        get(move || {
            let profile = profile.clone();
            async move { Json(profile) }
        }),
    ))
    .await;
    let assets = static_tree();

    let home = AxumTestRequest::get("/")
        .send(web_router(&api, &assets))
        .await
        .assert_status(StatusCode::OK)
        .text();
    assert!(home.contains("Ada"));
    assert!(home.contains(HOME_BANNER));
}

#[tokio::test]
async fn test_malformed_backend_json_degrades() {
    let api = spawn_router(
        Router::new()
            .route("/api/profile", get(|| async { "not json" }))
            .route("/api/services", get(|| async { Json(json!({ "items": [] })) })),
    )
    .await;
    let assets = static_tree();

    let about = AxumTestRequest::get("/about")
        .send(web_router(&api, &assets))
        .await
        .assert_status(StatusCode::OK)
        .text();
    assert!(about.contains(ABOUT_BANNER));
}

#[tokio::test]
async fn test_stalled_backend_is_cut_off_at_fetch_deadline() {
    let api = spawn_stalling_backend(Duration::from_secs(30)).await;
    let assets = static_tree();

    let started = Instant::now();
    let home = AxumTestRequest::get("/")
        .send(web_router(&api, &assets))
        .await
        .assert_status(StatusCode::OK)
        .text();
    let elapsed = started.elapsed();

    assert!(home.contains(HOME_BANNER));
    assert!(
        elapsed >= Duration::from_millis(4900),
        "gave up early after {elapsed:?}"
    );
    assert!(
        elapsed < Duration::from_secs(6),
        "fetches ran past the deadline: {elapsed:?}"
    );
}

#[tokio::test]
async fn test_missing_template_is_500() {
    let templates = TemplateSet::from_sources([("home.html", "<h1>{{ title }}</h1>")]).unwrap();
    let assets = static_tree();

    let response = AxumTestRequest::get("/contact")
        .send(web_router_with(templates, &closed_port_url(), &assets))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Template not found");
}

#[tokio::test]
async fn test_template_execution_error_is_500_without_partial_output() {
    let templates =
        TemplateSet::from_sources([("about.html", "<h1>{{ title }}</h1>{{ profile.name }}")])
            .unwrap();
    let assets = static_tree();

    let response = AxumTestRequest::get("/about")
        .send(web_router_with(templates, &closed_port_url(), &assets))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Internal Server Error");
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let assets = static_tree();
    let response = AxumTestRequest::get("/static/css/style.css")
        .send(web_router(&closed_port_url(), &assets))
        .await
        .assert_status(StatusCode::OK);
    assert!(response.header("content-type").unwrap().starts_with("text/css"));
    assert_eq!(response.text(), "body { color: black; }");
}

#[tokio::test]
async fn test_static_traversal_and_missing_files_are_rejected() {
    let assets = static_tree();
    for uri in [
        "/static/../secret.txt",
        "/static/%2e%2e/secret.txt",
        "/static/missing.css",
        "/static/css/",
    ] {
        let response = AxumTestRequest::get(uri)
            .send(web_router(&closed_port_url(), &assets))
            .await;
        assert_eq!(response.status(), 404, "{uri}");
        assert!(!response.text().contains("do not serve"));
    }
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let assets = static_tree();
    let response = AxumTestRequest::get("/pricing")
        .send(web_router(&closed_port_url(), &assets))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "404 page not found");
}

#[test]
fn test_shipped_templates_cover_every_page() {
    let templates = TemplateSet::load_dir(helpers::fixtures::site_templates_dir()).unwrap();
    assert!(templates
        .missing(["home.html", "services.html", "about.html", "contact.html"])
        .is_empty());
}
