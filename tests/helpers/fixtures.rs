// ABOUTME: Live-server and filesystem fixtures for web frontend integration tests
// ABOUTME: Spawns a real data service on a loopback port and builds throwaway template/static trees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Portfolio Site Contributors

use axum::Router;
use portfolio_site::{
    api::ApiRoutes,
    web::{BackendClient, TemplateSet, WebRoutes, WebState},
};
use std::{fs, path::Path, time::Duration};
use tempfile::TempDir;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

/// Templates shipped with the site
pub fn site_templates_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

/// Start the data service on `127.0.0.1:0` and return its base URL
///
/// The server task runs until the test's runtime shuts down.
pub async fn spawn_data_service() -> String {
    spawn_router(ApiRoutes::routes()).await
}

/// Serve any router on a loopback port and return its base URL
#[allow(dead_code)]
pub async fn spawn_router(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a loopback port nothing listens on
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Static asset tree with one stylesheet, plus a secret file beside it
pub fn static_tree() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let assets = root.path().join("static");
    fs::create_dir_all(assets.join("css")).unwrap();
    fs::write(assets.join("css/style.css"), "body { color: black; }").unwrap();
    fs::write(root.path().join("secret.txt"), "do not serve").unwrap();
    root
}

/// Frontend router using the shipped templates and a backend at `api_base_url`
pub fn web_router(api_base_url: &str, static_root: &TempDir) -> Router {
    let templates = TemplateSet::load_dir(site_templates_dir()).unwrap();
    web_router_with(templates, api_base_url, static_root)
}

/// Frontend router using an explicit template set
pub fn web_router_with(
    templates: TemplateSet,
    api_base_url: &str,
    static_root: &TempDir,
) -> Router {
    let backend = BackendClient::new(api_base_url).unwrap();
    WebRoutes::routes(
        WebState::new(templates, backend),
        &static_root.path().join("static"),
    )
}

/// Backend that never finishes answering
///
/// `/api/profile` is read and then left without any response. Every other
/// path gets status and headers plus the first bytes of a JSON body that
/// never completes. Connections stay open for `hold`.
pub async fn spawn_stalling_backend(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let request = read_request_head(&mut stream).await;
                if !request.starts_with("GET /api/profile ") {
                    let partial = "HTTP/1.1 200 OK\r\n\
                                   Content-Type: application/json\r\n\
                                   Content-Length: 4096\r\n\r\n\
                                   {\"items\":[";
                    let _ = stream.write_all(partial.as_bytes()).await;
                    let _ = stream.flush().await;
                }
                tokio::time::sleep(hold).await;
                drop(stream);
            });
        }
    });
    format!("http://{addr}")
}

async fn read_request_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0_u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}
