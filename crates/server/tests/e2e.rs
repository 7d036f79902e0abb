use std::net::SocketAddr;

use configs::SiteConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::{routes, startup::build_cors, state::AppState};

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server(site: SiteConfig) -> anyhow::Result<TestApp> {
    let app = routes::build_router(AppState::in_memory(), build_cors(), &site);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new() })
}

#[tokio::test]
async fn videos_over_http() -> anyhow::Result<()> {
    let app = start_server(SiteConfig::default()).await?;

    let res = app
        .client
        .post(app.url("/api/videos"))
        .json(&json!({"youtubeUrl": "https://www.youtube.com/watch?v=dQw4w9WgXcQ", "description": " Mmanwu festival "}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(
        res.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let created: Value = res.json().await?;
    assert_eq!(created["description"], "Mmanwu festival");

    let listed: Value = app.client.get(app.url("/api/videos")).send().await?.json().await?;
    assert_eq!(listed, json!([created]));

    let res = app
        .client
        .delete(app.url("/api/videos"))
        .query(&[("id", created["id"].as_str().unwrap())])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let listed: Value = app.client.get(app.url("/api/videos")).send().await?.json().await?;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn contact_over_http() -> anyhow::Result<()> {
    let app = start_server(SiteConfig::default()).await?;

    let res = app
        .client
        .post(app.url("/api/contact"))
        .json(&json!({"name": "Ada", "email": "ada@example.com", "subject": "Visit", "message": "When are you open?"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let receipt: Value = res.json().await?;
    let id = receipt["id"].as_str().unwrap().to_string();

    let res = app.client.put(app.url("/api/contact")).json(&json!({"id": id, "read": true})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["read"], true);
    assert_eq!(updated["name"], "Ada");

    let res = app.client.patch(app.url("/api/contact")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::METHOD_NOT_ALLOWED);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Method not allowed");
    Ok(())
}

#[tokio::test]
async fn custom_prefix_and_static_fallback() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("heritage-site-e2e-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join("index.html"), "<h1>Igbo heritage</h1>").await?;

    let site = SiteConfig { frontend_dir: dir.to_string_lossy().into_owned(), api_prefix: "/v1".into() };
    let app = start_server(site).await?;

    let res = app.client.get(app.url("/v1/videos")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let doc: Value = app.client.get(app.url("/v1/openapi.json")).send().await?.json().await?;
    let paths = doc["paths"].as_object().expect("paths object");
    assert!(paths.contains_key("/v1/videos") && paths.contains_key("/v1/contact"));
    assert!(!paths.contains_key("/api/videos"));

    // client-side routes resolve to the SPA entry point
    let res = app.client.get(app.url("/gallery/masks")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("Igbo heritage"));

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}
