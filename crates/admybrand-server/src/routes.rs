use std::path::Path;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Serves the built site from `static_dir`. Unknown paths get `index.html`
/// with `200 OK` so deep links load the page and the client router decides.
pub fn build_router(static_dir: &Path) -> Router {
    let site = ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!("request", method = %req.method(), uri = %req.uri())
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn site_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("admybrand-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>landing</html>").unwrap();
        std::fs::write(dir.join("style.css"), "body {}").unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let res = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_healthz() {
        let app = build_router(&site_dir("health"));
        assert_eq!(get_body(app, "/healthz").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_serves_index_and_assets() {
        let dir = site_dir("assets");
        let (status, body) = get_body(build_router(&dir), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("landing"));

        let (status, body) = get_body(build_router(&dir), "/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let (status, body) =
            get_body(build_router(&site_dir("fallback")), "/no/such/page").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("landing"));
    }
}
