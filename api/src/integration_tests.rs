//! Router-level integration tests
//!
//! Exercise the HTTP surface with axum-test. The application state keeps
//! its production feed source, so these tests stick to routes that never
//! leave the process; timelines with items are covered at the service
//! layer against the in-memory source.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::Value;

    use crate::adapters::HttpFeedSource;
    use crate::app::{FeedUrlPolicy, TimelineService};
    use crate::test_utils::test_config;
    use crate::{app, AppState};

    fn test_server() -> TestServer {
        let config = test_config();
        let source = Arc::new(HttpFeedSource::new(&config).unwrap());
        let policy = FeedUrlPolicy::from_config(&config);
        let timeline_service = Arc::new(TimelineService::new(
            source,
            policy,
            config.max_feeds_per_request,
            config.sanitize_html,
        ));
        let state = AppState {
            timeline_service,
            config,
        };
        TestServer::new(app(state)).unwrap()
    }

    #[tokio::test]
    async fn health_probe_reports_ok() {
        let server = test_server();

        let response = server.get("/healthz").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn timeline_is_empty_without_feeds() {
        let server = test_server();

        let response = server.get("/api/timeline").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["items"], Value::Array(Vec::new()));
        assert!(body["next_cursor"].is_null());
        assert!(body["prev_cursor"].is_null());
    }

    #[tokio::test]
    async fn rejects_out_of_range_limit() {
        let server = test_server();

        let response = server.get("/api/timeline?limit=0").await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Bad request");
    }

    #[tokio::test]
    async fn rejects_non_numeric_limit() {
        let server = test_server();

        let response = server.get("/api/timeline?limit=lots").await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn attaches_security_headers() {
        let server = test_server();

        let response = server.get("/").await;

        let csp = response.header("content-security-policy");
        let csp = csp.to_str().unwrap();
        assert!(csp.contains("default-src 'self'"));
        assert!(csp.contains("script-src 'self'"));
        assert_eq!(response.header("x-content-type-options"), "nosniff");
        assert_eq!(response.header("x-frame-options"), "DENY");
        assert_eq!(response.header("referrer-policy"), "no-referrer");
        assert!(!response
            .header("strict-transport-security")
            .is_empty());
    }

    #[tokio::test]
    async fn page_shell_exposes_expected_elements() {
        let server = test_server();

        let response = server.get("/").await;

        response.assert_status_ok();
        let page = response.text();
        assert!(page.contains(r#"id="feed-form""#));
        assert!(page.contains(r#"id="feeds""#));
        assert!(page.contains(r#"id="timeline""#));
    }

    #[tokio::test]
    async fn serves_view_script() {
        let server = test_server();

        let response = server.get("/static/app.js").await;

        response.assert_status_ok();
        assert!(response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("application/javascript"));
        let script = response.text();
        assert!(script.contains("/api/timeline"));
        assert!(script.contains("preventDefault"));
    }
}
