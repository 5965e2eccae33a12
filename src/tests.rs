#[cfg(test)]
mod integration_tests {
    use crate::handlers::health::HealthResponse;
    use crate::test_utils::test_utils::{setup_static_dir, setup_test_app, APP_JS, INDEX_HTML};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check() {
        let dir = setup_static_dir();
        let server = TestServer::new(setup_test_app(&dir)).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let dir = setup_static_dir();
        let server = TestServer::new(setup_test_app(&dir)).unwrap();

        let response = server.get("/app.js").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), APP_JS);
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = setup_static_dir();
        let server = TestServer::new(setup_test_app(&dir)).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_deep_link_falls_back_to_index() {
        let dir = setup_static_dir();
        let server = TestServer::new(setup_test_app(&dir)).unwrap();

        let response = server
            .get("/dashboard/acme/finance/incoming")
            .add_query_param("page", 3)
            .add_query_param("limit", 20)
            .add_query_param("sorting", "-created_at")
            .add_query_param("type", "payouts")
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_missing_asset_falls_back_to_index() {
        let dir = setup_static_dir();
        let server = TestServer::new(setup_test_app(&dir)).unwrap();

        let response = server.get("/assets/missing.css").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }
}
