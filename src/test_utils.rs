#[cfg(test)]
pub mod test_utils {
    use crate::config::ServerConfig;
    use crate::router::create_router;
    use axum::Router;
    use std::fs;
    use tempfile::TempDir;

    pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body><div id=\"app\"></div></body></html>";
    pub const APP_JS: &str = "console.log('orgfin');";

    /// Static directory with a minimal frontend bundle. Keep the returned
    /// `TempDir` alive for as long as the server runs.
    pub fn setup_static_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create static directory");
        fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
        fs::write(dir.path().join("app.js"), APP_JS).expect("Failed to write app.js");
        dir
    }

    /// Create test app serving `dir`
    pub fn setup_test_app(dir: &TempDir) -> Router {
        let config = ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            static_dir: dir.path().to_path_buf(),
            index_file: "index.html".to_string(),
            request_timeout_secs: 30,
        };
        create_router(&config)
    }
}
