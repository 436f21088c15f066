use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the remote record store REST endpoint, or `memory` to
    /// keep records in-process.
    pub store_url: String,
    /// Top-level key all member documents live under.
    pub store_namespace: String,
    /// Optional auth token appended to every store request.
    pub store_auth_token: Option<String>,
    pub cors_origins: Vec<String>,
    pub static_files_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a number"),
            store_url: env::var("STORE_URL")
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),
            store_namespace: env::var("STORE_NAMESPACE")
                .unwrap_or_else(|_| "members".to_string()),
            store_auth_token: env::var("STORE_AUTH_TOKEN").ok(),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            static_files_path: env::var("STATIC_FILES_PATH").ok(),
        })
    }
}
