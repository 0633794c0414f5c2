pub mod endpoints;
pub mod paths;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

pub struct Env {
    pub api_url: String,
    pub api_timeout_ms: u64,
    pub jwt_secret: Option<String>,
    pub database_url: Option<String>,
    pub admin_email: String,
    pub ip: String,
    pub port: u16,
}

impl Env {
    fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_timeout_ms = lookup("API_TIMEOUT")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_MS);

        let jwt_secret = lookup("SECRET_KEY").filter(|s| !s.is_empty());
        let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());

        let admin_email = lookup("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string());

        let ip = lookup("IP").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").and_then(|v| v.parse::<u16>().ok()).unwrap_or(3000);

        Env { api_url, api_timeout_ms, jwt_secret, database_url, admin_email, ip, port }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
