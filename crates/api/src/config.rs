/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on post-shutdown cleanup in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `8001`    |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins =
            parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
        }
    }

    /// Whether the CORS layer should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string (`DATABASE_URL`, required).
    pub url: String,
    /// Optional database name (`DB_NAME`) overriding the one in the URL.
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let name = std::env::var("DB_NAME")
            .ok()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self { url, name }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(origins: &[&str]) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: origins.iter().map(|o| o.to_string()).collect(),
            request_timeout_secs: 30,
            shutdown_timeout_secs: 30,
        }
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" https://a.example , ,https://b.example"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn wildcard_allows_any_origin() {
        assert!(config_with(&["*"]).allows_any_origin());
        assert!(config_with(&[]).allows_any_origin());
        assert!(!config_with(&["https://consorcio.example"]).allows_any_origin());
    }
}
