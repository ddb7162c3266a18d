use stockroom_core::stock::DEFAULT_LOW_STOCK_THRESHOLD;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except `JWT_SECRET` have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Quantity at or below which an asset appears in the low-stock report.
    pub low_stock_threshold: i64,
    /// First-initialization seed data.
    pub seed: SeedConfig,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

/// Seed data applied once at startup: a default admin account (only when
/// the users table is empty) and an optional fixed category list (inserted
/// idempotently on every start).
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub admin_username: String,
    /// When `None`, no default admin is created.
    pub admin_password: Option<String>,
    pub categories: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LOW_STOCK_THRESHOLD`  | `5`                        |
    /// | `SEED_ADMIN_USERNAME`  | `admin`                    |
    /// | `SEED_ADMIN_PASSWORD`  | (unset: no admin seeded)   |
    /// | `SEED_CATEGORIES`      | (unset: none)              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let low_stock_threshold: i64 = std::env::var("LOW_STOCK_THRESHOLD")
            .unwrap_or_else(|_| DEFAULT_LOW_STOCK_THRESHOLD.to_string())
            .parse()
            .expect("LOW_STOCK_THRESHOLD must be a valid i64");

        let seed = SeedConfig {
            admin_username: std::env::var("SEED_ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("SEED_ADMIN_PASSWORD").ok(),
            categories: std::env::var("SEED_CATEGORIES")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            low_stock_threshold,
            seed,
            jwt,
        }
    }
}
