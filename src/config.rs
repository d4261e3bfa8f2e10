use std::env;

const DEV_DATABASE_URL: &str = "sqlite://entradas.db?mode=rwc";

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub database_url: String,
    pub static_dir: String,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map(|url| normalize_database_url(&url))
            .unwrap_or_else(|_| DEV_DATABASE_URL.to_string());

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }
}

/// Some hosting providers still hand out the legacy `postgres://` prefix;
/// rewrite it to the scheme the driver expects.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}
