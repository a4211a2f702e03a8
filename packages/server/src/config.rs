use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_JWT_TTL_SECS: i64 = 30 * 24 * 60 * 60;
/// Ten years
const MAX_JWT_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_ttl_secs: i64,
    pub allowed_origins: Vec<String>,
    pub admin_seed: AdminSeed,
}

/// Credentials for the administrator account created on first boot
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            email: "admin@restaurant.com".to_string(),
            password: "admin123".to_string(),
            name: "System Administrator".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = AdminSeed::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "campus-eats".to_string()),
            jwt_ttl_secs: match env::var("JWT_TTL_SECS") {
                Ok(raw) => parse_ttl(&raw)?,
                Err(_) => DEFAULT_JWT_TTL_SECS,
            },
            allowed_origins: parse_origins(env::var("ALLOWED_ORIGINS").ok().as_deref()),
            admin_seed: AdminSeed {
                email: env::var("ADMIN_EMAIL").unwrap_or(defaults.email),
                password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.password),
                name: env::var("ADMIN_NAME").unwrap_or(defaults.name),
            },
        })
    }
}

/// Credential lifetime in seconds: positive and at most `MAX_JWT_TTL_SECS`
fn parse_ttl(raw: &str) -> Result<i64> {
    let secs: i64 = raw
        .trim()
        .parse()
        .context("JWT_TTL_SECS must be a number of seconds")?;
    if !(1..=MAX_JWT_TTL_SECS).contains(&secs) {
        bail!(
            "JWT_TTL_SECS must be between 1 and {} seconds, got {}",
            MAX_JWT_TTL_SECS,
            secs
        );
    }
    Ok(secs)
}

/// Split a comma-separated origin list, falling back to the local frontend ports
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let origins: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
            "http://localhost:3001".to_string(),
            "http://127.0.0.1:3001".to_string(),
        ]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ttl_accepts_positive_seconds() {
        assert_eq!(parse_ttl("3600").unwrap(), 3600);
        assert_eq!(parse_ttl(" 60 ").unwrap(), 60);
    }

    #[test]
    fn test_parse_ttl_rejects_out_of_range() {
        for raw in ["0", "-5", "9000000000000", "abc", ""] {
            assert!(parse_ttl(raw).is_err(), "input: {:?}", raw);
        }
    }

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins(Some("http://a.test, http://b.test ,,"));
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_parse_origins_defaults_to_local_frontend() {
        let origins = parse_origins(None);
        assert!(origins.contains(&"http://localhost:3000".to_string()));
        assert_eq!(origins.len(), 4);
    }
}
