use anyhow::{Context, Result, anyhow};

/// Settings for the outbound translation proxy. The upstream call is bounded
/// by `timeout_ms`; on expiry the caller falls back to the untranslated text.
#[derive(Debug, Clone)]
pub struct TranslateConfig {
    pub api_url: String,
    pub timeout_ms: u64,
}

impl TranslateConfig {
    pub fn init() -> Result<Self> {
        let api_url = std::env::var("TRANSLATE_API_URL")
            .unwrap_or_else(|_| "https://libretranslate.com/translate".to_string());

        let timeout_ms = std::env::var("TRANSLATE_TIMEOUT_MS")
            .unwrap_or_else(|_| "2000".to_string())
            .parse::<u64>()
            .context("TRANSLATE_TIMEOUT_MS must be a valid u64 integer")?;

        Ok(Self {
            api_url,
            timeout_ms,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub translate: TranslateConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let translate = TranslateConfig::init().context("failed translate config")?;

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            translate,
        })
    }
}
