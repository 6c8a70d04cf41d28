use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// "claude" or "fake".
    pub provider: String,
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    pub recipe_search_key: Option<String>,
    pub photo_search_key: Option<String>,
    pub default_image: String,
    /// Minimum spacing between primary-provider requests.
    pub min_request_interval_ms: u64,
    /// Fixed backoff between retries of a failed lookup.
    pub retry_backoff_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub llm: LlmConfig,
    pub images: ImageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "freshkeep".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "freshkeep-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
            refresh_ttl_minutes: std::env::var("JWT_REFRESH_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24 * 14),
        };
        let llm = LlmConfig {
            provider: std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "fake".into()),
            api_key: std::env::var("LLM_API_KEY").ok(),
            model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| "claude-3-5-haiku-20241022".into()),
        };
        let images = ImageConfig {
            recipe_search_key: std::env::var("RECIPE_SEARCH_API_KEY").ok(),
            photo_search_key: std::env::var("PHOTO_SEARCH_ACCESS_KEY").ok(),
            default_image: std::env::var("DEFAULT_RECIPE_IMAGE")
                .unwrap_or_else(|_| "/images/recipes/default.jpg".into()),
            min_request_interval_ms: std::env::var("IMAGE_REQUEST_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(350),
            retry_backoff_ms: std::env::var("IMAGE_RETRY_BACKOFF_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(500),
        };
        Ok(Self {
            database_url,
            jwt,
            llm,
            images,
        })
    }
}
