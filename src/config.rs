// region:    --- Imports
use crate::error::{ApiError, Result};
use std::env;
use std::time::Duration;

// endregion: --- Imports

const DEFAULT_TIMEOUT_SECS: u64 = 10;

// region:    --- Client Config
/// 원격 경매 서비스 접속 설정
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 환경 변수에서 설정 로드 (.env 파일이 있으면 함께 로드)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("AUCTION_API_URL")
            .map_err(|_| ApiError::Config("AUCTION_API_URL must be set".to_string()))?;
        let api_token = env::var("AUCTION_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        let timeout_secs = match env::var("AUCTION_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ApiError::Config(format!("AUCTION_API_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// endregion: --- Client Config
