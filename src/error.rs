// region:    --- Imports
use reqwest::StatusCode;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Api Error
/// 원격 경매 서비스 호출 중 발생하는 오류
#[derive(Debug, Error)]
pub enum ApiError {
    /// 네트워크/전송 오류
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 서비스가 요청을 거절한 경우 (2xx 이외의 응답)
    #[error("service rejected request ({status}): {message}")]
    Service {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    /// 응답 본문 해석 실패
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 설정 오류
    #[error("invalid configuration: {0}")]
    Config(String),

    /// 경로 세그먼트로 쓸 수 없는 id (빈 값, "." 또는 "..")
    #[error("invalid path segment: {0:?}")]
    InvalidPath(String),
}

impl ApiError {
    /// 서비스 오류 코드 (있는 경우)
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Service { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// 401/403 응답 여부 (로그인하지 않았거나 토큰이 거절됨)
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Service { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

// endregion: --- Api Error
