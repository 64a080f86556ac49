// region:    --- Imports
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// endregion: --- Imports

// region:    --- Service Error Body
/// 원격 서비스 오류 응답 본문 `{"error": "...", "code": "..."}`
#[derive(Debug, Default, Deserialize)]
struct ServiceErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// endregion: --- Service Error Body

// region:    --- Api Client
/// 원격 경매 서비스 HTTP 클라이언트
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl ApiClient {
    /// 클라이언트 생성
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ApiError::Config(format!("invalid base url {:?}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "base url cannot carry a path: {}",
                base_url
            )));
        }
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url,
            api_token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// GET 요청 후 JSON 응답 해석
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.get_with_query(segments, &[]).await
    }

    /// 쿼리 파라미터를 붙인 GET 요청
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut url = self.url(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        debug!("{:<12} --> GET {}", "Client", url.path());
        let request = self.authorize(self.http.get(url));
        let response = Self::check(request.send().await?).await?;
        Self::decode(response).await
    }

    /// POST 요청 (JSON 본문), 응답 본문은 해석하지 않는다
    pub async fn post<B: Serialize + ?Sized>(&self, segments: &[&str], body: &B) -> Result<()> {
        let url = self.url(segments)?;
        debug!("{:<12} --> POST {}", "Client", url.path());
        let request = self.authorize(self.http.post(url).json(body));
        Self::check(request.send().await?).await?;
        Ok(())
    }

    /// 기본 URL 뒤에 세그먼트를 하나씩 percent-encode 해서 붙인다.
    /// "/", "?", "%" 는 세그먼트 안에서 인코딩되고, "." 과 ".." 은 거절한다.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(ApiError::InvalidPath(bad.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// 토큰이 설정되어 있으면 Bearer 헤더 추가
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// 2xx 이외의 응답을 서비스 오류로 변환
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                debug!(
                    "{:<12} --> 오류 응답 본문 읽기 실패 status: {}, error: {}",
                    "Client", status, e
                );
                String::new()
            }
        };
        // JSON 이 아닌 본문은 그대로 메시지로 사용
        let (code, message) = match serde_json::from_str::<ServiceErrorBody>(&text) {
            Ok(body) => (body.code, body.error.unwrap_or_default()),
            Err(_) => (None, text.trim().to_string()),
        };

        warn!(
            "{:<12} --> 서비스 오류 status: {}, code: {:?}",
            "Client", status, code
        );
        Err(ApiError::Service {
            status,
            code,
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// endregion: --- Api Client
