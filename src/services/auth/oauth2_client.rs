//! # OAuth 2.0 클라이언트 계층
//!
//! 액세스 토큰으로 보호된 리소스를 조회하는 HTTP 클라이언트 추상화입니다.
//! 전략은 구체적인 HTTP 라이브러리 대신 [`OAuth2Client`] 트레이트에만 의존하므로,
//! 테스트에서는 목(mock) 구현으로 손쉽게 교체할 수 있습니다.
//!
//! ## 기본 구현
//!
//! [`ReqwestOAuth2Client`]는 `reqwest`를 사용하며 다음과 같이 동작합니다.
//!
//! - 액세스 토큰은 `Authorization: Bearer <token>` 헤더로 전달
//! - 2xx 이외의 응답은 [`OAuthClientError::Status`]로 변환 (본문 포함)
//! - 네트워크 실패는 [`OAuthClientError::Request`]로 변환
//! - 재시도, 캐싱 없음
//!
//! ```rust,ignore
//! let client = ReqwestOAuth2Client::new()?;
//! let body = client.get("https://auth.ifsta.org/api/userinfo", &access_token).await?;
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::errors::{AppResult, ErrorContext};

/// OAuth 클라이언트 전송 에러
#[derive(Error, Debug)]
pub enum OAuthClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

/// 액세스 토큰 기반 GET 요청을 수행하는 클라이언트
///
/// 한 번의 호출은 정확히 한 번의 요청을 의미하며, 성공 시 응답 본문을
/// 가공하지 않은 문자열 그대로 돌려줍니다.
#[async_trait]
pub trait OAuth2Client: Send + Sync {
    async fn get(&self, url: &str, access_token: &str) -> Result<String, OAuthClientError>;
}

/// `reqwest` 기반 기본 클라이언트
#[derive(Debug, Clone)]
pub struct ReqwestOAuth2Client {
    http: reqwest::Client,
}

impl ReqwestOAuth2Client {
    pub fn new() -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl OAuth2Client for ReqwestOAuth2Client {
    async fn get(&self, url: &str, access_token: &str) -> Result<String, OAuthClientError> {
        log::debug!("OAuth 보호 리소스 요청: {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(OAuthClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
