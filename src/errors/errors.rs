//! 전략 전역에서 사용하는 에러 시스템
//!
//! IFSTA OAuth 전략의 모든 실패를 하나의 `AppError`로 모읍니다.
//! `thiserror`로 메시지를 정의하고, 호스트 애플리케이션이 그대로 HTTP 응답으로
//! 돌려줄 수 있도록 `actix_web::ResponseError`를 구현합니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 변형 | 원인 |
//! |------|------|------|
//! | 전송 에러 | [`AppError::InternalOAuthError`] | 프로필 엔드포인트 요청 실패 (네트워크, non-2xx) |
//! | 파싱 에러 | [`AppError::ProfileParseError`] | 응답 본문이 유효한 JSON이 아님 |
//! | 설정 에러 | [`AppError::ConfigError`] | 필수 환경 변수 누락 등 |
//! | 검증 에러 | [`AppError::ValidationError`] | 전략 옵션 값이 올바르지 않음 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use ifsta_oauth_strategy::errors::{AppError, AppResult};
//!
//! async fn load_profile(token: &str) -> AppResult<Profile> {
//!     let profile = strategy.user_profile(token).await?;
//!     Ok(profile)
//! }
//! ```

use thiserror::Error;

use crate::services::auth::oauth2_client::OAuthClientError;

#[derive(Error, Debug)]
pub enum AppError {
    /// OAuth 클라이언트 계층에서 발생한 전송 실패
    ///
    /// 원래 원인은 `source()`로 그대로 꺼낼 수 있습니다.
    #[error("{message}")]
    InternalOAuthError {
        message: String,
        #[source]
        source: OAuthClientError,
    },

    /// 프로필 응답 본문을 JSON으로 해석하지 못함 (본문은 첨부하지 않음)
    #[error("{0}")]
    ProfileParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 전송 에러를 `InternalOAuthError`로 감쌉니다.
    pub fn internal_oauth(message: impl Into<String>, source: OAuthClientError) -> Self {
        AppError::InternalOAuthError {
            message: message.into(),
            source,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalOAuthError { .. } | AppError::ProfileParseError(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
