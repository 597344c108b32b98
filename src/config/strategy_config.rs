//! # IFSTA Strategy Configuration
//!
//! IFSTA OAuth 전략의 클라이언트 자격 증명과 엔드포인트 설정을 관리합니다.
//!
//! 설정은 두 단계로 나뉩니다.
//!
//! 1. [`IfstaStrategyOptions`] - 호출자가 채우는 입력값 (JSON, 환경 변수, 빌더)
//! 2. [`IfstaStrategyConfig`] - 기본값과 별칭 키가 반영된 불변 설정
//!
//! ## 기본 엔드포인트
//!
//! | 용도 | 기본값 |
//! |------|--------|
//! | 인가 | `https://auth.ifsta.org/dialog/authorize` |
//! | 토큰 | `https://auth.ifsta.org/oauth/token` |
//! | 프로필 | `https://auth.ifsta.org/api/userinfo` |
//!
//! ## 별칭 키
//!
//! 엔드포인트 키는 `authorizationURL`/`authorizationUrl`처럼 두 가지 표기를 모두
//! 받습니다. 둘 다 있으면 대문자 `URL` 표기가 우선하며, 빈 문자열은 지정하지 않은
//! 것으로 취급합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export IFSTA_CLIENT_ID="123-456-789"
//! export IFSTA_CLIENT_SECRET="shhh-its-a-secret"
//! export IFSTA_CALLBACK_URL="https://www.example.net/auth/ifsta/callback"
//!
//! # 선택
//! export IFSTA_AUTHORIZATION_URL="https://auth.ifsta.org/dialog/authorize"
//! export IFSTA_TOKEN_URL="https://auth.ifsta.org/oauth/token"
//! export IFSTA_PROFILE_URL="https://auth.ifsta.org/api/userinfo"
//! export IFSTA_PROFILE_FIELDS="id,displayName,emails"
//! ```

use std::env;
use std::fmt;

use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_AUTHORIZATION_URL: &str = "https://auth.ifsta.org/dialog/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://auth.ifsta.org/oauth/token";
pub const DEFAULT_PROFILE_URL: &str = "https://auth.ifsta.org/api/userinfo";

/// 전략 생성 옵션
///
/// JSON으로 받을 때는 원래 제공자 라이브러리와 같은 키 이름을 사용합니다.
///
/// ```json
/// {
///   "clientID": "123-456-789",
///   "clientSecret": "shhh-its-a-secret",
///   "callbackURL": "https://www.example.net/auth/ifsta/callback",
///   "profileUrl": "https://staging.ifsta.org/api/userinfo"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct IfstaStrategyOptions {
    #[serde(rename = "clientID", default)]
    #[validate(length(min = 1, message = "clientID가 필요합니다"))]
    pub client_id: String,

    #[serde(rename = "clientSecret", default)]
    pub client_secret: String,

    /// 절대 URL 또는 `/auth/ifsta/callback` 같은 경로. 경로는 호스트가 요청 origin 기준으로 해석합니다.
    #[serde(rename = "callbackURL", default)]
    pub callback_url: Option<String>,

    #[serde(rename = "authorizationURL", default)]
    #[validate(url(message = "authorizationURL 형식이 올바르지 않습니다"))]
    pub authorization_url: Option<String>,

    #[serde(rename = "authorizationUrl", default)]
    #[validate(url(message = "authorizationUrl 형식이 올바르지 않습니다"))]
    pub authorization_url_alias: Option<String>,

    #[serde(rename = "tokenURL", default)]
    #[validate(url(message = "tokenURL 형식이 올바르지 않습니다"))]
    pub token_url: Option<String>,

    #[serde(rename = "tokenUrl", default)]
    #[validate(url(message = "tokenUrl 형식이 올바르지 않습니다"))]
    pub token_url_alias: Option<String>,

    #[serde(rename = "profileURL", default)]
    #[validate(url(message = "profileURL 형식이 올바르지 않습니다"))]
    pub profile_url: Option<String>,

    #[serde(rename = "profileUrl", default)]
    #[validate(url(message = "profileUrl 형식이 올바르지 않습니다"))]
    pub profile_url_alias: Option<String>,

    /// 요청할 프로필 필드 목록. 저장만 하고 조회 로직에서는 사용하지 않습니다.
    #[serde(rename = "profileFields", default)]
    pub profile_fields: Option<Vec<String>>,
}

impl IfstaStrategyOptions {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            ..Default::default()
        }
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = Some(url.into());
        self
    }

    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    pub fn profile_url(mut self, url: impl Into<String>) -> Self {
        self.profile_url = Some(url.into());
        self
    }

    pub fn profile_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// 프로세스 환경 변수에서 옵션을 읽습니다.
    ///
    /// # Errors
    ///
    /// `IFSTA_CLIENT_ID`가 없으면 `AppError::ConfigError`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 옵션을 읽습니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
        };

        Ok(Self {
            client_id: required("IFSTA_CLIENT_ID")?,
            client_secret: lookup("IFSTA_CLIENT_SECRET").unwrap_or_default(),
            callback_url: lookup("IFSTA_CALLBACK_URL"),
            authorization_url: lookup("IFSTA_AUTHORIZATION_URL"),
            token_url: lookup("IFSTA_TOKEN_URL"),
            profile_url: lookup("IFSTA_PROFILE_URL"),
            profile_fields: lookup("IFSTA_PROFILE_FIELDS").map(|fields| {
                fields
                    .split(',')
                    .map(str::trim)
                    .filter(|field| !field.is_empty())
                    .map(str::to_string)
                    .collect()
            }),
            ..Default::default()
        })
    }

    /// 기본값과 별칭을 반영해 불변 설정을 만듭니다.
    ///
    /// # Errors
    ///
    /// 필수값 누락, 잘못된 URL 형식이면 `AppError::ValidationError`
    pub fn resolve(self) -> AppResult<IfstaStrategyConfig> {
        let options = self.without_blank_values();

        options
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        Ok(IfstaStrategyConfig {
            client_id: options.client_id,
            client_secret: options.client_secret,
            callback_url: options.callback_url,
            authorization_url: options
                .authorization_url
                .or(options.authorization_url_alias)
                .unwrap_or_else(|| DEFAULT_AUTHORIZATION_URL.to_string()),
            token_url: options
                .token_url
                .or(options.token_url_alias)
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            profile_url: options
                .profile_url
                .or(options.profile_url_alias)
                .unwrap_or_else(|| DEFAULT_PROFILE_URL.to_string()),
            profile_fields: options.profile_fields,
        })
    }

    fn without_blank_values(mut self) -> Self {
        for slot in [
            &mut self.callback_url,
            &mut self.authorization_url,
            &mut self.authorization_url_alias,
            &mut self.token_url,
            &mut self.token_url_alias,
            &mut self.profile_url,
            &mut self.profile_url_alias,
        ] {
            if slot.as_deref().is_some_and(|value| value.trim().is_empty()) {
                *slot = None;
            }
        }
        self
    }
}

/// 해석이 끝난 불변 전략 설정
#[derive(Clone, PartialEq)]
pub struct IfstaStrategyConfig {
    client_id: String,
    client_secret: String,
    callback_url: Option<String>,
    authorization_url: String,
    token_url: String,
    profile_url: String,
    profile_fields: Option<Vec<String>>,
}

impl IfstaStrategyConfig {
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    pub fn authorization_url(&self) -> &str {
        &self.authorization_url
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub fn profile_url(&self) -> &str {
        &self.profile_url
    }

    pub fn profile_fields(&self) -> Option<&[String]> {
        self.profile_fields.as_deref()
    }
}

// clientSecret은 로그에 남지 않도록 가린다
impl fmt::Debug for IfstaStrategyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IfstaStrategyConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("callback_url", &self.callback_url)
            .field("authorization_url", &self.authorization_url)
            .field("token_url", &self.token_url)
            .field("profile_url", &self.profile_url)
            .field("profile_fields", &self.profile_fields)
            .finish()
    }
}
