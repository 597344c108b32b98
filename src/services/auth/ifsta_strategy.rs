//! # IFSTA OAuth 2.0 인증 전략
//!
//! IFSTA 계정으로 사용자를 인증하는 OAuth 2.0 전략입니다.
//!
//! 전략이 직접 하는 일은 세 가지입니다.
//!
//! 1. IFSTA 엔드포인트 기본값 제공 (인가, 토큰, 프로필)
//! 2. 액세스 토큰으로 프로필 엔드포인트를 한 번 조회
//! 3. 응답을 [`Profile`]로 정규화한 뒤 애플리케이션 검증 콜백에 전달
//!
//! 리다이렉트, 코드 교환, state 검증은 호스트 프레임워크의 몫입니다.
//!
//! ## Authorization Code Flow
//!
//! ```text
//! ┌──────────┐            ┌──────────────┐             ┌──────────────┐
//! │  브라우저  │            │   호스트 앱    │             │  IFSTA OAuth  │
//! └──────────┘            └──────────────┘             └──────────────┘
//!      │ 1. GET /auth/ifsta/login │                            │
//!      ├─────────────────────────►│ authorization_url(state)   │
//!      │ 2. 302 Redirect          │                            │
//!      │◄─────────────────────────┤                            │
//!      │ 3. 로그인 / 동의          │                            │
//!      ├──────────────────────────┼───────────────────────────►│
//!      │ 4. callback?code=...     │                            │
//!      ├─────────────────────────►│ 5. 코드 교환 (호스트 담당)   │
//!      │                          ├───────────────────────────►│
//!      │                          │ 6. authenticate(grant)     │
//!      │                          │    └ GET /api/userinfo     │
//!      │                          ├───────────────────────────►│
//!      │                          │    └ verify(tokens, profile)
//!      │ 7. 세션 / 응답            │                            │
//!      │◄─────────────────────────┤                            │
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use ifsta_oauth_strategy::config::IfstaStrategyOptions;
//! use ifsta_oauth_strategy::core::VerifyFn;
//! use ifsta_oauth_strategy::services::auth::IfstaStrategy;
//!
//! let options = IfstaStrategyOptions::new("123-456-789", "shhh-its-a-secret")
//!     .callback_url("https://www.example.net/auth/ifsta/callback");
//!
//! let strategy = IfstaStrategy::with_defaults(
//!     options,
//!     VerifyFn(|_access, _refresh, profile: Profile| async move {
//!         Ok::<_, AppError>(profile.id_string())
//!     }),
//! )?;
//! ```

use async_trait::async_trait;

use crate::config::{IfstaStrategyConfig, IfstaStrategyOptions};
use crate::core::strategy::{Strategy, Verify};
use crate::domain::models::oauth::ifsta_oauth_model::{AuthOutcome, Profile, TokenGrant};
use crate::errors::{AppError, AppResult};
use crate::services::auth::oauth2_client::{OAuth2Client, ReqwestOAuth2Client};
use crate::services::auth::profile_parser;

/// 제공자 이름. 정규화된 프로필의 `provider` 값으로도 쓰입니다.
pub const PROVIDER_NAME: &str = "ifsta";

/// IFSTA 인증 전략
///
/// 설정은 생성 시점에 확정되며 이후 변경되지 않습니다.
/// `Arc`로 감싸 여러 요청에서 동시에 사용할 수 있습니다.
pub struct IfstaStrategy<C, V> {
    config: IfstaStrategyConfig,
    client: C,
    verify: V,
}

impl<V: Verify> IfstaStrategy<ReqwestOAuth2Client, V> {
    /// `reqwest` 기반 기본 클라이언트로 전략을 만듭니다.
    pub fn with_defaults(options: IfstaStrategyOptions, verify: V) -> AppResult<Self> {
        Self::new(options, ReqwestOAuth2Client::new()?, verify)
    }
}

impl<C: OAuth2Client, V: Verify> IfstaStrategy<C, V> {
    /// 옵션을 해석(기본값, 별칭 반영)하고 전략을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필수 옵션 누락 또는 잘못된 엔드포인트 URL
    pub fn new(options: IfstaStrategyOptions, client: C, verify: V) -> AppResult<Self> {
        let config = options.resolve()?;
        log::debug!("IFSTA 전략 생성: {:?}", config);

        Ok(Self {
            config,
            client,
            verify,
        })
    }

    pub fn config(&self) -> &IfstaStrategyConfig {
        &self.config
    }
}

#[async_trait]
impl<C, V> Strategy for IfstaStrategy<C, V>
where
    C: OAuth2Client,
    V: Verify,
{
    type User = V::User;

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    /// 인가 엔드포인트로 보낼 리다이렉트 URL을 만듭니다.
    ///
    /// `state` 생성과 검증은 호출자가 담당합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let url = strategy.authorization_url(&state, Some("profile email"));
    /// // https://auth.ifsta.org/dialog/authorize?response_type=code&client_id=...&state=...
    /// ```
    fn authorization_url(&self, state: &str, scope: Option<&str>) -> String {
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.config.client_id()),
        ];
        if let Some(callback_url) = self.config.callback_url() {
            params.push(("redirect_uri", callback_url));
        }
        if let Some(scope) = scope {
            params.push(("scope", scope));
        }
        params.push(("state", state));

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let base = self.config.authorization_url();
        let separator = if base.contains('?') { '&' } else { '?' };

        format!("{}{}{}", base, separator, query_string)
    }

    async fn user_profile(&self, access_token: &str) -> AppResult<Profile> {
        let body = self
            .client
            .get(self.config.profile_url(), access_token)
            .await
            .map_err(|e| AppError::internal_oauth("Failed to fetch user profile", e))?;

        // 파싱 실패 시 본문은 에러에 싣지 않는다
        let mut profile = profile_parser::parse_str(&body)
            .map_err(|_| AppError::ProfileParseError("Failed to parse user profile".to_string()))?;

        profile.provider = Some(PROVIDER_NAME.to_string());
        profile.raw = Some(body);

        Ok(profile)
    }

    async fn authenticate(&self, grant: TokenGrant) -> AppResult<AuthOutcome<V::User>> {
        let profile = self.user_profile(&grant.access_token).await?;

        let user = self
            .verify
            .verify(&grant.access_token, grant.refresh_token.as_deref(), profile)
            .await?;

        if user.is_none() {
            log::info!("IFSTA 사용자 검증 거부");
        }

        Ok(user.into())
    }
}
