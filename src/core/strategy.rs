//! # Strategy 트레이트
//!
//! 인증 미들웨어가 기대하는 전략 인터페이스입니다.
//!
//! 전략은 제공자별 설정과 인증 마지막 단계(프로필 조회 → 사용자 검증)를 캡슐화합니다.
//! 리다이렉트와 코드 교환은 호스트가 처리하고, 액세스 토큰을 얻은 뒤에
//! [`Strategy::authenticate`]를 호출합니다.
//!
//! ```text
//! 호스트                         Strategy                      제공자 API
//!   │ authenticate(grant)           │                              │
//!   ├──────────────────────────────►│ user_profile(access_token)   │
//!   │                               ├─────────────────────────────►│
//!   │                               │◄─────────────────────────────┤
//!   │                               │ verify(tokens, profile)      │
//!   │◄──────────────────────────────┤                              │
//!   │ AuthOutcome / AppError        │                              │
//! ```

use std::future::Future;

use async_trait::async_trait;

use crate::domain::models::oauth::ifsta_oauth_model::{AuthOutcome, Profile, TokenGrant};
use crate::errors::AppResult;

#[async_trait]
pub trait Strategy: Send + Sync {
    /// 검증 콜백이 돌려주는 애플리케이션 사용자 타입
    type User: Send;

    /// 미들웨어에 등록될 전략 이름
    fn name(&self) -> &str;

    /// 제공자 인가 화면으로 보낼 리다이렉트 URL
    fn authorization_url(&self, state: &str, scope: Option<&str>) -> String;

    /// 액세스 토큰으로 제공자의 사용자 프로필을 조회합니다.
    async fn user_profile(&self, access_token: &str) -> AppResult<Profile>;

    /// 프로필을 조회한 뒤 검증 콜백에 넘겨 최종 판정을 돌려줍니다.
    async fn authenticate(&self, grant: TokenGrant) -> AppResult<AuthOutcome<Self::User>>;
}

/// 애플리케이션이 제공하는 검증 콜백
///
/// `Ok(Some(user))`는 인증 성공, `Ok(None)`은 인증 거부,
/// `Err`는 검증 중 발생한 오류입니다.
#[async_trait]
pub trait Verify: Send + Sync {
    type User: Send;

    async fn verify(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
        profile: Profile,
    ) -> AppResult<Option<Self::User>>;
}

/// 클로저를 [`Verify`]로 쓰기 위한 어댑터
///
/// ```rust,ignore
/// let verify = VerifyFn(|_access, _refresh, profile: Profile| async move {
///     Ok::<_, AppError>(profile.id_string())
/// });
/// ```
pub struct VerifyFn<F>(pub F);

#[async_trait]
impl<F, Fut, U> Verify for VerifyFn<F>
where
    F: Fn(String, Option<String>, Profile) -> Fut + Send + Sync,
    Fut: Future<Output = AppResult<Option<U>>> + Send + 'static,
    U: Send + 'static,
{
    type User = U;

    async fn verify(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
        profile: Profile,
    ) -> AppResult<Option<U>> {
        (self.0)(
            access_token.to_string(),
            refresh_token.map(str::to_string),
            profile,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use serde_json::json;

    #[actix_web::test]
    async fn test_verify_fn_passes_arguments_through() {
        let verify = VerifyFn(|access: String, refresh: Option<String>, profile: Profile| async move {
            Ok::<_, AppError>(Some(format!(
                "{}|{}|{}",
                access,
                refresh.unwrap_or_default(),
                profile.id_string().unwrap_or_default()
            )))
        });
        let profile = Profile { id: Some(json!("42")), ..Default::default() };

        let user = verify.verify("at", Some("rt"), profile).await.unwrap();
        assert_eq!(user.as_deref(), Some("at|rt|42"));
    }

    #[actix_web::test]
    async fn test_verify_fn_propagates_errors() {
        let verify = VerifyFn(|_: String, _: Option<String>, _: Profile| async move {
            Err::<Option<()>, _>(AppError::InternalError("user store offline".to_string()))
        });

        let result = verify.verify("at", None, Profile::default()).await;
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
