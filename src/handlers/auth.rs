//! Authentication HTTP Handlers
//!
//! 등록된 OAuth 전략을 HTTP 엔드포인트로 노출하는 핸들러입니다.
//! 전략 이름을 경로로 받으므로 `ifsta` 외의 전략도 같은 핸들러로 처리합니다.
//!
//! # Endpoints
//!
//! - `GET /api/v1/auth/{strategy}/login` - 제공자 인가 화면으로 302 리다이렉트
//! - `GET /api/v1/auth/{strategy}/me` - Bearer 토큰으로 프로필 조회 후 사용자 검증

use actix_web::{get, http::header, web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::registry::StrategyRegistry;
use crate::domain::models::auth::{AuthenticatedUser, BearerToken};
use crate::domain::models::oauth::ifsta_oauth_model::{AuthOutcome, TokenGrant};
use crate::errors::AppError;

pub type AppRegistry = StrategyRegistry<AuthenticatedUser>;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub scope: Option<String>,
}

#[get("/{strategy}/login")]
pub async fn login_redirect(
    registry: web::Data<AppRegistry>,
    path: web::Path<String>,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let strategy = registry.get(&name)?;

    // state 저장과 검증은 세션 계층이 담당
    let state = Uuid::new_v4().simple().to_string();
    let location = strategy.authorization_url(&state, query.scope.as_deref());

    log::debug!("{} 인가 화면으로 리다이렉트", name);

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish())
}

#[get("/{strategy}/me")]
pub async fn current_user(
    registry: web::Data<AppRegistry>,
    path: web::Path<String>,
    token: BearerToken,
) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();

    match registry.authenticate(&name, TokenGrant::new(token.0)).await? {
        AuthOutcome::Success(user) => {
            log::info!("{} 사용자 인증 성공: {}", name, user.user_id);
            Ok(HttpResponse::Ok().json(user))
        }
        AuthOutcome::Fail => {
            log::warn!("{} 사용자 인증 거부", name);
            Err(AppError::AuthenticationError(
                "사용자 검증에 실패했습니다".to_string(),
            ))
        }
    }
}
