use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::ifsta_oauth_model::Profile;

/// IFSTA 프로필로 인증된 사용자
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 제공자 측 사용자 ID
    pub user_id: String,

    /// 인증 제공자 이름
    pub provider: String,

    pub username: Option<String>,

    pub display_name: Option<String>,

    /// 그룹 멤버십 (문자열 항목만)
    pub groups: Vec<String>,
}

impl AuthenticatedUser {
    /// 프로필에서 사용자 정보를 만듭니다. 식별자가 없으면 `None`
    pub fn from_profile(profile: &Profile) -> Option<Self> {
        let text = |value: &Option<serde_json::Value>| {
            value.as_ref().and_then(|v| v.as_str()).map(str::to_string)
        };

        Some(Self {
            user_id: profile.id_string()?,
            provider: profile.provider.clone().unwrap_or_default(),
            username: text(&profile.username),
            display_name: text(&profile.display_name),
            groups: profile
                .groups
                .as_ref()
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

/// `Authorization: Bearer <token>` 헤더에서 꺼낸 액세스 토큰
#[derive(Debug, Clone, PartialEq)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn parse(header: &str) -> Option<Self> {
        let (scheme, token) = header.trim().split_once(' ')?;
        let token = token.trim();

        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return None;
        }

        Some(BearerToken(token.to_string()))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(BearerToken::parse);

        match token {
            Some(token) => ready(Ok(token)),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "Bearer 액세스 토큰이 필요합니다"
            ))),
        }
    }
}
