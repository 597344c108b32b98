use serde::{Deserialize, Serialize};

/// 토큰 교환 결과로 얻은 자격 증명
///
/// 코드 교환은 호스트 프레임워크가 담당하고, 전략은 이 값을 받아
/// 프로필 조회와 사용자 검증을 이어서 수행합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl TokenGrant {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }
}

/// 검증 콜백의 판정 결과
///
/// - `Success(user)`: 애플리케이션 사용자로 인정됨
/// - `Fail`: 자격 증명은 유효하지만 사용자로 인정하지 않음
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome<U> {
    Success(U),
    Fail,
}

impl<U> From<Option<U>> for AuthOutcome<U> {
    fn from(user: Option<U>) -> Self {
        match user {
            Some(user) => AuthOutcome::Success(user),
            None => AuthOutcome::Fail,
        }
    }
}
