//! # IFSTA 사용자 프로필 모델
//!
//! IFSTA `userinfo` 엔드포인트 응답을 정규화한 프로필입니다.
//!
//! 제공자가 응답 스키마를 보장하지 않으므로 각 필드는 타입을 강제하지 않는
//! `Option<serde_json::Value>`로 보관합니다. 응답에 없는 필드는 `None`이며
//! 직렬화 시 키 자체가 생략됩니다 (`null`로 채우지 않음).
//!
//! ## 필드 매핑
//!
//! | 필드 | JSON 키 |
//! |------|---------|
//! | `id` | `id` |
//! | `display_name` | `displayName` |
//! | `family_name` | `family_name` |
//! | `given_name` | `given_name` |
//! | `name` | `name` |
//! | `preferred_username` | `preferredUsername` |
//! | `username` | `username` |
//! | `emails` | `emails` |
//! | `groups` | `groups` |
//! | `photos` | `photos` |
//! | `api_token` | `apiToken` |
//! | `expires` | `expires` |
//!
//! 여기에 전략이 채우는 `provider`, `_raw` 두 필드가 더해집니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 정규화 대상 필드의 JSON 키 목록 (허용 목록)
pub const PROFILE_FIELDS: [&str; 12] = [
    "id",
    "displayName",
    "family_name",
    "given_name",
    "name",
    "preferredUsername",
    "username",
    "emails",
    "groups",
    "photos",
    "apiToken",
    "expires",
];

/// 정규화된 IFSTA 사용자 프로필
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    #[serde(rename = "preferredUsername", default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,

    /// 이메일 레코드 목록 (형식은 제공자 정의)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Value>,

    /// 그룹 멤버십 목록
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Value>,

    /// 사진 레코드 목록
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Value>,

    #[serde(rename = "apiToken", default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<Value>,

    /// 만료 표시 (제공자가 준 값 그대로)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<Value>,

    /// 프로필을 만든 제공자 이름, 전략이 `"ifsta"`로 설정
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// 파싱 전 원본 응답 본문 (진단용)
    #[serde(rename = "_raw", default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl Profile {
    /// 식별자를 문자열로 돌려줍니다. 숫자 ID도 문자열로 변환합니다.
    pub fn id_string(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted_when_serialized() {
        let profile = Profile {
            id: Some(json!("42")),
            provider: Some("ifsta".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value, json!({ "id": "42", "provider": "ifsta" }));
    }

    #[test]
    fn test_serialized_keys_follow_provider_names() {
        let profile = Profile {
            display_name: Some(json!("Jane Doe")),
            preferred_username: Some(json!("jane")),
            api_token: Some(json!("tok")),
            raw: Some("{}".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["displayName"], "Jane Doe");
        assert_eq!(value["preferredUsername"], "jane");
        assert_eq!(value["apiToken"], "tok");
        assert_eq!(value["_raw"], "{}");
    }

    #[test]
    fn test_id_string() {
        let text = Profile { id: Some(json!("abc")), ..Default::default() };
        let number = Profile { id: Some(json!(7)), ..Default::default() };
        let object = Profile { id: Some(json!({ "v": 1 })), ..Default::default() };

        assert_eq!(text.id_string().as_deref(), Some("abc"));
        assert_eq!(number.id_string().as_deref(), Some("7"));
        assert_eq!(object.id_string(), None);
        assert_eq!(Profile::default().id_string(), None);
    }
}
