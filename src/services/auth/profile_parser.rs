//! # 프로필 정규화
//!
//! IFSTA 원본 응답을 [`Profile`]로 정규화합니다.
//!
//! 정규화 정책은 **허용 목록 복사** 하나뿐입니다.
//! [`PROFILE_FIELDS`](crate::domain::models::oauth::ifsta_oauth_model::PROFILE_FIELDS)에 있는 키만 이름 그대로 복사하고, 나머지 키는 버립니다.
//! 값은 변환하지 않으며 누락된 키에 기본값을 채우지도 않습니다.
//!
//! 입력이 JSON 문자열이면 그 내용을 한 번 더 JSON으로 해석한 뒤 정규화합니다.
//! 객체가 아닌 입력(`null`, 숫자, 배열 등)은 모든 필드가 비어 있는 프로필이 됩니다.
//!
//! ```rust,ignore
//! let profile = profile_parser::parse_str(r#"{"id":"42","extra":true}"#)?;
//! assert_eq!(profile.id, Some(json!("42")));
//! ```

use serde_json::Value;

use crate::domain::models::oauth::ifsta_oauth_model::Profile;

/// 원본 페이로드를 정규화합니다.
///
/// # Errors
///
/// 문자열 입력이 올바른 JSON이 아니면 `serde_json::Error`를 그대로 돌려줍니다.
pub fn parse(json: Value) -> Result<Profile, serde_json::Error> {
    let json = match json {
        Value::String(text) => serde_json::from_str(&text)?,
        other => other,
    };

    Ok(project(&json))
}

/// 문자열 페이로드를 JSON으로 해석한 뒤 정규화합니다.
///
/// 해석 결과가 다시 JSON 문자열이면 [`parse`]가 한 번 더 해석합니다.
pub fn parse_str(body: &str) -> Result<Profile, serde_json::Error> {
    parse(serde_json::from_str(body)?)
}

fn project(json: &Value) -> Profile {
    let field = |key: &str| json.get(key).cloned();

    Profile {
        id: field("id"),
        display_name: field("displayName"),
        family_name: field("family_name"),
        given_name: field("given_name"),
        name: field("name"),
        preferred_username: field("preferredUsername"),
        username: field("username"),
        emails: field("emails"),
        groups: field("groups"),
        photos: field("photos"),
        api_token: field("apiToken"),
        expires: field("expires"),
        provider: None,
        raw: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::oauth::ifsta_oauth_model::PROFILE_FIELDS;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "id": "42",
            "displayName": "Jane Doe",
            "family_name": "Doe",
            "given_name": "Jane",
            "name": { "formatted": "Jane Q. Doe" },
            "preferredUsername": "jane",
            "username": "jdoe",
            "emails": [{ "value": "jane@example.org", "primary": true }],
            "groups": ["instructors", "admins"],
            "photos": [{ "value": "https://cdn.example.org/jane.png" }],
            "apiToken": "api-123",
            "expires": 1735689600,
            "role": "superuser",
            "internal": { "score": 9 }
        })
    }

    #[test]
    fn test_superset_input_keeps_exactly_allowed_fields() {
        let input = full_payload();
        let profile = parse(input.clone()).unwrap();
        let output = serde_json::to_value(&profile).unwrap();
        let output = output.as_object().unwrap();

        assert_eq!(output.len(), PROFILE_FIELDS.len());
        for key in PROFILE_FIELDS {
            assert_eq!(output.get(key), input.get(key), "field {key}");
        }
        assert!(!output.contains_key("role"));
        assert!(!output.contains_key("internal"));
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let profile = parse(json!({ "id": "42", "username": "jdoe" })).unwrap();

        assert_eq!(profile.id, Some(json!("42")));
        assert_eq!(profile.username, Some(json!("jdoe")));
        assert_eq!(profile.display_name, None);
        assert_eq!(profile.emails, None);
        assert_eq!(profile.expires, None);

        let output = serde_json::to_value(&profile).unwrap();
        assert_eq!(output, json!({ "id": "42", "username": "jdoe" }));
    }

    #[test]
    fn test_explicit_null_is_copied_as_is() {
        let profile = parse(json!({ "displayName": null })).unwrap();
        assert_eq!(profile.display_name, Some(Value::Null));
    }

    #[test]
    fn test_values_are_not_coerced() {
        let profile = parse(json!({ "id": 42, "groups": "single" })).unwrap();

        assert_eq!(profile.id, Some(json!(42)));
        assert_eq!(profile.groups, Some(json!("single")));
    }

    #[test]
    fn test_string_encoded_payload_is_parsed_first() {
        let encoded = Value::String(r#"{"id":"42","displayName":"Jane Doe"}"#.to_string());
        let profile = parse(encoded).unwrap();

        assert_eq!(profile.id, Some(json!("42")));
        assert_eq!(profile.display_name, Some(json!("Jane Doe")));
    }

    #[test]
    fn test_double_encoded_body_is_unwrapped() {
        let body = r#""{\"id\":\"42\",\"username\":\"jdoe\"}""#;
        let profile = parse_str(body).unwrap();

        assert_eq!(profile.id, Some(json!("42")));
        assert_eq!(profile.username, Some(json!("jdoe")));
        assert_eq!(profile, parse(json!(r#"{"id":"42","username":"jdoe"}"#)).unwrap());
    }

    #[test]
    fn test_double_encoded_invalid_json_fails() {
        assert!(parse_str(r#""{not valid json""#).is_err());
    }

    #[test]
    fn test_projection_covers_exactly_the_allow_list() {
        let input: serde_json::Map<String, Value> = PROFILE_FIELDS
            .iter()
            .enumerate()
            .map(|(i, key)| (key.to_string(), json!(i)))
            .collect();

        let output = serde_json::to_value(parse(Value::Object(input.clone())).unwrap()).unwrap();
        let output = output.as_object().unwrap();

        let mut projected: Vec<&str> = output.keys().map(String::as_str).collect();
        let mut allowed = PROFILE_FIELDS.to_vec();
        projected.sort_unstable();
        allowed.sort_unstable();
        assert_eq!(projected, allowed);

        for (key, value) in &input {
            assert_eq!(output.get(key), Some(value), "field {key}");
        }
    }

    #[test]
    fn test_invalid_json_string_fails() {
        assert!(parse(Value::String("{not valid json".to_string())).is_err());
        assert!(parse_str("{not valid json").is_err());
        assert!(parse_str("").is_err());
    }

    #[test]
    fn test_non_object_input_yields_empty_profile() {
        for input in [Value::Null, json!(17), json!(true), json!(["id", "42"])] {
            let profile = parse(input).unwrap();
            assert_eq!(profile, Profile::default());
        }
        assert_eq!(parse_str("null").unwrap(), Profile::default());
    }

    #[test]
    fn test_parser_never_sets_adapter_fields() {
        let profile = parse(json!({ "provider": "other", "_raw": "x" })).unwrap();

        assert_eq!(profile.provider, None);
        assert_eq!(profile.raw, None);
    }
}
