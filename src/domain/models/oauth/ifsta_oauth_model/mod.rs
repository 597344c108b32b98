//! IFSTA OAuth 모델
//!
//! - [`ifsta_profile`] - 정규화된 사용자 프로필
//! - [`token_grant`] - 토큰 교환 결과와 검증 판정

pub mod ifsta_profile;
pub mod token_grant;

pub use ifsta_profile::*;
pub use token_grant::*;
