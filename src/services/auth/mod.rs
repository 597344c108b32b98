//! 인증 서비스 모듈
//!
//! IFSTA OAuth 2.0 전략과 그 구성 요소를 제공합니다.
//!
//! # Features
//!
//! - IFSTA 엔드포인트 기본값과 인가 URL 생성
//! - 액세스 토큰 기반 프로필 조회 (`reqwest`)
//! - 허용 목록 기반 프로필 정규화
//!
//! # Examples
//!
//! ```rust,ignore
//! use ifsta_oauth_strategy::services::auth::{IfstaStrategy, profile_parser};
//!
//! let profile = strategy.user_profile(&access_token).await?;
//! let offline = profile_parser::parse_str(saved_body)?;
//! ```

pub mod ifsta_strategy;
pub mod oauth2_client;
pub mod profile_parser;

pub use ifsta_strategy::*;
pub use oauth2_client::*;
