//! # OAuth Domain Models
//!
//! OAuth 2.0 제공자와 주고받는 데이터 모델입니다.
//! 제공자별 모델은 하위 모듈로 분리합니다.

pub mod ifsta_oauth_model;

pub use ifsta_oauth_model::*;
