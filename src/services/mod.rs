//! 서비스 계층 모듈
//!
//! 제공자와 통신하고 응답을 가공하는 로직을 담습니다.

pub mod auth;
