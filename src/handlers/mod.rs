//! HTTP 요청 핸들러 모듈
//!
//! - [`auth`] - 인증 전략 로그인 리다이렉트, 현재 사용자 조회

pub mod auth;
