//! # Core Module
//!
//! 인증 미들웨어와 전략 사이의 계약을 정의합니다.
//!
//! - [`strategy`] - `Strategy`, `Verify` 트레이트와 클로저 어댑터
//! - [`registry`] - 이름 기반 전략 레지스트리

pub mod registry;
pub mod strategy;

pub use registry::*;
pub use strategy::*;
