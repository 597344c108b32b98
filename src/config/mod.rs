//! # Configuration Module
//!
//! 전략과 데모 호스트의 설정을 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`strategy_config`] - IFSTA 클라이언트 자격 증명, 엔드포인트 기본값과 별칭
//! - [`data_config`] - 실행 환경, 서버 바인딩 주소
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use ifsta_oauth_strategy::config::{IfstaStrategyOptions, ServerConfig};
//!
//! let config = IfstaStrategyOptions::from_env()?.resolve()?;
//! println!("profile endpoint: {}", config.profile_url());
//!
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export IFSTA_CLIENT_ID="your-client-id"
//!
//! # 선택
//! export IFSTA_CLIENT_SECRET="your-client-secret"
//! export IFSTA_CALLBACK_URL="http://localhost:8080/api/v1/auth/ifsta/callback"
//! export ENVIRONMENT="development"  # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! ```

pub mod data_config;
pub mod strategy_config;

pub use data_config::*;
pub use strategy_config::*;
