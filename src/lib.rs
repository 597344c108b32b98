//! IFSTA OAuth 2.0 인증 전략
//!
//! IFSTA 계정으로 사용자를 인증하는 OAuth 2.0 전략 라이브러리입니다.
//! 엔드포인트 기본값을 제공하고, 액세스 토큰으로 IFSTA 프로필을 조회해
//! 정규화한 뒤 애플리케이션 검증 콜백에 넘깁니다.
//!
//! # Features
//!
//! - **기본 엔드포인트**: `auth.ifsta.org` 인가/토큰/프로필 URL, 옵션으로 덮어쓰기
//! - **프로필 정규화**: 허용 목록 필드만 보존하는 [`Profile`](domain::models::oauth::ifsta_oauth_model::Profile)
//! - **전략 레지스트리**: 이름 기반 등록과 인증 디스패치
//! - **데모 호스트**: Actix-web 로그인 리다이렉트, 현재 사용자 조회
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 데모 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ StrategyRegistry│ ← 이름으로 전략 선택
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  IfstaStrategy  │ ← 프로필 조회, 정규화, 검증 콜백
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  OAuth2Client   │ ← Bearer 토큰 GET (reqwest)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use ifsta_oauth_strategy::config::IfstaStrategyOptions;
//! use ifsta_oauth_strategy::core::{Strategy, VerifyFn};
//! use ifsta_oauth_strategy::services::auth::IfstaStrategy;
//!
//! let options = IfstaStrategyOptions::new("client-id", "client-secret")
//!     .callback_url("https://app.example.org/auth/ifsta/callback");
//! let strategy = IfstaStrategy::with_defaults(options, VerifyFn(|_, _, profile| async move {
//!     Ok::<_, AppError>(profile.id_string())
//! }))?;
//!
//! let outcome = strategy.authenticate(TokenGrant::new(access_token)).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
