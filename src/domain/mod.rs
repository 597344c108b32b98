//! # Domain Module
//!
//! 전략이 주고받는 도메인 타입을 정의합니다.
//!
//! ```text
//! domain/
//! └── models/
//!     ├── auth/
//!     │   └── authenticated_user.rs ← 검증된 사용자, Bearer 추출기
//!     └── oauth/
//!         └── ifsta_oauth_model/
//!             ├── ifsta_profile.rs  ← 정규화된 프로필
//!             └── token_grant.rs    ← 토큰, 검증 결과
//! ```

pub mod models;

pub use models::*;
