//! API 라우트 설정 모듈
//!
//! 등록된 인증 전략을 HTTP로 노출하는 데모 라우트와 헬스체크를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(registry))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/auth/{strategy}/login` - 인가 화면으로 리다이렉트 (`?scope=` 선택)
/// - `GET /api/v1/auth/{strategy}/me` - Bearer 토큰 사용자 조회
///
/// # Examples
///
/// ```bash
/// curl -i http://localhost:8080/api/v1/auth/ifsta/login
///
/// curl http://localhost:8080/api/v1/auth/ifsta/me \
///   -H "Authorization: Bearer <IFSTA access token>"
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login_redirect)
            .service(handlers::auth::current_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Response Format
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "ifsta_oauth_strategy",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "strategies": ["ifsta"]
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(
    registry: web::Data<handlers::auth::AppRegistry>,
) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "strategies": registry.names(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_lists_registered_strategies() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(handlers::auth::AppRegistry::new()))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "ifsta_oauth_strategy");
        assert_eq!(body["strategies"], json!([]));
    }
}
