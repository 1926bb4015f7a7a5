//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 계정, 인증 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 계정 CRUD 및 부분 업데이트 API 엔드포인트
//! - 로그인/토큰 발급 API 엔드포인트
//! - 토큰 제시 여부 기반 접근 제어 미들웨어 적용
//! - 헬스체크 엔드포인트
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용합니다:
//!
//! ## 인증 불필요 (Public 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/auth")
//!         .service(handlers::auth::local_login)      // 로그인 자체는 인증 불필요
//! );
//! ```
//!
//! ## 인증 필요 (유효한 토큰 제시)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/profile")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::accounts::update_profile)
//! );
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_account_routes(cfg);
    configure_auth_routes(cfg);
}

/// 계정 관련 라우트를 설정합니다
///
/// 등록/조회/삭제는 토큰 없이 호출할 수 있습니다 (서비스 연산이
/// 토큰을 요구하지 않음). 프로필/주소/전화번호 업데이트는 유효한
/// 토큰 제시가 필요하며, 토큰은 호출자 식별 외의 권한 검사에는
/// 쓰이지 않습니다.
///
/// # Route Groups
///
/// ## Public 라우트 (인증 불필요)
/// - `POST /api/v1/accounts` - 계정 등록 (회원가입)
/// - `GET /api/v1/accounts/{email}` - 계정 조회
/// - `DELETE /api/v1/accounts/{email}` - 계정 삭제
///
/// ## Protected 라우트 (토큰 제시 필요)
/// - `PUT /api/v1/profile` - 본인 프로필 부분 업데이트
/// - `PUT /api/v1/addresses/{address_id}` - 주소 부분 업데이트
/// - `PUT /api/v1/phones/{phone_id}` - 전화번호 부분 업데이트
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    // Public routes
    cfg.service(
        web::scope("/api/v1/accounts")
            .service(handlers::accounts::create_account)
            .service(handlers::accounts::find_account)
            .service(handlers::accounts::delete_account)
    );

    // Protected - 본인 프로필
    cfg.service(
        web::scope("/api/v1/profile")
            .wrap(AuthMiddleware::required())
            .service(handlers::accounts::update_profile)
    );

    // Protected - 주소/전화번호 단독 업데이트
    cfg.service(
        web::scope("/api/v1/addresses")
            .wrap(AuthMiddleware::required())
            .service(handlers::accounts::update_address)
    );
    cfg.service(
        web::scope("/api/v1/phones")
            .wrap(AuthMiddleware::required())
            .service(handlers::accounts::update_phone)
    );
}

/// 인증 관련 라우트를 설정합니다
///
/// 로그인 엔드포인트는 인증을 위한 것이므로 Public 접근이 가능합니다.
///
/// # Available Routes
///
/// - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인, 토큰 발급
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"ana@example.com","password":"secret"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::local_login)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "account_service",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
