//! # Authentication HTTP Handlers
//!
//! 로그인과 토큰 발급을 처리하는 핸들러 함수들입니다.
//! 프로필 업데이트가 소비하는 Bearer 토큰은 여기서 발급됩니다.

use actix_web::{post, web, HttpResponse};
use crate::config::JwtConfig;
use crate::domain::dto::auth::{LoginRequest, LoginResponse};
use crate::errors::errors::AppError;
use crate::services::accounts::account_service::AccountService;
use crate::services::auth::token_service::TokenService;

/// 로그인 핸들러
///
/// 이메일/비밀번호를 검증하고 JWT 액세스 토큰을 발급합니다.
/// 존재하지 않는 이메일과 틀린 비밀번호는 동일한 401 응답을 받습니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/login`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "ana@example.com",
///   "password": "secret"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIs...",
///   "token_type": "Bearer",
///   "expires_in": 86400
/// }
/// ```
///
/// ## 실패 (401 Unauthorized)
/// ```json
/// {
///   "error": "Authentication error: 잘못된 이메일 또는 비밀번호입니다"
/// }
/// ```
#[post("/login")]
pub async fn local_login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let account_service = AccountService::instance();
    let token_service = TokenService::instance();

    let request = payload.into_inner();

    // 비밀번호 검증
    let account = account_service
        .verify_password(&request.email, &request.password)
        .await?;

    // 토큰 발급 (주체는 계정 이메일)
    let access_token = token_service.generate_access_token(&account.email)?;
    let expires_in = JwtConfig::expiration_hours() * 3600;

    Ok(HttpResponse::Ok().json(LoginResponse::new(access_token, expires_in)))
}
