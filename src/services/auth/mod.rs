//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 생성/검증을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스 토큰 생성 (HMAC-SHA256 서명)
//! - 토큰 검증 및 계정 이메일 추출
//! - Bearer 스킴 접두사 처리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let token = token_service.generate_access_token("ana@example.com")?;
//! let email = token_service.extract_email(&token)?;
//! ```

pub mod token_service;

pub use token_service::TokenService;
