//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 계정 관리와 토큰 기반 신원 확인을 담당합니다.
//!
//! # Features
//!
//! - 계정 생명주기 관리 (등록, 조회, 삭제, 부분 업데이트)
//! - DTO ↔ 엔티티 순수 변환 및 병합 로직
//! - JWT 토큰 생성/검증 및 이메일 추출
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{accounts::AccountService, auth::TokenService};
//!
//! let account_service = AccountService::instance();
//! let token_service = TokenService::instance();
//! ```

pub mod accounts;
pub mod auth;
