//! 인증 관련 전송 객체
//!
//! 로그인 요청과 토큰 응답의 데이터 계약을 정의합니다.

use serde::{Deserialize, Serialize};

/// 로그인 요청 DTO
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// 계정 이메일
    pub email: String,
    /// 평문 비밀번호 (bcrypt로 검증됨)
    pub password: String,
}

/// 로그인 응답 DTO
///
/// OAuth 2.0 표준의 토큰 응답 형식을 따릅니다.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}

impl LoginResponse {
    /// 새 로그인 응답 생성
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_serializes_bearer_type() {
        let response = LoginResponse::new("abc.def.ghi".to_string(), 3600);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"token_type\":\"Bearer\""));
        assert!(json.contains("\"expires_in\":3600"));
    }
}
