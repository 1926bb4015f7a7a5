//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 신원 확인을 제공합니다.
//! 토큰의 생성과 검증, 그리고 토큰에서 계정 이메일을 추출하는 역할을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::config::JwtConfig;
use crate::domain::models::token::TokenClaims;
use crate::errors::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 토큰의 주체(`sub`)는 계정 이메일이며, 프로필 업데이트 같은
/// 보호된 작업에서 호출자의 신원은 전적으로 이 클레임에서 추출됩니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 계정 이메일을 주체로 하는 JWT 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `email` - 토큰 주체가 될 계정 이메일
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 액세스 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token_service = TokenService::instance();
    /// let access_token = token_service.generate_access_token("ana@example.com")?;
    /// ```
    pub fn generate_access_token(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                },
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("유효하지 않은 토큰 서명입니다".to_string())
                },
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e))
            })
    }

    /// 토큰으로부터 계정 이메일 추출
    ///
    /// 검증에 성공한 토큰의 `sub` 클레임을 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 검증 실패
    pub fn extract_email(&self, token: &str) -> Result<String, AppError> {
        let claims = self.verify_token(token)?;
        Ok(claims.sub)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서
    /// 고정 길이 스킴 접두사(7바이트)를 제거한 토큰 부분만을 반환합니다.
    ///
    /// # Arguments
    ///
    /// * `auth_header` - HTTP Authorization 헤더 값 전체
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 스킴 접두사
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let auth_header = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";
    /// let token = token_service.extract_bearer_token(auth_header)?;
    /// let email = token_service.extract_email(token)?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_extract_email() {
        let service = TokenService::instance();

        let token = service.generate_access_token("ana@example.com").unwrap();
        let email = service.extract_email(&token).unwrap();

        assert_eq!(email, "ana@example.com");
    }

    #[test]
    fn test_verify_token_rejects_garbage() {
        let service = TokenService::instance();

        // 세그먼트 구조 자체가 잘못된 토큰
        let result = service.verify_token("garbage");
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_token_rejects_wrong_signature() {
        let service = TokenService::instance();

        // 다른 키로 서명된 토큰
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "ana@example.com".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"another-secret-entirely"),
        )
        .unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_token_rejects_expired() {
        let service = TokenService::instance();

        // 이미 만료된 클레임으로 직접 서명
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "ana@example.com".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let secret = JwtConfig::secret();
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );

        // 잘못된 스킴 접두사
        assert!(matches!(
            service.extract_bearer_token("Basic abc"),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.extract_bearer_token("bearer abc"),
            Err(AppError::AuthenticationError(_))
        ));
    }
}
