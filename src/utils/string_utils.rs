//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 변환 계층의 존재/부재(presence/absence) 검증과
//! 로그 출력용 이메일 마스킹에서 사용됩니다.

use crate::errors::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 반환값
/// * `Ok(String)` - 정리된 유효한 문자열
/// * `Err(AppError)` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// // 성공 케이스
/// assert_eq!(validate_required_string("  Ana  ", "name").unwrap(), "Ana");
///
/// // 실패 케이스
/// assert!(validate_required_string("   ", "name").is_err());
/// assert!(validate_required_string("", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 필수 Option 필드에서 값을 꺼냅니다.
///
/// `None`이거나 내용이 빈 문자열인 경우 ValidationError를 반환합니다.
/// 변환 계층에서 "필드 부재"를 거부해야 하는 지점에 사용됩니다.
///
/// # 예제
/// ```rust,ignore
/// let email = require_field(dto.email.as_deref(), "email")?;
/// ```
pub fn require_field(value: Option<&str>, field_name: &str) -> Result<String, AppError> {
    match value {
        Some(v) => validate_required_string(v, field_name),
        None => Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        )),
    }
}

/// 로그 출력용 이메일 마스킹
///
/// 로컬 파트의 앞 두 글자만 남기고 나머지를 `*`로 대체합니다.
/// 개인정보가 로그에 그대로 남지 않도록 모든 이메일 로깅에 사용됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::mask_email;
///
/// assert_eq!(mask_email("ana@example.com"), "an***@example.com");
/// assert_eq!(mask_email("no-at-sign"), "***");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("Ana", "name").unwrap(), "Ana");
        assert_eq!(validate_required_string("  Ana  ", "name").unwrap(), "Ana");

        // 실패 케이스
        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("\t\n", "name").is_err());
    }

    #[test]
    fn test_require_field() {
        assert_eq!(require_field(Some("Ana"), "name").unwrap(), "Ana");
        assert!(require_field(None, "name").is_err());
        assert!(require_field(Some("   "), "name").is_err());
    }

    #[test]
    fn test_require_field_error_kind() {
        match require_field(None, "email") {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("email")),
            other => panic!("Expected ValidationError, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ana@example.com"), "an***@example.com");
        assert_eq!(mask_email("a@x.com"), "a***@x.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
