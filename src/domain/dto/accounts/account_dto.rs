//! 계정 전송 객체
//!
//! 서비스 경계에서 계정을 표현하는 DTO입니다.
//! 등록 시에는 입력으로, 조회/수정 시에는 출력으로 사용되며,
//! 부분 업데이트에서는 `None` 필드가 "변경 없음"을 의미합니다.

use serde::{Deserialize, Serialize};

use super::address_dto::AddressDto;
use super::phone_dto::PhoneDto;

/// 계정 전송 객체
///
/// 병합 가능한 모든 스칼라 필드가 `Option<T>`로 선언되어
/// 필드의 존재/부재를 타입 수준에서 구분합니다.
///
/// # 필드 의미
///
/// | 필드 | 등록 시 | 부분 업데이트 시 |
/// |------|---------|------------------|
/// | `name` | 필수 | `None`이면 기존 값 유지 |
/// | `email` | 필수 | `None`이면 기존 값 유지 |
/// | `password` | 필수 (평문 입력, 서비스가 해싱) | `None`이면 기존 해시 유지 |
/// | `addresses` | 선택 (`None`은 빈 목록으로 처리) | 무시됨 (컬렉션은 병합 대상 아님) |
/// | `phones` | 선택 (`None`은 빈 목록으로 처리) | 무시됨 |
///
/// # 보안
///
/// `password`는 역직렬화만 가능하며 HTTP 응답으로는 직렬화되지 않습니다.
/// 변환 계층은 저장된 해시를 그대로 DTO에 실어 나르므로,
/// 외부 노출 차단은 이 직렬화 속성이 담당합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountDto {
    /// 저장소가 할당한 식별자 (엔티티 → DTO 방향에서만 채워짐)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 표시 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 계정 이메일
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 비밀번호 (입력 전용)
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// 소유 주소 목록
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<AddressDto>>,
    /// 소유 전화번호 목록
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<PhoneDto>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_deserialize_to_none() {
        let json = r#"{"name": "Ana"}"#;
        let dto: AccountDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.name, Some("Ana".to_string()));
        assert_eq!(dto.email, None);
        assert_eq!(dto.password, None);
        assert!(dto.addresses.is_none());
        assert!(dto.phones.is_none());
    }

    #[test]
    fn test_empty_collections_are_distinct_from_absent() {
        let json = r#"{"addresses": [], "phones": []}"#;
        let dto: AccountDto = serde_json::from_str(json).unwrap();

        assert_eq!(dto.addresses, Some(vec![]));
        assert_eq!(dto.phones, Some(vec![]));
    }

    #[test]
    fn test_password_is_never_serialized() {
        let dto = AccountDto {
            email: Some("ana@example.com".to_string()),
            password: Some("$2b$04$hash".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$04$hash"));
    }

    #[test]
    fn test_full_payload_deserializes() {
        let json = r#"{
            "name": "Ana",
            "email": "ana@example.com",
            "password": "secret",
            "addresses": [{
                "street": "Rua das Flores",
                "number": 123,
                "city": "São Paulo",
                "state": "SP",
                "postal_code": "01001-000"
            }],
            "phones": [{"area_code": "11", "number": "99999-0000"}]
        }"#;

        let dto: AccountDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.phones.as_ref().unwrap().len(), 1);

        let addresses = dto.addresses.unwrap();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].complement, None);
        assert_eq!(addresses[0].number, Some(123));
    }
}
