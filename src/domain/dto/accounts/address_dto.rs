//! 주소 전송 객체

use serde::{Deserialize, Serialize};

/// 주소 전송 객체
///
/// 모든 필드가 `Option<T>`이며, 부분 업데이트에서 `None`은
/// 기존 값을 유지하라는 의미입니다. 생성 시에는 `complement`를 제외한
/// 모든 필드가 필수입니다 (변환 계층에서 검증).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDto {
    /// 저장소가 할당한 식별자 (엔티티 → DTO 방향에서만 채워짐)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 도로명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// 건물 번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    /// 상세 주소 (선택사항)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    /// 도시
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// 주/도
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// 우편번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}
