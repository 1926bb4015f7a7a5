//! 전화번호 전송 객체

use serde::{Deserialize, Serialize};

/// 전화번호 전송 객체
///
/// 부분 업데이트에서 `None`은 기존 값 유지를 의미합니다.
/// 생성 시에는 지역 번호와 전화번호가 모두 필수입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneDto {
    /// 저장소가 할당한 식별자 (엔티티 → DTO 방향에서만 채워짐)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 지역 번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    /// 전화번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}
