//! Address Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 주소 엔티티
///
/// 정확히 하나의 계정에 속하는 주소입니다.
/// 계정 문서에 내장 서브문서로 저장되지만 자체 식별자를 가지며,
/// 주소 단독 업데이트는 이 식별자로만 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 도로명
    pub street: String,
    /// 건물 번호
    pub number: i64,
    /// 상세 주소 (동/호수 등, 선택사항)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    /// 도시
    pub city: String,
    /// 주/도
    pub state: String,
    /// 우편번호
    pub postal_code: String,
}

impl Address {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
