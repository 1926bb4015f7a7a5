//! Phone Entity Implementation

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 전화번호 엔티티
///
/// 정확히 하나의 계정에 속하는 전화번호입니다.
/// 계정 문서에 내장 서브문서로 저장되며 자체 식별자를 가집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phone {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 지역 번호
    pub area_code: String,
    /// 전화번호
    pub number: String,
}

impl Phone {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
