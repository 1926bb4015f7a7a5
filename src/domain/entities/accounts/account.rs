//! Account Entity Implementation
//!
//! 계정 엔티티의 핵심 구현체입니다.
//! 계정이 소유하는 주소/전화번호 목록을 내장 서브문서로 함께 보관합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::phone::Phone;

/// 계정 엔티티
///
/// 시스템의 모든 사용자 계정을 표현하는 핵심 도메인 엔티티입니다.
/// 이메일은 시스템 전체에서 유일하며, 유일성은 서비스 계층의 사전 검사와
/// 저장소의 유니크 인덱스가 함께 보장합니다.
///
/// 비밀번호는 해시된 형태로만 보관됩니다.
/// 평문 비밀번호는 해싱 시점 이후 어디에도 저장되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 계정 이메일 (unique)
    pub email: String,
    /// bcrypt로 해시된 비밀번호
    pub password_hash: String,
    /// 계정이 소유한 주소 목록 (내장 서브문서, 순서 없음)
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// 계정이 소유한 전화번호 목록 (내장 서브문서, 순서 없음)
    #[serde(default)]
    pub phones: Vec<Phone>,
}

impl Account {
    /// 새 계정 엔티티 생성
    ///
    /// 식별자는 저장소가 할당하므로 `None`으로 시작합니다.
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        addresses: Vec<Address>,
        phones: Vec<Phone>,
    ) -> Self {
        Self {
            id: None,
            name,
            email,
            password_hash,
            addresses,
            phones,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
