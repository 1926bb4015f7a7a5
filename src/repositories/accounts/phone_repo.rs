//! # 전화번호 리포지토리 구현
//!
//! 계정 문서에 내장된 전화번호 서브문서의 데이터 액세스를 담당합니다.
//! [`AddressRepository`](super::address_repo::AddressRepository)와
//! 대칭적인 구조로, `phones._id` 필터와 positional `$` 갱신을 사용합니다.

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId, to_bson};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::accounts::{Account, Phone},
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 전화번호 데이터 액세스 리포지토리
///
/// `accounts` 컬렉션의 내장 `phones` 배열 위에서 동작합니다.
#[repository(name = "phone", collection = "accounts")]
pub struct PhoneRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl PhoneRepository {
    /// 식별자로 전화번호 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Phone))` - 전화번호를 찾은 경우
    /// * `Ok(None)` - 해당 식별자의 전화번호가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Phone>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let account = self.collection::<Account>()
            .find_one(doc! { "phones._id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(account.and_then(|account| {
            account
                .phones
                .into_iter()
                .find(|phone| phone.id == Some(object_id))
        }))
    }

    /// 전화번호 저장 (내장 배열 요소 교체)
    ///
    /// # 반환값
    ///
    /// * `Ok(Phone)` - 저장된 전화번호
    /// * `Err(AppError::NotFound)` - 해당 식별자를 내장한 계정이 없음
    /// * `Err(AppError::ValidationError)` - 식별자 없는 전화번호
    pub async fn save(&self, phone: Phone) -> Result<Phone, AppError> {
        let object_id = phone.id.ok_or_else(|| {
            AppError::ValidationError("저장할 전화번호에 식별자가 없습니다".to_string())
        })?;

        let phone_doc = to_bson(&phone)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let owner = self.collection::<Account>()
            .find_one_and_update(
                doc! { "phones._id": object_id },
                doc! { "$set": { "phones.$": phone_doc } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match owner {
            Some(owner) => {
                // 소유 계정 문서가 바뀌었으므로 이메일 캐시 무효화
                let _ = self.redis
                    .del(&format!("account:email:{}", owner.email))
                    .await;
                Ok(phone)
            }
            None => Err(AppError::NotFound(
                format!("등록되지 않은 ID입니다: {}", object_id.to_hex())
            )),
        }
    }
}
