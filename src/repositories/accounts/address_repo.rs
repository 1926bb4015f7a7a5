//! # 주소 리포지토리 구현
//!
//! 계정 문서에 내장된 주소 서브문서의 데이터 액세스를 담당합니다.
//! 주소는 자체 식별자(`addresses._id`)로만 조회/갱신되며,
//! 소유 계정을 거치지 않습니다.

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId, to_bson};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::accounts::{Account, Address},
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 주소 데이터 액세스 리포지토리
///
/// `accounts` 컬렉션의 내장 `addresses` 배열 위에서 동작합니다.
/// 배열 요소의 조회는 `addresses._id` 필터로, 갱신은 positional `$`
/// 연산자로 수행되어 항상 단일 문서 쓰기입니다.
#[repository(name = "address", collection = "accounts")]
pub struct AddressRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl AddressRepository {
    /// 식별자로 주소 조회
    ///
    /// # 인자
    ///
    /// * `id` - 주소 ObjectId의 16진수 문자열 표현
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Address))` - 주소를 찾은 경우
    /// * `Ok(None)` - 해당 식별자의 주소가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Address>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        // 주소를 내장한 계정 문서를 찾은 뒤 해당 요소만 추출
        let account = self.collection::<Account>()
            .find_one(doc! { "addresses._id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(account.and_then(|account| {
            account
                .addresses
                .into_iter()
                .find(|address| address.id == Some(object_id))
        }))
    }

    /// 주소 저장 (내장 배열 요소 교체)
    ///
    /// positional `$` 연산자로 일치한 배열 요소를 통째로 교체합니다.
    /// 소유 계정 문서가 변경되므로 해당 계정의 이메일 캐시를 무효화합니다.
    ///
    /// # 인자
    ///
    /// * `address` - 저장할 주소 (식별자 필수)
    ///
    /// # 반환값
    ///
    /// * `Ok(Address)` - 저장된 주소
    /// * `Err(AppError::NotFound)` - 해당 식별자를 내장한 계정이 없음
    /// * `Err(AppError::ValidationError)` - 식별자 없는 주소
    pub async fn save(&self, address: Address) -> Result<Address, AppError> {
        let object_id = address.id.ok_or_else(|| {
            AppError::ValidationError("저장할 주소에 식별자가 없습니다".to_string())
        })?;

        let address_doc = to_bson(&address)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let owner = self.collection::<Account>()
            .find_one_and_update(
                doc! { "addresses._id": object_id },
                doc! { "$set": { "addresses.$": address_doc } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        match owner {
            Some(owner) => {
                // 소유 계정 문서가 바뀌었으므로 이메일 캐시 무효화
                let _ = self.redis
                    .del(&format!("account:email:{}", owner.email))
                    .await;
                Ok(address)
            }
            None => Err(AppError::NotFound(
                format!("등록되지 않은 ID입니다: {}", object_id.to_hex())
            )),
        }
    }
}
