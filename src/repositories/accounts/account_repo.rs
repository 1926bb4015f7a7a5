//! # 계정 리포지토리 구현
//!
//! 계정 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis read-through 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **데이터 무결성**: 이메일 유니크 인덱스 관리
//! - **단일 문서 쓰기**: 주소/전화번호가 내장되어 있어 트랜잭션 불필요

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::accounts::Account,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 계정 데이터 액세스 리포지토리
///
/// 계정 엔티티의 조회/저장/삭제 연산을 담당하며,
/// MongoDB 컬렉션과 Redis 캐시를 통합하여 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// - **캐시 키**: `account:email:{email}`
/// - **TTL**: 10분 (600초)
/// - **무효화**: 쓰기/삭제 시 관련 이메일 키 제거.
///   교체 저장은 이전 문서를 함께 받아(pre-image) 이메일이 변경된
///   경우에도 이전 키를 정확히 무효화합니다.
///
/// ## 유일성 강제
///
/// 서비스 계층의 존재 검사는 중복 이메일에 대한 친절한 409 응답을 위한
/// 빠른 경로일 뿐입니다. 실제 강제 지점은 [`create_indexes`](Self::create_indexes)가
/// 만드는 `email` 유니크 인덱스이며, 동시 등록 경합에서 지는 쪽의
/// insert는 저장소 에러로 표면화됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::accounts::account_repo::AccountRepository;
///
/// let repo = AccountRepository::instance();
///
/// let saved = repo.save(account).await?;
/// let found = repo.find_by_email("ana@example.com").await?;
/// let deleted = repo.delete_by_email("ana@example.com").await?;
/// ```
#[repository(name = "account", collection = "accounts")]
pub struct AccountRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,
    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl AccountRepository {
    /// 이메일 주소로 계정 조회
    ///
    /// 캐시 우선 조회를 수행합니다. 캐시 미스 시 MongoDB에서 조회하고
    /// 결과를 10분 TTL로 캐시에 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Account))` - 계정을 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 계정이 없는 경우
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        // 캐시에서 먼저 확인
        let cache_key = format!("account:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<Account>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let account = self.collection::<Account>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref account) = account {
            let _ = self.redis
                .set_with_expiry(&cache_key, account, 600)
                .await;
        }

        Ok(account)
    }

    /// 이메일 존재 여부 확인
    ///
    /// 문서 전체를 역직렬화하지 않고 개수만 셉니다.
    /// 캐시 히트는 곧 존재를 의미하므로 DB 조회를 생략합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 해당 이메일의 계정이 존재
    /// * `Ok(false)` - 존재하지 않음
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        let cache_key = format!("account:email:{}", email);

        if let Ok(Some(_)) = self.redis.get::<Account>(&cache_key).await {
            return Ok(true);
        }

        let count = self.collection::<Account>()
            .count_documents(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// 계정 저장
    ///
    /// 식별자가 없으면 새 문서로 삽입하며 이 시점에 계정과
    /// 식별자가 없는 내장 주소/전화번호 모두에 ObjectId를 할당합니다.
    /// 식별자가 있으면 문서 전체를 교체합니다.
    ///
    /// # 인자
    ///
    /// * `account` - 저장할 계정 (첫 저장 시 식별자 없음)
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - 저장된 계정 (식별자 포함)
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    ///   (유니크 인덱스 위반 포함)
    ///
    /// # 캐시 관리
    ///
    /// 교체 저장 시 이전 문서의 이메일 키와 새 이메일 키를 모두
    /// 무효화합니다. 이메일이 변경된 업데이트에서도 이전 키가 남아
    /// 낡은 데이터를 제공하는 일이 없도록 합니다.
    pub async fn save(&self, mut account: Account) -> Result<Account, AppError> {
        // 식별자가 없는 내장 서브문서에 ObjectId 할당
        for address in account.addresses.iter_mut() {
            if address.id.is_none() {
                address.id = Some(ObjectId::new());
            }
        }
        for phone in account.phones.iter_mut() {
            if phone.id.is_none() {
                phone.id = Some(ObjectId::new());
            }
        }

        match account.id {
            None => {
                // 첫 저장 - 삽입하고 식별자 할당
                let result = self.collection::<Account>()
                    .insert_one(&account)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                account.id = Some(result.inserted_id.as_object_id().unwrap());
            }
            Some(id) => {
                // 기존 문서 교체 - 이전 문서를 받아 이메일 키를 정확히 무효화
                let options = mongodb::options::FindOneAndReplaceOptions::builder()
                    .return_document(mongodb::options::ReturnDocument::Before)
                    .build();

                let previous = self.collection::<Account>()
                    .find_one_and_replace(doc! { "_id": id }, &account)
                    .with_options(options)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                if let Some(ref previous) = previous {
                    let _ = self.redis
                        .del(&format!("account:email:{}", previous.email))
                        .await;
                }
            }
        }

        // 새 이메일 키 무효화 (다음 조회 시 최신 데이터로 재캐싱)
        let _ = self.redis
            .del(&format!("account:email:{}", account.email))
            .await;

        Ok(account)
    }

    /// 이메일로 계정 삭제
    ///
    /// 존재 검사 없이 삭제를 시도합니다. 존재하지 않는 이메일의 삭제는
    /// `Ok(false)`로 끝나는 no-op입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 계정이 삭제됨
    /// * `Ok(false)` - 해당 이메일의 계정이 없음
    pub async fn delete_by_email(&self, email: &str) -> Result<bool, AppError> {
        let result = self.collection::<Account>()
            .delete_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        let _ = self.redis.del(&format!("account:email:{}", email)).await;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행됩니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** - 중복 이메일 방지의 실제 강제 지점.
    ///    서비스 계층의 존재 검사와 insert 사이의 경합에서 지는 쪽이
    ///    여기서 거부됩니다.
    /// 2. **내장 주소/전화번호 식별자 인덱스** - 주소/전화번호 단독
    ///    업데이트의 `addresses._id` / `phones._id` 조회 최적화.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 모든 인덱스가 성공적으로 생성됨
    /// * `Err(AppError::DatabaseError)` - 인덱스 생성 중 오류 발생
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Account>();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 내장 주소 식별자 인덱스
        let address_id_index = IndexModel::builder()
            .keys(doc! { "addresses._id": 1 })
            .options(IndexOptions::builder()
                .name("addresses_id".to_string())
                .build())
            .build();

        // 내장 전화번호 식별자 인덱스
        let phone_id_index = IndexModel::builder()
            .keys(doc! { "phones._id": 1 })
            .options(IndexOptions::builder()
                .name("phones_id".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, address_id_index, phone_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
