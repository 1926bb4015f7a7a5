//! # 계정 관리 서비스 구현
//!
//! 계정 생명주기의 핵심 비즈니스 로직을 구현합니다.
//! Spring Framework의 Service 패턴을 참고하여 설계되었으며,
//! 등록, 조회, 삭제, 프로필/주소/전화번호 부분 업데이트를 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                    AccountService                      │
//! │                                                        │
//! │  register ─ email_exists ─ find_by_email ─ delete      │
//! │  update_profile ─ update_address ─ update_phone        │
//! │  verify_password                                       │
//! └────────────────────────────────────────────────────────┘
//!        │                │                    │
//!        ▼                ▼                    ▼
//!   converter        bcrypt 해싱          TokenService
//!   (순수 변환)      (환경별 cost)        (이메일 추출)
//!        │
//!        ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  AccountRepository / AddressRepository / PhoneRepository│
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 설계 원칙
//!
//! - **재시도 없음**: 협력자의 실패는 타입된 에러로 즉시 전파됩니다.
//!   보상 트랜잭션도 없습니다. 단일 문서 쓰기는 저장소 경계에서 원자적입니다.
//! - **평문 비밀번호 비보존**: 비밀번호는 해싱 시점 이후 어디에도 남지 않습니다.
//! - **이메일 유일성**: 등록 시 존재 검사는 빠른 실패 경로이며,
//!   실제 강제 지점은 저장소의 유니크 인덱스입니다. 존재 검사와 쓰기가
//!   원자적이지 않으므로 동시 등록 경합은 인덱스가 판정합니다.

use std::sync::Arc;
use bcrypt::hash;
use singleton_macro::service;
use crate::{
    config::PasswordConfig,
    domain::{
        dto::accounts::{AccountDto, AddressDto, PhoneDto},
        entities::accounts::Account,
    },
    repositories::accounts::{
        account_repo::AccountRepository,
        address_repo::AddressRepository,
        phone_repo::PhoneRepository,
    },
    services::auth::token_service::TokenService,
    utils::string_utils::{mask_email, require_field},
};
use crate::errors::errors::AppError;
use crate::services::accounts::converter;

/// 계정 관리 비즈니스 로직 서비스
///
/// 계정과 계정이 소유한 주소/전화번호의 생명주기를 담당합니다.
/// 변환 계층(converter)을 통해 DTO ↔ 엔티티를 오가며,
/// 저장소/해셔/토큰 리더를 협력자로 사용합니다.
///
/// ## 싱글톤 패턴 및 의존성 주입
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// 리포지토리들이 자동으로 주입됩니다:
///
/// ```rust,ignore
/// let account_service = AccountService::instance(); // 항상 동일한 인스턴스
/// ```
#[service(name = "account")]
pub struct AccountService {
    /// 계정 데이터 액세스 리포지토리
    account_repo: Arc<AccountRepository>,
    /// 주소 데이터 액세스 리포지토리
    address_repo: Arc<AddressRepository>,
    /// 전화번호 데이터 액세스 리포지토리
    phone_repo: Arc<PhoneRepository>,
}

impl AccountService {
    /// 새 계정 등록
    ///
    /// 이메일 중복을 검사한 뒤 비밀번호를 해싱하고 엔티티로 변환하여
    /// 저장합니다. 저장소가 식별자를 할당한 결과를 DTO로 되돌려 반환합니다.
    ///
    /// # 인자
    ///
    /// * `dto` - 등록 요청 데이터 (name, email, password 필수,
    ///   주소/전화번호 목록은 선택이며 부재 시 빈 목록으로 처리)
    ///
    /// # 반환값
    ///
    /// * `Ok(AccountDto)` - 저장된 계정 (식별자 포함, 비밀번호는 해시)
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::ValidationError)` - 필수 필드 부재
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    ///
    /// # 처리 과정
    ///
    /// 1. **중복 검사**: 저장소 존재 쿼리로 이메일 중복 확인 (쓰기 없음)
    /// 2. **비밀번호 해싱**: bcrypt, 환경별 cost
    /// 3. **엔티티 변환**: converter::to_account (식별자 없음)
    /// 4. **영구 저장**: 저장소가 식별자 할당
    /// 5. **응답 변환**: 저장 결과를 DTO로 변환하여 반환
    ///
    /// 중복 검사와 저장 사이는 원자적이지 않습니다. 동일 이메일의 동시
    /// 등록이 모두 검사를 통과할 수 있으며, 이 경우 저장소의 유니크
    /// 인덱스가 한쪽을 거부합니다.
    pub async fn register(&self, mut dto: AccountDto) -> Result<AccountDto, AppError> {
        let email = require_field(dto.email.as_deref(), "email")?;

        // 이메일 중복 확인 (빠른 실패 경로, 저장소 쓰기 없음)
        if self.email_exists(&email).await? {
            return Err(AppError::ConflictError(
                format!("이미 등록된 이메일입니다: {}", email)
            ));
        }

        // 비밀번호 해싱
        let password = require_field(dto.password.as_deref(), "password")?;
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        dto.password = Some(password_hash);

        // 엔티티 변환 및 저장
        let account = converter::to_account(&dto)?;
        let saved = self.account_repo.save(account).await?;

        log::info!("계정 등록 완료: {}", mask_email(&saved.email));

        Ok(converter::to_account_dto(&saved))
    }

    /// 이메일 존재 여부 확인
    ///
    /// 저장소에 위임되는 순수 존재 검사입니다.
    /// 단독으로도 쓰이고 [`register`](Self::register)의 사전 조건으로도 쓰입니다.
    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        self.account_repo.exists_by_email(email).await
    }

    /// 이메일로 계정 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(AccountDto)` - 조회된 계정의 DTO
    /// * `Err(AppError::NotFound)` - 해당 이메일의 계정이 없음
    pub async fn find_by_email(&self, email: &str) -> Result<AccountDto, AppError> {
        let account = self.account_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(
                format!("등록되지 않은 이메일입니다: {}", email)
            ))?;

        Ok(converter::to_account_dto(&account))
    }

    /// 이메일로 계정 삭제
    ///
    /// 삭제를 저장소에 위임합니다. 사전 존재 검사는 하지 않으므로
    /// 존재하지 않는 이메일의 삭제는 이 계층에서는 no-op입니다.
    pub async fn delete_by_email(&self, email: &str) -> Result<(), AppError> {
        let deleted = self.account_repo.delete_by_email(email).await?;

        if deleted {
            log::info!("계정 삭제 완료: {}", mask_email(email));
        } else {
            log::debug!("삭제 대상 없음: {}", mask_email(email));
        }

        Ok(())
    }

    /// 호출자 본인의 계정 프로필 부분 업데이트
    ///
    /// 호출자의 이메일은 제시된 Authorization 헤더의 토큰에서 추출합니다
    /// (요청 본문에 이메일을 요구하지 않습니다). DTO에서 존재하는
    /// 스칼라 필드만 기존 계정 위에 병합되며, 주소/전화번호 컬렉션은
    /// 변경 없이 유지됩니다.
    ///
    /// # 인자
    ///
    /// * `auth_header` - "Bearer {token}" 형식의 Authorization 헤더 값
    /// * `dto` - 변경할 필드만 담은 부분 업데이트 DTO
    ///
    /// # 반환값
    ///
    /// * `Ok(AccountDto)` - 병합되어 저장된 계정
    /// * `Err(AppError::AuthenticationError)` - 토큰 형식 오류/만료/서명 불일치
    /// * `Err(AppError::NotFound)` - 토큰의 이메일로 계정을 찾을 수 없음
    ///
    /// # 비밀번호 처리
    ///
    /// DTO에 password가 존재하면 해싱해서 병합하고,
    /// 부재하면 그대로 두어 병합 단계가 기존 해시를 유지하게 합니다.
    pub async fn update_profile(
        &self,
        auth_header: &str,
        mut dto: AccountDto,
    ) -> Result<AccountDto, AppError> {
        // 토큰에서 호출자 이메일 추출 (고정 길이 스킴 접두사 제거 후 파싱)
        let token_service = TokenService::instance();
        let token = token_service.extract_bearer_token(auth_header)?;
        let email = token_service.extract_email(token)?;

        // 비밀번호가 제공된 경우에만 해싱
        dto.password = match dto.password {
            Some(plain) => {
                let hashed = hash(&plain, PasswordConfig::bcrypt_cost())
                    .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
                Some(hashed)
            }
            None => None,
        };

        // 기존 계정 조회
        let entity = self.account_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound(
                format!("등록되지 않은 이메일입니다: {}", email)
            ))?;

        // DTO의 존재 필드를 기존 엔티티 위에 병합 (컬렉션은 유지)
        let merged = converter::merge_account(&dto, &entity);

        let saved = self.account_repo.save(merged).await?;

        log::info!("프로필 업데이트 완료: {}", mask_email(&saved.email));

        Ok(converter::to_account_dto(&saved))
    }

    /// 주소 부분 업데이트
    ///
    /// 주소 자체의 식별자로만 조회하며, 소유 계정에 대한 검증은
    /// 수행하지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(AddressDto)` - 병합되어 저장된 주소
    /// * `Err(AppError::NotFound)` - 해당 식별자의 주소가 없음
    /// * `Err(AppError::ValidationError)` - 잘못된 식별자 형식
    pub async fn update_address(
        &self,
        address_id: &str,
        dto: AddressDto,
    ) -> Result<AddressDto, AppError> {
        let entity = self.address_repo
            .find_by_id(address_id)
            .await?
            .ok_or_else(|| AppError::NotFound(
                format!("등록되지 않은 ID입니다: {}", address_id)
            ))?;

        let merged = converter::merge_address(&dto, &entity);
        let saved = self.address_repo.save(merged).await?;

        Ok(converter::to_address_dto(&saved))
    }

    /// 전화번호 부분 업데이트
    ///
    /// [`update_address`](Self::update_address)와 대칭적으로 동작합니다.
    pub async fn update_phone(
        &self,
        phone_id: &str,
        dto: PhoneDto,
    ) -> Result<PhoneDto, AppError> {
        let entity = self.phone_repo
            .find_by_id(phone_id)
            .await?
            .ok_or_else(|| AppError::NotFound(
                format!("등록되지 않은 ID입니다: {}", phone_id)
            ))?;

        let merged = converter::merge_phone(&dto, &entity);
        let saved = self.phone_repo.save(merged).await?;

        Ok(converter::to_phone_dto(&saved))
    }

    /// 로그인용 비밀번호 검증
    ///
    /// 이메일로 계정을 찾아 bcrypt 해시와 대조합니다.
    /// 존재하지 않는 이메일과 틀린 비밀번호는 동일한 메시지로 실패하여
    /// 계정 존재 여부가 노출되지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - 인증된 계정 엔티티
    /// * `Err(AppError::AuthenticationError)` - 잘못된 이메일 또는 비밀번호
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<Account, AppError> {
        let account = self.account_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(
                "잘못된 이메일 또는 비밀번호입니다".to_string()
            ))?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &account.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("로그인 실패: {}", mask_email(email));
            return Err(AppError::AuthenticationError(
                "잘못된 이메일 또는 비밀번호입니다".to_string()
            ));
        }

        Ok(account)
    }
}
