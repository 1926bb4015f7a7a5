//! 계정 생명주기 통합 테스트
//!
//! 등록 → 중복 등록 거부 → 조회 → 프로필 업데이트 → 삭제의 전체 플로우를
//! 실제 저장소에 대해 검증합니다.
//!
//! 실행 중인 MongoDB와 Redis 인스턴스가 필요하므로 기본적으로 제외되며,
//! 다음과 같이 실행합니다:
//!
//! ```bash
//! MONGODB_URI=mongodb://localhost:27017 REDIS_URL=redis://localhost:6379 \
//!   cargo test --test account_flow -- --ignored
//! ```

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use account_service_backend::caching::redis::RedisClient;
use account_service_backend::core::registry::ServiceLocator;
use account_service_backend::db::Database;
use account_service_backend::domain::dto::accounts::{AccountDto, AddressDto, PhoneDto};
use account_service_backend::errors::errors::AppError;
use account_service_backend::services::accounts::AccountService;
use account_service_backend::services::auth::TokenService;

/// 실행마다 고유한 이메일을 생성합니다 (테스트 간 간섭 방지)
fn unique_email() -> String {
    format!("ana+{}@example.com", ObjectId::new().to_hex())
}

/// 인프라 컴포넌트를 ServiceLocator에 등록합니다
async fn setup() {
    let database = Arc::new(Database::new().await.expect("MongoDB 연결 실패"));
    let redis = Arc::new(RedisClient::new().await.expect("Redis 연결 실패"));

    ServiceLocator::set(database);
    ServiceLocator::set(redis);
}

fn registration_dto(email: &str) -> AccountDto {
    AccountDto {
        name: Some("Ana".to_string()),
        email: Some(email.to_string()),
        password: Some("secret".to_string()),
        addresses: Some(vec![AddressDto {
            street: Some("Rua das Flores".to_string()),
            number: Some(123),
            city: Some("São Paulo".to_string()),
            state: Some("SP".to_string()),
            postal_code: Some("01001-000".to_string()),
            ..Default::default()
        }]),
        phones: Some(vec![PhoneDto {
            area_code: Some("11".to_string()),
            number: Some("99999-0000".to_string()),
            ..Default::default()
        }]),
        ..Default::default()
    }
}

#[actix_web::test]
#[ignore = "실행 중인 MongoDB/Redis 인스턴스가 필요합니다"]
async fn test_account_lifecycle() {
    setup().await;
    let service = AccountService::instance();
    let email = unique_email();

    // 등록 - 비밀번호는 해시되어 저장된다
    let registered = service.register(registration_dto(&email)).await.unwrap();
    assert!(registered.id.is_some());
    assert_eq!(registered.name, Some("Ana".to_string()));
    assert_ne!(registered.password, Some("secret".to_string()));
    assert_eq!(registered.addresses.as_ref().unwrap().len(), 1);
    assert!(registered.addresses.unwrap()[0].id.is_some());

    // 동일 이메일 재등록 - Conflict
    match service.register(registration_dto(&email)).await {
        Err(AppError::ConflictError(_)) => {}
        other => panic!("expected ConflictError, got {:?}", other.err()),
    }

    // 조회
    let found = service.find_by_email(&email).await.unwrap();
    assert_eq!(found.name, Some("Ana".to_string()));

    // 토큰 기반 프로필 업데이트 - 이름만 변경, 이메일/비밀번호는 유지
    let token_service = TokenService::instance();
    let token = token_service.generate_access_token(&email).unwrap();
    let auth_header = format!("Bearer {}", token);

    let update = AccountDto {
        name: Some("Ana Maria".to_string()),
        ..Default::default()
    };
    let updated = service.update_profile(&auth_header, update).await.unwrap();
    assert_eq!(updated.name, Some("Ana Maria".to_string()));
    assert_eq!(updated.email, Some(email.clone()));
    assert_eq!(updated.password, found.password);

    // 삭제 후 조회 - NotFound
    service.delete_by_email(&email).await.unwrap();
    match service.find_by_email(&email).await {
        Err(AppError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {:?}", other.err()),
    }

    // 삭제는 멱등 - 존재하지 않는 이메일도 no-op
    service.delete_by_email(&email).await.unwrap();
}

#[actix_web::test]
#[ignore = "실행 중인 MongoDB/Redis 인스턴스가 필요합니다"]
async fn test_address_and_phone_update() {
    setup().await;
    let service = AccountService::instance();
    let email = unique_email();

    let registered = service.register(registration_dto(&email)).await.unwrap();
    let address_id = registered.addresses.unwrap()[0].id.clone().unwrap();
    let phone_id = registered.phones.unwrap()[0].id.clone().unwrap();

    // 주소 부분 업데이트 - 거리만 변경
    let updated = service
        .update_address(&address_id, AddressDto {
            street: Some("Avenida Paulista".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.street, Some("Avenida Paulista".to_string()));
    assert_eq!(updated.city, Some("São Paulo".to_string()));

    // 전화번호 부분 업데이트
    let updated = service
        .update_phone(&phone_id, PhoneDto {
            number: Some("98888-7777".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.number, Some("98888-7777".to_string()));
    assert_eq!(updated.area_code, Some("11".to_string()));

    // 변경 결과가 계정 조회에도 반영된다
    let account = service.find_by_email(&email).await.unwrap();
    assert_eq!(
        account.addresses.unwrap()[0].street,
        Some("Avenida Paulista".to_string())
    );

    // 존재하지 않는 식별자 - NotFound
    let missing = ObjectId::new().to_hex();
    match service.update_address(&missing, AddressDto::default()).await {
        Err(AppError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {:?}", other.err()),
    }

    service.delete_by_email(&email).await.unwrap();
}
