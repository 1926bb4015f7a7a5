//! # 계정 변환 계층
//!
//! 전송 객체(DTO)와 영속 엔티티 사이의 양방향 변환과
//! 부분 업데이트 병합(merge) 로직을 제공합니다.
//!
//! 이 모듈의 모든 함수는 순수 함수입니다. I/O와 부수효과가 없으며,
//! 저장소/해셔/토큰 같은 외부 협력자를 알지 못합니다.
//! 식별자 할당은 전적으로 리포지토리의 책임이므로
//! DTO → 엔티티 방향에서는 식별자를 만들지 않습니다.
//!
//! ## 병합 규칙
//!
//! 병합은 필드별로 독립적인 null-coalescing 오버레이입니다.
//! DTO 필드가 `Some`이면 그 값을, `None`이면 기존 엔티티의 값을 취하며,
//! 필드 간 교차 검증은 수행하지 않습니다. 계정 병합에서 주소/전화번호
//! 컬렉션은 병합 대상이 아니며 항상 기존 엔티티의 것이 유지됩니다.
//!
//! ## 부재 컬렉션 처리
//!
//! 계정 생성 변환([`to_account`])에서 주소/전화번호 컬렉션이
//! 부재(`None`)인 경우 빈 컬렉션으로 간주합니다. 결정적 동작이며
//! 단위 테스트로 고정되어 있습니다.

use crate::domain::dto::accounts::{AccountDto, AddressDto, PhoneDto};
use crate::domain::entities::accounts::{Account, Address, Phone};
use crate::errors::errors::AppError;
use crate::utils::string_utils::require_field;

/// DTO를 계정 엔티티로 변환합니다.
///
/// name, email, password는 필수이며, 부재 시 `ValidationError`를 반환합니다.
/// password 필드는 호출자(서비스 계층)가 이미 해싱을 끝낸 값이어야 합니다.
/// 이 함수는 해싱 여부를 검사하지 않습니다.
///
/// 주소/전화번호 컬렉션이 부재(`None`)인 경우 빈 컬렉션으로 처리합니다.
/// 식별자는 할당하지 않습니다 (저장소 책임).
///
/// # Errors
///
/// * `AppError::ValidationError` - 필수 필드 부재 또는 공백
pub fn to_account(dto: &AccountDto) -> Result<Account, AppError> {
    let name = require_field(dto.name.as_deref(), "name")?;
    let email = require_field(dto.email.as_deref(), "email")?;
    let password_hash = require_field(dto.password.as_deref(), "password")?;

    let addresses = match dto.addresses.as_deref() {
        Some(list) => list.iter().map(to_address).collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    let phones = match dto.phones.as_deref() {
        Some(list) => list.iter().map(to_phone).collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(Account::new(name, email, password_hash, addresses, phones))
}

/// 계정 엔티티를 DTO로 변환합니다.
///
/// 식별자와 내장 컬렉션의 식별자까지 모두 DTO에 실립니다.
/// password 필드는 저장된 형태(해시) 그대로 전달됩니다.
/// 외부 노출 차단은 DTO의 직렬화 속성이 담당합니다.
pub fn to_account_dto(account: &Account) -> AccountDto {
    AccountDto {
        id: account.id_string(),
        name: Some(account.name.clone()),
        email: Some(account.email.clone()),
        password: Some(account.password_hash.clone()),
        addresses: Some(account.addresses.iter().map(to_address_dto).collect()),
        phones: Some(account.phones.iter().map(to_phone_dto).collect()),
    }
}

/// DTO를 주소 엔티티로 변환합니다.
///
/// `complement`를 제외한 모든 필드가 필수입니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 필수 필드 부재
pub fn to_address(dto: &AddressDto) -> Result<Address, AppError> {
    Ok(Address {
        id: None,
        street: require_field(dto.street.as_deref(), "street")?,
        number: dto.number.ok_or_else(|| {
            AppError::ValidationError("number은(는) 필수입니다".to_string())
        })?,
        complement: dto.complement.clone(),
        city: require_field(dto.city.as_deref(), "city")?,
        state: require_field(dto.state.as_deref(), "state")?,
        postal_code: require_field(dto.postal_code.as_deref(), "postal_code")?,
    })
}

/// 주소 엔티티를 DTO로 변환합니다.
pub fn to_address_dto(address: &Address) -> AddressDto {
    AddressDto {
        id: address.id_string(),
        street: Some(address.street.clone()),
        number: Some(address.number),
        complement: address.complement.clone(),
        city: Some(address.city.clone()),
        state: Some(address.state.clone()),
        postal_code: Some(address.postal_code.clone()),
    }
}

/// DTO를 전화번호 엔티티로 변환합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 필수 필드 부재
pub fn to_phone(dto: &PhoneDto) -> Result<Phone, AppError> {
    Ok(Phone {
        id: None,
        area_code: require_field(dto.area_code.as_deref(), "area_code")?,
        number: require_field(dto.number.as_deref(), "number")?,
    })
}

/// 전화번호 엔티티를 DTO로 변환합니다.
pub fn to_phone_dto(phone: &Phone) -> PhoneDto {
    PhoneDto {
        id: phone.id_string(),
        area_code: Some(phone.area_code.clone()),
        number: Some(phone.number.clone()),
    }
}

/// DTO의 존재하는 필드를 기존 계정 위에 겹쳐 새 계정을 만듭니다.
///
/// 식별자와 주소/전화번호 컬렉션은 항상 기존 엔티티의 것을 유지합니다.
/// name, email, password 각각에 대해 DTO 값이 `Some`이면 그 값을,
/// `None`이면 기존 값을 취합니다. 필드 간 교차 검증은 없습니다.
///
/// password가 `Some`인 경우 호출자가 이미 해싱을 끝낸 값이어야 합니다.
pub fn merge_account(dto: &AccountDto, entity: &Account) -> Account {
    Account {
        id: entity.id,
        name: dto.name.clone().unwrap_or_else(|| entity.name.clone()),
        email: dto.email.clone().unwrap_or_else(|| entity.email.clone()),
        password_hash: dto
            .password
            .clone()
            .unwrap_or_else(|| entity.password_hash.clone()),
        addresses: entity.addresses.clone(),
        phones: entity.phones.clone(),
    }
}

/// DTO의 존재하는 필드를 기존 주소 위에 겹쳐 새 주소를 만듭니다.
///
/// 식별자는 항상 기존 엔티티의 것을 유지합니다.
/// `complement`가 `None`이면 기존 값이 유지되므로,
/// 부분 업데이트로 상세 주소를 비우는 것은 불가능합니다 (교체만 가능).
pub fn merge_address(dto: &AddressDto, entity: &Address) -> Address {
    Address {
        id: entity.id,
        street: dto.street.clone().unwrap_or_else(|| entity.street.clone()),
        number: dto.number.unwrap_or(entity.number),
        complement: dto.complement.clone().or_else(|| entity.complement.clone()),
        city: dto.city.clone().unwrap_or_else(|| entity.city.clone()),
        state: dto.state.clone().unwrap_or_else(|| entity.state.clone()),
        postal_code: dto
            .postal_code
            .clone()
            .unwrap_or_else(|| entity.postal_code.clone()),
    }
}

/// DTO의 존재하는 필드를 기존 전화번호 위에 겹쳐 새 전화번호를 만듭니다.
///
/// 식별자는 항상 기존 엔티티의 것을 유지합니다.
pub fn merge_phone(dto: &PhoneDto, entity: &Phone) -> Phone {
    Phone {
        id: entity.id,
        area_code: dto
            .area_code
            .clone()
            .unwrap_or_else(|| entity.area_code.clone()),
        number: dto.number.clone().unwrap_or_else(|| entity.number.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn full_account_dto() -> AccountDto {
        AccountDto {
            id: None,
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            password: Some("$2b$04$pretend.this.is.a.hash".to_string()),
            addresses: Some(vec![AddressDto {
                id: None,
                street: Some("Rua das Flores".to_string()),
                number: Some(123),
                complement: Some("Apto 41".to_string()),
                city: Some("São Paulo".to_string()),
                state: Some("SP".to_string()),
                postal_code: Some("01001-000".to_string()),
            }]),
            phones: Some(vec![PhoneDto {
                id: None,
                area_code: Some("11".to_string()),
                number: Some("99999-0000".to_string()),
            }]),
        }
    }

    fn stored_account() -> Account {
        Account {
            id: Some(ObjectId::new()),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$2b$04$stored.hash".to_string(),
            addresses: vec![Address {
                id: Some(ObjectId::new()),
                street: "Rua das Flores".to_string(),
                number: 123,
                complement: None,
                city: "São Paulo".to_string(),
                state: "SP".to_string(),
                postal_code: "01001-000".to_string(),
            }],
            phones: vec![Phone {
                id: Some(ObjectId::new()),
                area_code: "11".to_string(),
                number: "99999-0000".to_string(),
            }],
        }
    }

    #[test]
    fn test_to_account_round_trip_preserves_fields() {
        let dto = full_account_dto();
        let account = to_account(&dto).unwrap();
        let back = to_account_dto(&account);

        assert_eq!(back.name, dto.name);
        assert_eq!(back.email, dto.email);
        // 해싱은 서비스 계층 책임이므로 여기서는 값이 그대로 왕복한다
        assert_eq!(back.password, dto.password);

        let addresses = back.addresses.unwrap();
        let expected = dto.addresses.unwrap();
        assert_eq!(addresses.len(), expected.len());
        assert_eq!(addresses[0].street, expected[0].street);
        assert_eq!(addresses[0].number, expected[0].number);
        assert_eq!(addresses[0].complement, expected[0].complement);
        assert_eq!(addresses[0].postal_code, expected[0].postal_code);

        let phones = back.phones.unwrap();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].area_code, Some("11".to_string()));
    }

    #[test]
    fn test_to_account_assigns_no_identifier() {
        let account = to_account(&full_account_dto()).unwrap();
        assert!(account.id.is_none());
        assert!(account.addresses[0].id.is_none());
        assert!(account.phones[0].id.is_none());
    }

    #[test]
    fn test_to_account_treats_absent_collections_as_empty() {
        let dto = AccountDto {
            addresses: None,
            phones: None,
            ..full_account_dto()
        };

        let account = to_account(&dto).unwrap();
        assert!(account.addresses.is_empty());
        assert!(account.phones.is_empty());
    }

    #[test]
    fn test_to_account_requires_scalar_fields() {
        for field in ["name", "email", "password"] {
            let mut dto = full_account_dto();
            match field {
                "name" => dto.name = None,
                "email" => dto.email = None,
                _ => dto.password = None,
            }

            match to_account(&dto) {
                Err(AppError::ValidationError(msg)) => assert!(msg.contains(field)),
                other => panic!("expected ValidationError for {}, got {:?}", field, other.err()),
            }
        }
    }

    #[test]
    fn test_to_address_requires_fields() {
        let mut dto = full_account_dto().addresses.unwrap().remove(0);
        dto.street = None;
        assert!(matches!(
            to_address(&dto),
            Err(AppError::ValidationError(_))
        ));

        let mut dto = full_account_dto().addresses.unwrap().remove(0);
        dto.number = None;
        assert!(matches!(
            to_address(&dto),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_to_address_complement_stays_optional() {
        let mut dto = full_account_dto().addresses.unwrap().remove(0);
        dto.complement = None;

        let address = to_address(&dto).unwrap();
        assert_eq!(address.complement, None);
    }

    #[test]
    fn test_to_phone_requires_fields() {
        let dto = PhoneDto {
            id: None,
            area_code: None,
            number: Some("99999-0000".to_string()),
        };
        assert!(matches!(to_phone(&dto), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_merge_account_overlays_present_fields() {
        let entity = stored_account();
        let dto = AccountDto {
            name: Some("Ana Maria".to_string()),
            email: None,
            password: None,
            ..Default::default()
        };

        let merged = merge_account(&dto, &entity);

        assert_eq!(merged.name, "Ana Maria");
        assert_eq!(merged.email, entity.email);
        assert_eq!(merged.password_hash, entity.password_hash);
    }

    #[test]
    fn test_merge_account_keeps_identifier_and_collections() {
        let entity = stored_account();
        let dto = AccountDto {
            name: Some("Renamed".to_string()),
            // 병합에서 컬렉션은 무시된다
            addresses: Some(vec![]),
            phones: Some(vec![]),
            ..Default::default()
        };

        let merged = merge_account(&dto, &entity);

        assert_eq!(merged.id, entity.id);
        assert_eq!(merged.addresses.len(), 1);
        assert_eq!(merged.phones.len(), 1);
        assert_eq!(merged.addresses[0].id, entity.addresses[0].id);
    }

    #[test]
    fn test_merge_account_all_fields_present_takes_dto_values() {
        let entity = stored_account();
        let dto = AccountDto {
            name: Some("Bia".to_string()),
            email: Some("bia@example.com".to_string()),
            password: Some("$2b$04$new.hash".to_string()),
            ..Default::default()
        };

        let merged = merge_account(&dto, &entity);

        assert_eq!(merged.name, "Bia");
        assert_eq!(merged.email, "bia@example.com");
        assert_eq!(merged.password_hash, "$2b$04$new.hash");
    }

    #[test]
    fn test_merge_address_field_by_field() {
        let entity = stored_account().addresses.remove(0);
        let dto = AddressDto {
            street: Some("Avenida Paulista".to_string()),
            number: Some(1000),
            ..Default::default()
        };

        let merged = merge_address(&dto, &entity);

        assert_eq!(merged.id, entity.id);
        assert_eq!(merged.street, "Avenida Paulista");
        assert_eq!(merged.number, 1000);
        assert_eq!(merged.city, entity.city);
        assert_eq!(merged.state, entity.state);
        assert_eq!(merged.postal_code, entity.postal_code);
    }

    #[test]
    fn test_merge_address_complement_cannot_be_cleared() {
        let mut entity = stored_account().addresses.remove(0);
        entity.complement = Some("Fundos".to_string());

        let dto = AddressDto::default();
        let merged = merge_address(&dto, &entity);

        // None은 "변경 없음"이므로 기존 상세 주소가 유지된다
        assert_eq!(merged.complement, Some("Fundos".to_string()));
    }

    #[test]
    fn test_merge_phone_field_by_field() {
        let entity = stored_account().phones.remove(0);
        let dto = PhoneDto {
            number: Some("98888-7777".to_string()),
            ..Default::default()
        };

        let merged = merge_phone(&dto, &entity);

        assert_eq!(merged.id, entity.id);
        assert_eq!(merged.area_code, entity.area_code);
        assert_eq!(merged.number, "98888-7777");
    }
}
