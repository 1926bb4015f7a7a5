//! 계정 관련 전송 객체 모듈
//!
//! 계정, 주소, 전화번호의 외부 표현을 정의합니다.
//! 등록 요청과 부분 업데이트 요청, 그리고 조회 응답이
//! 모두 동일한 DTO 타입을 사용합니다.

pub mod account_dto;
pub mod address_dto;
pub mod phone_dto;

pub use account_dto::AccountDto;
pub use address_dto::AddressDto;
pub use phone_dto::PhoneDto;
