//! # stowage-storage
//!
//! 로컬 저장소 어댑터.
//! SQLite 단일 테이블에 키-값 레코드를 저장하고,
//! 생성 시각 순 목록/페이지 조회를 제공한다.
//!
//! ## 모듈
//! - `sqlite`: 키-값 레코드 저장소 (`StorageAdapter` 구현)
//! - `schema`: 테이블 이름 결정 및 스키마 부트스트랩
//! - `codec`: 레코드 값 ↔ BLOB 변환
//! - `clock`: 시스템 시각 공급자
//! - `error`: 어댑터 에러 타입

pub mod clock;
pub mod codec;
pub mod error;
pub mod schema;
pub mod sqlite;
