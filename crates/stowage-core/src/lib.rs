//! # stowage-core
//!
//! Stowage 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 저장소 어댑터와 매니저가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 레코드 값 컨테이너, 정렬 순서, 레코드 구조체
//! - [`ports`] — 포트 인터페이스 (`StorageAdapter`, `StorageManager`, `Clock`)
//! - [`manager`] — 어댑터를 감싸는 기본 매니저 파사드
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 저장소 설정 구조체 및 파일 로드

pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod ports;
