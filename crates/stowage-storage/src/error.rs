//! 저장소 어댑터 에러.
//!
//! `StorageAdapter` 계약은 에러를 삼키지만,
//! 생성자와 `try_*` 메서드는 이 타입으로 원인을 그대로 전달한다.

use stowage_core::error::CoreError;
use thiserror::Error;

/// SQLite 어댑터 에러
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite 실행 실패
    #[error("SQLite 에러: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// 값 직렬화/역직렬화 실패
    #[error("값 코덱 에러: {0}")]
    Codec(#[from] serde_json::Error),

    /// 테이블 접두사에 허용되지 않는 문자가 포함됨
    #[error("잘못된 테이블 접두사: {0:?}")]
    InvalidTablePrefix(String),

    /// 코어 에러 (설정 검증 등)
    #[error(transparent)]
    Core(#[from] CoreError),
}
