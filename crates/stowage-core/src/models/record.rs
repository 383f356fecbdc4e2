//! 영속화 단위 레코드.

use serde::{Deserialize, Serialize};

use super::value::Container;

/// 저장된 레코드 (키, 값, 생성 시각)
///
/// 같은 키로 다시 `set` 하면 값과 생성 시각이 모두 새 쓰기의 값으로 교체된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 고유 키
    pub key: String,
    /// 구조화된 값
    pub value: Container,
    /// 생성 시각 (Unix 초)
    pub created_at: i64,
}

impl Record {
    /// 새 레코드
    pub fn new(key: impl Into<String>, value: Container, created_at: i64) -> Self {
        Self {
            key: key.into(),
            value,
            created_at,
        }
    }
}
