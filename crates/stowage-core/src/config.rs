//! 저장소 설정 구조체.
//!
//! 데이터베이스 파일 경로와 테이블 이름 접두사 두 가지만 정의한다.
//! `config` crate를 통해 JSON/TOML/YAML 파일에서 로드할 수 있다.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CoreError;

/// 기본 데이터베이스 파일 이름
const DEFAULT_DB_FILE: &str = "stowage.db";

/// 저장소 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite 데이터베이스 파일 경로
    pub db_path: PathBuf,
    /// 테이블 이름 접두사 (같은 파일에 독립 저장소 여러 개를 둘 때 사용)
    #[serde(default)]
    pub table_prefix: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            table_prefix: None,
        }
    }
}

impl StorageConfig {
    /// 경로와 접두사로 설정 생성
    pub fn new(db_path: impl Into<PathBuf>, table_prefix: Option<String>) -> Self {
        Self {
            db_path: db_path.into(),
            table_prefix,
        }
    }

    /// 설정 파일 로드 (형식은 확장자로 판단) 후 검증
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let loaded: StorageConfig = config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        debug!("저장소 설정 로드: {}", path.display());
        Ok(loaded)
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(CoreError::Validation {
                field: "db_path".to_string(),
                message: "경로가 비어 있습니다".to_string(),
            });
        }

        if let Some(prefix) = &self.table_prefix {
            validate_table_prefix(prefix)?;
        }

        Ok(())
    }
}

/// 테이블 접두사 검증
///
/// 접두사는 SQL 식별자에 그대로 이어 붙기 때문에 ASCII 영숫자와 `_`만 허용하며,
/// 식별자 첫 글자가 되므로 숫자로 시작할 수 없다.
/// 빈 문자열은 접두사 없음과 같다.
pub fn validate_table_prefix(prefix: &str) -> Result<(), CoreError> {
    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(CoreError::Validation {
            field: "table_prefix".to_string(),
            message: "숫자로 시작할 수 없습니다".to_string(),
        });
    }

    if let Some(bad) = prefix
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(CoreError::Validation {
            field: "table_prefix".to_string(),
            message: format!("허용되지 않는 문자 {bad:?} (영숫자와 '_'만 가능)"),
        });
    }
    Ok(())
}
