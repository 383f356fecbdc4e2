//! 레코드 관련 스토리지 메서드.
//!
//! `try_*` 메서드는 실패 원인을 그대로 돌려주고,
//! `StorageAdapter` 구현은 이를 감싸 빈 결과 / `false`로 바꾼다.

use rusqlite::types::ValueRef;
use rusqlite::{OptionalExtension, Row};
use stowage_core::models::order::SortOrder;
use stowage_core::models::record::Record;
use stowage_core::models::value::Container;
use stowage_core::ports::storage::StorageAdapter;
use tracing::{debug, warn};

use super::SqliteStorageAdapter;
use crate::codec;
use crate::error::StorageError;

/// BLOB 컬럼 바이트 (기본값이 TEXT로 저장된 경우도 허용)
fn value_bytes(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<u8>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Blob(bytes) | ValueRef::Text(bytes) => bytes.to_vec(),
        _ => Vec::new(),
    })
}

impl SqliteStorageAdapter {
    /// 키로 조회
    pub fn try_get(&self, key: &str) -> Result<Container, StorageError> {
        let bytes = self.with_conn(|conn| {
            let bytes = conn
                .query_row(
                    &format!("SELECT data_value FROM {} WHERE data_key = ?1", self.table),
                    rusqlite::params![key],
                    |row| value_bytes(row, 0),
                )
                .optional()?;
            Ok(bytes)
        })?;

        match bytes {
            Some(bytes) => Ok(codec::try_decode(&bytes)?),
            None => Ok(Container::default()),
        }
    }

    /// 키로 레코드 전체 조회 (생성 시각 포함)
    pub fn try_get_record(&self, key: &str) -> Result<Option<Record>, StorageError> {
        let row = self.with_conn(|conn| {
            let row = conn
                .query_row(
                    &format!(
                        "SELECT data_value, created_at FROM {} WHERE data_key = ?1",
                        self.table
                    ),
                    rusqlite::params![key],
                    |row| Ok((value_bytes(row, 0)?, row.get::<_, i64>(1)?)),
                )
                .optional()?;
            Ok(row)
        })?;

        match row {
            Some((bytes, created_at)) => Ok(Some(Record::new(
                key,
                codec::try_decode(&bytes)?,
                created_at,
            ))),
            None => Ok(None),
        }
    }

    /// 레코드 삽입 또는 전체 교체
    ///
    /// 시각 공급자는 한 번만 호출된다.
    pub fn try_set(&self, key: &str, value: &Container) -> Result<(), StorageError> {
        let blob = codec::encode(value)?;
        let created_at = self.clock.now_secs();

        self.with_conn(|conn| {
            conn.execute(
                &format!(
                    "REPLACE INTO {} (data_key, data_value, created_at) VALUES (?1, ?2, ?3)",
                    self.table
                ),
                rusqlite::params![key, blob, created_at],
            )?;
            Ok(())
        })?;

        debug!("레코드 저장: key={key}, created_at={created_at}, bytes={}", blob.len());
        Ok(())
    }

    /// 키 하나 삭제, 삭제된 행 수 반환 (없는 키는 0)
    pub fn try_delete(&self, key: &str) -> Result<usize, StorageError> {
        let deleted = self.with_conn(|conn| {
            Ok(conn.execute(
                &format!("DELETE FROM {} WHERE data_key = ?1", self.table),
                rusqlite::params![key],
            )?)
        })?;

        debug!("레코드 삭제: key={key}, affected={deleted}");
        Ok(deleted)
    }

    /// 생성 시각 순 페이지 조회
    pub fn try_get_list(
        &self,
        limit: u32,
        offset: Option<u32>,
        ordering: Option<SortOrder>,
    ) -> Result<Vec<Container>, StorageError> {
        let direction = SortOrder::resolve(ordering).as_sql();
        let offset = offset.unwrap_or(0);

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT data_value FROM {} ORDER BY created_at {direction}, rowid {direction} \
                 LIMIT ?1 OFFSET ?2",
                self.table
            ))?;

            let values = stmt
                .query_map(
                    rusqlite::params![i64::from(limit), i64::from(offset)],
                    |row| value_bytes(row, 0),
                )?
                .map(|bytes| bytes.map(|b| codec::decode(&b)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(values)
        })
    }

    /// 생성 시각 순 전체 조회
    pub fn try_get_all(&self, ordering: Option<SortOrder>) -> Result<Vec<Container>, StorageError> {
        let direction = SortOrder::resolve(ordering).as_sql();

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT data_value FROM {} ORDER BY created_at {direction}, rowid {direction}",
                self.table
            ))?;

            let values = stmt
                .query_map([], |row| value_bytes(row, 0))?
                .map(|bytes| bytes.map(|b| codec::decode(&b)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(values)
        })
    }

    /// 저장된 레코드 수
    pub fn try_count(&self) -> Result<u64, StorageError> {
        self.with_conn(|conn| {
            let count: i64 =
                conn.query_row(&format!("SELECT COUNT(*) FROM {}", self.table), [], |row| {
                    row.get(0)
                })?;
            Ok(u64::try_from(count).unwrap_or(0))
        })
    }

    /// 저장된 레코드 수 (실패 시 0)
    pub fn len(&self) -> usize {
        match self.try_count() {
            Ok(count) => usize::try_from(count).unwrap_or(usize::MAX),
            Err(e) => {
                warn!("레코드 수 조회 실패: {e}");
                0
            }
        }
    }

    /// 레코드가 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageAdapter for SqliteStorageAdapter {
    fn get(&self, key: &str) -> Container {
        self.try_get(key).unwrap_or_else(|e| {
            warn!("레코드 조회 실패 (key={key}): {e}");
            Container::default()
        })
    }

    fn set(&self, key: &str, value: &Container) -> bool {
        match self.try_set(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!("레코드 저장 실패 (key={key}): {e}");
                false
            }
        }
    }

    fn delete(&self, keys: &[&str]) -> bool {
        // 실패가 있어도 나머지 키는 계속 시도
        keys.iter().fold(true, |status, key| match self.try_delete(key) {
            Ok(_) => status,
            Err(e) => {
                warn!("레코드 삭제 실패 (key={key}): {e}");
                false
            }
        })
    }

    fn get_list(
        &self,
        limit: u32,
        offset: Option<u32>,
        ordering: Option<SortOrder>,
    ) -> Vec<Container> {
        self.try_get_list(limit, offset, ordering)
            .unwrap_or_else(|e| {
                warn!("레코드 목록 조회 실패: {e}");
                Vec::new()
            })
    }

    fn get_all(&self, ordering: Option<SortOrder>) -> Vec<Container> {
        self.try_get_all(ordering).unwrap_or_else(|e| {
            warn!("레코드 전체 조회 실패: {e}");
            Vec::new()
        })
    }
}
