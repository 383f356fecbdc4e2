//! SQLite 저장소 어댑터.
//!
//! `StorageAdapter` 포트 구현.
//!
//! # 모듈 구조
//! - `records`: 레코드 조회/저장/삭제/목록 (StorageAdapter 포트)
//!
//! 연결은 첫 연산에서 지연 생성되어 어댑터 수명 동안 재사용된다.
//! 연결 슬롯은 `Mutex`로 감싸므로 여러 스레드가 하나의 어댑터를 공유해도 접근이 직렬화된다.

mod records;

use parking_lot::Mutex;
use rusqlite::Connection;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use stowage_core::config::{validate_table_prefix, StorageConfig};
use stowage_core::ports::clock::Clock;
use tracing::info;

use crate::clock::SystemClock;
use crate::error::StorageError;
use crate::schema;

/// 잠금 대기 시간 (다른 프로세스가 같은 파일을 쓰는 경우)
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// 데이터베이스 위치
#[derive(Debug, Clone, PartialEq, Eq)]
enum DbLocation {
    File(PathBuf),
    Memory,
}

/// SQLite 키-값 저장소 — `StorageAdapter` 포트 구현
pub struct SqliteStorageAdapter {
    location: DbLocation,
    table: String,
    clock: Arc<dyn Clock>,
    conn: Mutex<Option<Connection>>,
}

impl SqliteStorageAdapter {
    /// 파일 기반 저장소 생성
    ///
    /// 이 시점에는 파일을 열지 않는다. 접두사는 ASCII 영숫자와 `_`만 허용한다.
    pub fn new(path: impl AsRef<Path>, table_prefix: Option<&str>) -> Result<Self, StorageError> {
        Self::build(DbLocation::File(path.as_ref().to_path_buf()), table_prefix)
    }

    /// 인메모리 저장소 생성 (테스트용)
    pub fn in_memory(table_prefix: Option<&str>) -> Result<Self, StorageError> {
        Self::build(DbLocation::Memory, table_prefix)
    }

    /// 설정으로 저장소 생성
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        config.validate()?;
        Self::new(&config.db_path, config.table_prefix.as_deref())
    }

    /// 시각 공급자 교체 (기본값: `SystemClock`)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// 레코드 테이블 이름
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// 연결이 이미 열렸는지 여부
    pub fn is_connected(&self) -> bool {
        self.conn.lock().is_some()
    }

    fn build(location: DbLocation, table_prefix: Option<&str>) -> Result<Self, StorageError> {
        if let Some(prefix) = table_prefix {
            validate_table_prefix(prefix)
                .map_err(|_| StorageError::InvalidTablePrefix(prefix.to_string()))?;
        }

        Ok(Self {
            location,
            table: schema::table_name(table_prefix),
            clock: Arc::new(SystemClock),
            conn: Mutex::new(None),
        })
    }

    /// 연결 열기 + PRAGMA + 스키마 부트스트랩
    fn connect(&self) -> Result<Connection, StorageError> {
        let conn = match &self.location {
            DbLocation::File(path) => {
                let conn = Connection::open(path)?;
                let journal_mode: String =
                    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
                conn.pragma_update(None, "synchronous", "NORMAL")?;
                info!(
                    "SQLite 저장소 연결: {} (journal_mode={journal_mode})",
                    path.display()
                );
                conn
            }
            DbLocation::Memory => {
                let conn = Connection::open_in_memory()?;
                info!("인메모리 SQLite 저장소 연결");
                conn
            }
        };
        conn.busy_timeout(BUSY_TIMEOUT)?;

        schema::ensure_schema(&conn, &self.table)?;
        Ok(conn)
    }

    /// 연결을 (필요하면 열어서) 빌려 작업 실행
    ///
    /// 연결 열기에 실패하면 슬롯은 비어 있는 채로 남고 다음 호출에서 다시 연다.
    pub(crate) fn with_conn<T>(
        &self,
        op: impl FnOnce(&Connection) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut slot = self.conn.lock();
        let conn = match &mut *slot {
            Some(conn) => conn,
            empty => empty.insert(self.connect()?),
        };
        op(conn)
    }
}

impl fmt::Debug for SqliteStorageAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteStorageAdapter")
            .field("location", &self.location)
            .field("table", &self.table)
            .field("connected", &self.is_connected())
            .finish()
    }
}
