//! 테이블 이름 결정 및 스키마 부트스트랩.

use rusqlite::Connection;
use tracing::debug;

/// 고정 기본 테이블 이름
pub const BASE_TABLE_NAME: &str = "stowage_records";

/// `<접두사><기본 이름>` 형태의 테이블 이름
///
/// 접두사는 호출 전에 `validate_table_prefix`로 검증되어 있어야 한다.
pub fn table_name(prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{BASE_TABLE_NAME}"),
        None => BASE_TABLE_NAME.to_string(),
    }
}

/// 테이블이 없으면 생성 (멱등)
pub fn ensure_schema(conn: &Connection, table: &str) -> Result<(), rusqlite::Error> {
    debug!("스키마 확인: {table}");

    conn.execute_batch(&format!(
        "
        CREATE TABLE IF NOT EXISTS {table} (
            data_key TEXT PRIMARY KEY,
            data_value BLOB NOT NULL DEFAULT x'',
            created_at INTEGER NOT NULL DEFAULT 0
        );
        "
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_names(conn: &Connection, table: &str) -> Vec<String> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .unwrap();
        let names = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        names
    }

    #[test]
    fn table_name_with_and_without_prefix() {
        assert_eq!(table_name(None), "stowage_records");
        assert_eq!(table_name(Some("cache_")), "cache_stowage_records");
        assert_eq!(table_name(Some("")), "stowage_records");
    }

    #[test]
    fn creates_three_columns() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn, "stowage_records").unwrap();

        assert_eq!(
            column_names(&conn, "stowage_records"),
            ["data_key", "data_value", "created_at"]
        );
    }

    #[test]
    fn bootstrap_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn, "t_stowage_records").unwrap();
        conn.execute(
            "INSERT INTO t_stowage_records (data_key) VALUES ('k')",
            [],
        )
        .unwrap();

        ensure_schema(&conn, "t_stowage_records").unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM t_stowage_records", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn column_defaults() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn, "stowage_records").unwrap();
        conn.execute("INSERT INTO stowage_records (data_key) VALUES ('k')", [])
            .unwrap();

        let (value, created_at): (Vec<u8>, i64) = conn
            .query_row(
                "SELECT data_value, created_at FROM stowage_records WHERE data_key = 'k'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert!(value.is_empty());
        assert_eq!(created_at, 0);
    }
}
