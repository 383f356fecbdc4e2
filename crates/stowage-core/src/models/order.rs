//! 정렬 순서.
//!
//! 생성 시각(`created_at`) 기준 오름차순(오래된 순) / 내림차순(최신 순).
//! 모든 변환은 관대하다: 인식하지 못한 값은 오름차순으로 해석한다.

use serde::{Deserialize, Serialize};

/// 오름차순 정렬 코드
pub const ORDER_ASC: i64 = 1;

/// 내림차순 정렬 코드
pub const ORDER_DESC: i64 = 2;

/// 생성 시각 기준 정렬 순서
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// 오래된 순
    #[default]
    Asc,
    /// 최신 순
    Desc,
}

impl SortOrder {
    /// 선택적 정렬 순서 해석 (없으면 오름차순)
    pub fn resolve(ordering: Option<SortOrder>) -> Self {
        ordering.unwrap_or_default()
    }

    /// 정수 코드 해석: `ORDER_DESC`만 내림차순, 나머지는 전부 오름차순
    pub fn from_code(code: i64) -> Self {
        if code == ORDER_DESC {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    /// 정수 코드
    pub fn code(self) -> i64 {
        match self {
            SortOrder::Asc => ORDER_ASC,
            SortOrder::Desc => ORDER_DESC,
        }
    }

    /// `ORDER BY` 방향 키워드
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("desc") || s.eq_ignore_ascii_case("descending") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_desc_code_is_descending() {
        assert_eq!(SortOrder::from_code(ORDER_DESC), SortOrder::Desc);
        assert_eq!(SortOrder::from_code(ORDER_ASC), SortOrder::Asc);
        for code in [0, -1, 3, i64::MAX] {
            assert_eq!(SortOrder::from_code(code), SortOrder::Asc, "code {code}");
        }
    }

    #[test]
    fn text_resolution_is_permissive() {
        assert_eq!(SortOrder::from("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::from(" descending "), SortOrder::Desc);
        assert_eq!(SortOrder::from("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::from("newest"), SortOrder::Asc);
        assert_eq!(SortOrder::from(""), SortOrder::Asc);
    }

    #[test]
    fn sql_keywords() {
        assert_eq!(SortOrder::Asc.as_sql(), "ASC");
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
        assert_eq!(SortOrder::resolve(Some(SortOrder::Desc)).as_sql(), "DESC");
    }

    #[test]
    fn code_roundtrip() {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            assert_eq!(SortOrder::from_code(order.code()), order);
        }
    }
}
