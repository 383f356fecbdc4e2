//! 키-값 저장소 포트.
//!
//! 구현: `stowage-storage` crate (rusqlite)
//!
//! 계약은 에러를 반환하지 않는다:
//! - 읽기 실패(연결 불가, 쿼리 실패, 미존재 키)는 빈 결과로 정규화
//! - 쓰기 실패는 `false`로 보고

use crate::models::order::SortOrder;
use crate::models::value::Container;

/// 저장소 어댑터 (백엔드와 직접 통신하는 좁은 저장소 계약)
pub trait StorageAdapter: Send + Sync {
    /// 키로 정확히 조회
    ///
    /// 키가 없거나 저장된 값이 비어 있으면 빈 컨테이너. 두 경우는 구별되지 않는다.
    fn get(&self, key: &str) -> Container;

    /// 레코드 삽입 또는 전체 교체 (생성 시각은 이 호출 시점으로 갱신)
    fn set(&self, key: &str, value: &Container) -> bool;

    /// 키 목록 삭제
    ///
    /// 모든 키를 시도하며(중간 중단 없음, 롤백 없음), 하나라도 실패하면 `false`.
    fn delete(&self, keys: &[&str]) -> bool;

    /// 생성 시각 순으로 최대 `limit`개, 앞에서 `offset`개를 건너뛰고 조회
    ///
    /// `offset`이 없으면 0, `ordering`이 없으면 오름차순.
    fn get_list(
        &self,
        limit: u32,
        offset: Option<u32>,
        ordering: Option<SortOrder>,
    ) -> Vec<Container>;

    /// 전체 조회 (정렬 규칙은 `get_list`와 동일)
    fn get_all(&self, ordering: Option<SortOrder>) -> Vec<Container>;

    /// 키별 결과를 담은 삭제
    ///
    /// `delete`와 같은 키를 같은 순서로 시도하되, 어느 키가 실패했는지 보고한다.
    fn delete_detailed(&self, keys: &[&str]) -> DeleteReport {
        DeleteReport {
            outcomes: keys
                .iter()
                .map(|key| (key.to_string(), self.delete(&[key])))
                .collect(),
        }
    }
}

/// 키별 삭제 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    /// (키, 성공 여부) — 입력 순서 유지
    pub outcomes: Vec<(String, bool)>,
}

impl DeleteReport {
    /// 모든 키 삭제 성공 여부 (`delete`의 반환값과 동일)
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|(_, ok)| *ok)
    }

    /// 실패한 키 목록
    pub fn failed_keys(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(key, _)| key.as_str())
            .collect()
    }
}

/// 저장소 매니저
///
/// 어댑터 하나를 감싸 다섯 연산을 그대로 위임하고,
/// 정렬 목록 조회로 만든 파생 조회(가장 오래된/최신 항목)를 더한다.
pub trait StorageManager: Send + Sync {
    /// 위임 대상 어댑터
    fn adapter(&self) -> &dyn StorageAdapter;

    /// 키 조회
    fn get(&self, key: &str) -> Container {
        self.adapter().get(key)
    }

    /// 레코드 저장
    fn set(&self, key: &str, value: &Container) -> bool {
        self.adapter().set(key, value)
    }

    /// 키 목록 삭제
    fn delete(&self, keys: &[&str]) -> bool {
        self.adapter().delete(keys)
    }

    /// 키별 결과를 담은 삭제
    fn delete_detailed(&self, keys: &[&str]) -> DeleteReport {
        self.adapter().delete_detailed(keys)
    }

    /// 페이지 조회
    fn get_list(
        &self,
        limit: u32,
        offset: Option<u32>,
        ordering: Option<SortOrder>,
    ) -> Vec<Container> {
        self.adapter().get_list(limit, offset, ordering)
    }

    /// 전체 조회
    fn get_all(&self, ordering: Option<SortOrder>) -> Vec<Container> {
        self.adapter().get_all(ordering)
    }

    /// 가장 오래된 항목 (없으면 빈 컨테이너)
    fn get_oldest_item(&self) -> Container {
        first_or_empty(self.get_list(1, Some(0), Some(SortOrder::Asc)))
    }

    /// 가장 최근 항목 (없으면 빈 컨테이너)
    fn get_newest_item(&self) -> Container {
        first_or_empty(self.get_list(1, Some(0), Some(SortOrder::Desc)))
    }
}

fn first_or_empty(items: Vec<Container>) -> Container {
    items.into_iter().next().unwrap_or_default()
}
