//! 기본 저장소 매니저.
//!
//! 주입된 어댑터 하나에 모든 연산을 위임하는 얇은 파사드.
//! 어댑터 참조 외의 상태, 캐시, 검증은 없다.

use std::fmt;
use std::sync::Arc;

use crate::error::CoreError;
use crate::ports::storage::{StorageAdapter, StorageManager};

/// 어댑터 위임 매니저
///
/// 어댑터 없이 생성한 뒤 나중에 설정할 수 있다.
/// 어댑터가 설정되기 전에 저장소 연산을 호출하면 panic 한다.
#[derive(Default, Clone)]
pub struct AdapterManager {
    adapter: Option<Arc<dyn StorageAdapter>>,
}

impl AdapterManager {
    /// 어댑터 없는 매니저 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 어댑터를 주입해 생성
    pub fn with_adapter(adapter: Arc<dyn StorageAdapter>) -> Self {
        Self {
            adapter: Some(adapter),
        }
    }

    /// 어댑터 설정 (기존 어댑터는 교체)
    pub fn set_adapter(&mut self, adapter: Arc<dyn StorageAdapter>) {
        self.adapter = Some(adapter);
    }

    /// 어댑터 설정 여부
    pub fn has_adapter(&self) -> bool {
        self.adapter.is_some()
    }

    /// 설정된 어댑터 (없으면 에러)
    pub fn try_adapter(&self) -> Result<&Arc<dyn StorageAdapter>, CoreError> {
        self.adapter.as_ref().ok_or(CoreError::AdapterNotConfigured)
    }
}

impl StorageManager for AdapterManager {
    /// # Panics
    ///
    /// 어댑터가 설정되지 않은 경우.
    fn adapter(&self) -> &dyn StorageAdapter {
        match &self.adapter {
            Some(adapter) => adapter.as_ref(),
            None => panic!("{}", CoreError::AdapterNotConfigured),
        }
    }
}

impl fmt::Debug for AdapterManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterManager")
            .field("has_adapter", &self.has_adapter())
            .finish()
    }
}
