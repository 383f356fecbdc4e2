//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 어댑터 crate가 이 trait들을 구현하며, 호출자는 `Arc<dyn T>`로 와이어링한다.
//!
//! 모든 연산은 동기(blocking)이다.

pub mod clock;
pub mod storage;
