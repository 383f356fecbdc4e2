//! 도메인 모델.
//!
//! - `value`: 레코드 값 컨테이너 (리스트 / 키 맵)
//! - `order`: 생성 시각 기준 정렬 순서
//! - `record`: 영속화 단위 (키, 값, 생성 시각)

pub mod order;
pub mod record;
pub mod value;
