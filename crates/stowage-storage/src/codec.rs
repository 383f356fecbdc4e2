//! 레코드 값 ↔ BLOB 변환.
//!
//! 저장 형식은 JSON 바이트열이다. 정수, 문자열, 중첩 컨테이너가 손실 없이 왕복하고,
//! 키 맵의 삽입 순서도 유지된다.

use stowage_core::models::value::Container;
use tracing::warn;

/// 컨테이너를 BLOB으로 인코딩
pub fn encode(value: &Container) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}

/// BLOB을 컨테이너로 디코딩
///
/// 빈 BLOB(컬럼 기본값)은 빈 컨테이너. 디코딩 결과가 컨테이너가 아니면 강제 변환한다.
pub fn try_decode(bytes: &[u8]) -> Result<Container, serde_json::Error> {
    if bytes.is_empty() {
        return Ok(Container::default());
    }
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(Container::coerce(value))
}

/// BLOB을 컨테이너로 디코딩 (실패 시 빈 컨테이너)
pub fn decode(bytes: &[u8]) -> Container {
    match try_decode(bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!("값 디코딩 실패, 빈 컨테이너로 대체: {e}");
            Container::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encode_decode_nested() {
        let value = Container::from(json!({
            "id": 12,
            "name": "frame",
            "children": [{"id": 1}, {"id": 2, "tags": ["x", "y"]}]
        }));

        let bytes = encode(&value).unwrap();
        assert_eq!(decode(&bytes), value);
    }

    #[test]
    fn empty_blob_is_empty_container() {
        assert_eq!(decode(b""), Container::default());
    }

    #[test]
    fn scalar_payload_is_wrapped() {
        assert_eq!(decode(b"42"), Container::from(vec![json!(42)]));
        assert_eq!(decode(b"null"), Container::default());
    }

    #[test]
    fn garbage_decodes_to_empty() {
        assert!(try_decode(b"\x00\xffnot json").is_err());
        assert!(decode(b"\x00\xffnot json").is_empty());
    }
}
