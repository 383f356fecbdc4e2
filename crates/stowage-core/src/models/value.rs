//! 레코드 값 컨테이너.
//!
//! 저장소가 다루는 값은 항상 구조화된 컨테이너이며 스칼라가 아니다.
//! 원소는 `serde_json::Value` (null/bool/number/string/list/map)로 표현한다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 구조화된 레코드 값
///
/// 빈 리스트가 기본값이다. 레코드가 없을 때도 `None` 대신 빈 컨테이너를 돌려준다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Container {
    /// 순서 있는 리스트
    List(Vec<Value>),
    /// 삽입 순서를 유지하는 키 맵
    Map(Map<String, Value>),
}

impl Default for Container {
    fn default() -> Self {
        Container::List(Vec::new())
    }
}

impl Container {
    /// 빈 컨테이너
    pub fn empty() -> Self {
        Self::default()
    }

    /// 임의의 JSON 값을 컨테이너로 강제 변환
    ///
    /// 배열은 리스트, 객체는 맵, null은 빈 리스트, 스칼라는 원소 하나짜리 리스트가 된다.
    pub fn coerce(value: Value) -> Self {
        match value {
            Value::Array(items) => Container::List(items),
            Value::Object(map) => Container::Map(map),
            Value::Null => Container::default(),
            scalar => Container::List(vec![scalar]),
        }
    }

    /// 원소가 하나도 없는지 여부 (빈 리스트와 빈 맵 모두 해당)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 원소 개수
    pub fn len(&self) -> usize {
        match self {
            Container::List(items) => items.len(),
            Container::Map(map) => map.len(),
        }
    }

    /// 맵이면 키로 조회
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Container::Map(map) => map.get(key),
            Container::List(_) => None,
        }
    }

    /// 리스트면 인덱스로 조회
    pub fn at(&self, index: usize) -> Option<&Value> {
        match self {
            Container::List(items) => items.get(index),
            Container::Map(_) => None,
        }
    }

    /// JSON 값으로 변환
    pub fn into_value(self) -> Value {
        match self {
            Container::List(items) => Value::Array(items),
            Container::Map(map) => Value::Object(map),
        }
    }
}

impl From<Value> for Container {
    fn from(value: Value) -> Self {
        Container::coerce(value)
    }
}

impl From<Vec<Value>> for Container {
    fn from(items: Vec<Value>) -> Self {
        Container::List(items)
    }
}

impl From<Map<String, Value>> for Container {
    fn from(map: Map<String, Value>) -> Self {
        Container::Map(map)
    }
}

impl From<Container> for Value {
    fn from(container: Container) -> Self {
        container.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_empty_list() {
        let empty = Container::default();
        assert_eq!(empty, Container::List(vec![]));
        assert!(empty.is_empty());
    }

    #[test]
    fn empty_map_counts_as_empty() {
        assert!(Container::Map(Map::new()).is_empty());
    }

    #[test]
    fn coerce_shapes() {
        assert_eq!(Container::coerce(json!([1, 2])), Container::List(vec![json!(1), json!(2)]));
        assert!(matches!(Container::coerce(json!({"a": 1})), Container::Map(_)));
        assert_eq!(Container::coerce(Value::Null), Container::default());
        assert_eq!(Container::coerce(json!("x")), Container::List(vec![json!("x")]));
        assert_eq!(Container::coerce(json!(false)), Container::List(vec![json!(false)]));
    }

    #[test]
    fn map_keeps_insertion_order() {
        let value = Container::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let Container::Map(map) = &value else {
            panic!("맵이어야 함");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn accessors() {
        let map = Container::from(json!({"id": 7}));
        assert_eq!(map.get("id"), Some(&json!(7)));
        assert_eq!(map.at(0), None);

        let list = Container::from(json!(["a", "b"]));
        assert_eq!(list.at(1), Some(&json!("b")));
        assert_eq!(list.get("a"), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn nested_values_survive_json() {
        let value = Container::from(json!({
            "n": -42,
            "big": 9_007_199_254_740_993_i64,
            "s": "텍스트",
            "inner": {"list": [1, [2, 3], {"k": null}]}
        }));

        let bytes = serde_json::to_vec(&value).unwrap();
        let back = Container::coerce(serde_json::from_slice(&bytes).unwrap());
        assert_eq!(back, value);
    }
}
