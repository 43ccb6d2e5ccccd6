//! 테스트용 필드 접근 훅
//!
//! 런타임 리플렉션 대신, 테스트 대상이 의도적으로 노출하는 접근 심(seam)을
//! 제공합니다. 테스트/진단 전용이며 비즈니스 로직에서 쓰면 안 됩니다.
//!
//! 대상 타입이 `FieldProbe`를 구현해 노출할 필드를 선택하고, 테스트는
//! `inject`/`extract`로 캡슐화 너머의 상태를 읽고 씁니다. 없는 필드나
//! 타입 불일치는 단정(assertion) 스타일로 즉시 패닉합니다.

use std::any::Any;

/// 테스트가 들여다볼 수 있도록 필드를 노출하는 심
pub trait FieldProbe {
    /// 이름으로 필드 읽기 참조를 반환 (노출하지 않은 이름은 `None`)
    fn probe(&self, name: &str) -> Option<&dyn Any>;

    /// 이름으로 필드 쓰기 참조를 반환
    fn probe_mut(&mut self, name: &str) -> Option<&mut dyn Any>;
}

/// 노출된 필드 값을 꺼냅니다.
///
/// # Panics
/// 필드가 노출되지 않았거나 타입이 다르면 패닉합니다.
pub fn extract<V: Clone + 'static>(target: &dyn FieldProbe, name: &str) -> V {
    let field = target
        .probe(name)
        .unwrap_or_else(|| panic!("필드가 정의되지 않았습니다: {name}"));
    field
        .downcast_ref::<V>()
        .unwrap_or_else(|| panic!("필드 타입 불일치: {name}"))
        .clone()
}

/// 노출된 필드에 값을 주입합니다.
///
/// # Panics
/// 필드가 노출되지 않았거나 타입이 다르면 패닉합니다.
pub fn inject<V: 'static>(target: &mut dyn FieldProbe, name: &str, value: V) {
    let field = target
        .probe_mut(name)
        .unwrap_or_else(|| panic!("필드가 정의되지 않았습니다: {name}"));
    match field.downcast_mut::<V>() {
        Some(slot) => *slot = value,
        None => panic!("필드 타입 불일치: {name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        value: String,
        index: i32,
    }

    impl FieldProbe for Sample {
        fn probe(&self, name: &str) -> Option<&dyn Any> {
            match name {
                "value" => Some(&self.value),
                "index" => Some(&self.index),
                _ => None,
            }
        }

        fn probe_mut(&mut self, name: &str) -> Option<&mut dyn Any> {
            match name {
                "value" => Some(&mut self.value),
                "index" => Some(&mut self.index),
                _ => None,
            }
        }
    }

    #[test]
    fn test_inject_and_extract() {
        let mut s = Sample {
            value: "old".to_string(),
            index: 1,
        };

        inject(&mut s, "value", "xxx".to_string());
        assert_eq!(extract::<String>(&s, "value"), "xxx");
        assert_eq!(extract::<i32>(&s, "index"), 1);
    }

    #[test]
    #[should_panic(expected = "필드가 정의되지 않았습니다")]
    fn test_unknown_field_panics() {
        let s = Sample {
            value: String::new(),
            index: 0,
        };
        let _ = extract::<String>(&s, "missing");
    }

    #[test]
    #[should_panic(expected = "필드 타입 불일치")]
    fn test_type_mismatch_panics() {
        let s = Sample {
            value: String::new(),
            index: 0,
        };
        let _ = extract::<i64>(&s, "index");
    }
}
