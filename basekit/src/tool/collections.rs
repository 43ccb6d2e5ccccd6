//! 컬렉션 생성/변환 유틸리티
//!
//! 항상 새로운 컨테이너를 만들어 반환하며 입력을 공유(alias)하지 않습니다.
//! 없는 컬렉션(`None`)은 계약에 따라 빈 컬렉션으로 취급합니다.

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

/// 반복 가능한 입력을 새 `Vec`으로 수집
pub fn list<I: IntoIterator>(items: I) -> Vec<I::Item> {
    items.into_iter().collect()
}

/// null-safe 리스트 생성: 없는 입력은 빈 리스트로 취급
pub fn list_opt<T: Clone>(items: Option<&[T]>) -> Vec<T> {
    items.map(|s| s.to_vec()).unwrap_or_default()
}

/// 반복 가능한 입력을 새 `HashSet`으로 수집
pub fn set_of<I>(items: I) -> HashSet<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    items.into_iter().collect()
}

/// 두 슬라이스를 하나의 새 `Vec`으로 연결
pub fn concat<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(first.len() + second.len());
    result.extend_from_slice(first);
    result.extend_from_slice(second);
    result
}

/// 술어를 만족하는 원소만 원래 순서대로 모은 새 리스트를 반환
pub fn filter<T, P>(coll: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    coll.iter().filter(|&item| predicate(item)).cloned().collect()
}

/// `filter`의 null-safe 오버로드: 입력이 없으면 결과도 없음
///
/// 빈 리스트가 아니라 `None`을 돌려주는 정책이라는 점에 주의.
pub fn filter_opt<T, P>(coll: Option<&[T]>, predicate: P) -> Option<Vec<T>>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    coll.map(|c| filter(c, predicate))
}

/// 첫 원소 반환 (빈 컬렉션이면 `None`)
pub fn first<T: Clone>(coll: &[T]) -> Option<T> {
    coll.first().cloned()
}

/// 값이 있을 때만 추가하고, 실제로 추가했는지 여부를 반환
pub fn add_if<T>(coll: &mut Vec<T>, item: Option<T>) -> bool {
    match item {
        Some(value) => {
            coll.push(value);
            true
        }
        None => false,
    }
}

/// 평탄한 (키, 값, 키, 값, ...) 배열을 삽입 순서 보존 맵으로 묶습니다.
///
/// 홀수 길이 입력은 마지막 키가 `None` 값을 갖는 것으로 취급합니다.
/// 결과 크기는 `ceil(len / 2)` 입니다.
pub fn pack_map<T>(array: &[T]) -> IndexMap<T, Option<T>>
where
    T: Clone + Eq + Hash,
{
    let mut map = IndexMap::new(); // 순서가 중요함
    let mut chunks = array.chunks_exact(2);
    for pair in chunks.by_ref() {
        map.insert(pair[0].clone(), Some(pair[1].clone()));
    }
    if let [trailing] = chunks.remainder() {
        map.insert(trailing.clone(), None);
    }
    map
}

/// 컬렉션을 키/값 함수로 맵으로 변환 (중복 키는 마지막 값이 이김)
pub fn to_map<I, T, K, V, KF, VF>(collection: I, key_fn: KF, value_fn: VF) -> HashMap<K, V>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
{
    collection
        .into_iter()
        .map(|item| (key_fn(&item), value_fn(&item)))
        .collect()
}

/// `to_map`의 병합 변형: 키가 겹치면 `merge_fn`으로 값을 합칩니다.
pub fn to_map_merged<I, T, K, V, KF, VF, MF>(
    collection: I,
    key_fn: KF,
    value_fn: VF,
    merge_fn: MF,
) -> HashMap<K, V>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
    MF: Fn(V, V) -> V,
{
    let mut map: HashMap<K, V> = HashMap::new();
    for item in collection {
        let key = key_fn(&item);
        let value = value_fn(&item);
        match map.remove(&key) {
            Some(existing) => {
                map.insert(key, merge_fn(existing, value));
            }
            None => {
                map.insert(key, value);
            }
        }
    }
    map
}

/// 포함 여부 검사: `all=true`는 모든 항목 포함(conjunctive),
/// `all=false`는 하나라도 포함(disjunctive)을 뜻합니다.
///
/// 빈 `items`에 대해 conjunctive는 공진리(true), disjunctive는 false.
/// 이 비대칭은 집합 포함 법칙에서 나온 것으로, 일부러 유지합니다.
pub fn contains<T: PartialEq>(coll: &[T], all: bool, items: &[T]) -> bool {
    if all {
        items.iter().all(|item| coll.contains(item))
    } else {
        coll.iter().any(|item| items.contains(item))
    }
}

/// 컬렉션에서 키 속성만 뽑아 집합으로 만듭니다.
pub fn extract<I, T, K, F>(collection: I, key_fn: F) -> HashSet<K>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    collection.into_iter().map(|item| key_fn(&item)).collect()
}

/// 값이 없는 키들을 찾습니다.
pub fn empty_keys<K, V>(map: &HashMap<K, V>, keys: &[K]) -> HashSet<K>
where
    K: Eq + Hash + Clone,
{
    keys.iter()
        .filter(|&key| !map.contains_key(key))
        .cloned()
        .collect()
}

/// null-safe 문자열 변환: 없는 값은 빈 문자열
pub fn null_safe<T: Display>(value: Option<&T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
