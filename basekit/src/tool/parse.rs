//! 간단한 파싱 유틸리티
//!
//! 정규식 그룹 추출, XPath 질의, enum/숫자/날짜 파싱을 제공합니다.
//!
//! 실패 철학이 둘로 나뉩니다: 입력이 해석되지 않는 경우(매칭 없음,
//! 모르는 enum 이름)는 `None`, 패턴이나 XML 자체가 잘못된 경우는
//! `AppError`입니다.

use crate::error::{AppError, AppResult};
use chrono::NaiveDate;
use regex::RegexBuilder;
use sxd_document::parser;
use sxd_xpath::{Context, Factory, Value};
use tracing::debug;

/// 정규식으로 지정한 캡처 그룹들을 추출합니다.
///
/// 패턴은 대소문자 무시 + DOTALL + MULTILINE으로 컴파일됩니다.
/// 매칭이 없으면 `Ok(None)`. `(..)?` 같은 조건부 그룹이 매칭에
/// 참여하지 않았다면 결과에서 조용히 빠집니다 (`None` 자리 표시 없음).
pub fn regexp_groups(
    text: &str,
    pattern: &str,
    groups: &[usize],
) -> AppResult<Option<Vec<String>>> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .multi_line(true)
        .build()
        .map_err(|e| AppError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;

    Ok(re.captures(text).map(|caps| {
        groups
            .iter()
            .filter_map(|&g| caps.get(g).map(|m| m.as_str().to_string()))
            .collect()
    }))
}

/// 요청한 그룹들을 요청 순서대로 이어 붙여 하나의 문자열로 반환합니다.
pub fn regexp(text: &str, pattern: &str, groups: &[usize]) -> AppResult<Option<String>> {
    Ok(regexp_groups(text, pattern, groups)?.map(|parts| parts.concat()))
}

/// XPath 질의를 평가해 문자열 결과로 강제 변환합니다.
pub fn xpath(xml: &str, query: &str) -> AppResult<String> {
    with_xpath_value(xml, query, None, |value| value.string())
}

/// 단일 prefix→URI 네임스페이스 매핑을 적용한 XPath 질의
pub fn xpath_with_ns(xml: &str, query: &str, namespace: (&str, &str)) -> AppResult<String> {
    with_xpath_value(xml, query, Some(namespace), |value| value.string())
}

/// 노드 집합 결과를 각 노드의 문자열 값으로 반환합니다.
///
/// 노드 집합이 아닌 결과(문자열/숫자 등)는 단일 원소 리스트가 됩니다.
pub fn xpath_nodes(
    xml: &str,
    query: &str,
    namespace: Option<(&str, &str)>,
) -> AppResult<Vec<String>> {
    with_xpath_value(xml, query, namespace, |value| match value {
        Value::Nodeset(nodes) => nodes
            .document_order()
            .iter()
            .map(|node| node.string_value())
            .collect(),
        other => vec![other.string()],
    })
}

// Value가 문서 수명에 묶이므로 파싱/평가/추출을 한 스코프에서 처리
fn with_xpath_value<R>(
    xml: &str,
    query: &str,
    namespace: Option<(&str, &str)>,
    extract: impl FnOnce(&Value<'_>) -> R,
) -> AppResult<R> {
    let package = parser::parse(xml).map_err(|e| AppError::Xml {
        message: format!("XML 파싱 실패: {e:?}"),
    })?;
    let document = package.as_document();

    let factory = Factory::new();
    let xpath = factory
        .build(query)
        .map_err(|e| AppError::Xml {
            message: format!("XPath 컴파일 실패: {query} ({e})"),
        })?
        .ok_or_else(|| AppError::Xml {
            message: format!("빈 XPath 질의: {query}"),
        })?;

    let mut context = Context::new();
    if let Some((prefix, uri)) = namespace {
        context.set_namespace(prefix, uri);
    }

    let value = xpath.evaluate(&context, document.root()).map_err(|e| {
        AppError::Xml {
            message: format!("XPath 평가 실패: {query} ({e})"),
        }
    })?;

    Ok(extract(&value))
}

/// 문자열을 enum 상수로 파싱합니다. 모르는 이름이나 없는 입력은 `None`.
pub fn parse_enum<E: std::str::FromStr>(value: Option<&str>) -> Option<E> {
    value.and_then(|s| s.parse().ok())
}

/// best-effort 숫자 파싱
pub fn parse_number<N: std::str::FromStr>(value: &str) -> Option<N> {
    value.parse().ok()
}

/// 패턴으로 날짜만 파싱합니다 (시각과 무관).
pub fn parse_local_date(value: &str, pattern: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, pattern) {
        Ok(d) => Some(d),
        Err(e) => {
            debug!("날짜 파싱 실패: {} ({})", value, e);
            None
        }
    }
}
