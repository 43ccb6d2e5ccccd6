//! 문자열/인코딩 유틸리티
//!
//! UTF-8 변환, Base64, 다이제스트 해싱, 잘라내기, 템플릿 치환 등
//! 자주 쓰는 단축 함수를 모았습니다.

use crate::error::{AppError, AppResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::collections::HashMap;
use uuid::Uuid;

/// 문자열을 UTF-8 바이트로 변환
pub fn utf8_bytes(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// 바이트를 UTF-8 문자열로 변환
///
/// 잘못된 시퀀스는 대체 문자로 치환합니다. 에러를 내지 않는 전함수입니다.
pub fn utf8_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Base64 인코딩
pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Base64 디코딩
pub fn base64_decode(encoded: &str) -> AppResult<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}

/// SHA-256 해시 (소문자 16진수)
pub fn sha256(s: &str) -> String {
    hex::encode(Sha256::digest(s.as_bytes()))
}

/// 이름으로 지정한 알고리즘의 다이제스트를 계산합니다.
///
/// 지원: SHA-256, SHA-384, SHA-512. 모르는 이름은 설정 오류로 보고
/// `AppError`를 반환합니다. 결과는 소문자 16진수입니다.
pub fn digest(s: &str, algorithm: &str) -> AppResult<String> {
    let bytes = match algorithm {
        "SHA-256" => Sha256::digest(s.as_bytes()).to_vec(),
        "SHA-384" => Sha384::digest(s.as_bytes()).to_vec(),
        "SHA-512" => Sha512::digest(s.as_bytes()).to_vec(),
        other => return Err(AppError::UnsupportedAlgorithm(other.to_string())),
    };
    Ok(hex::encode(bytes))
}

/// 최대 n 글자(문자 단위)로 잘라냅니다. n이 길이 이상이면 그대로.
pub fn truncate(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]*)\}").expect("placeholder pattern"));

/// `${name}` 플레이스홀더를 매핑 값으로 치환하고 작은따옴표를
/// 큰따옴표로 정규화합니다.
///
/// 코드에 박아 넣는 구조화 마크업 리터럴을 만들 때 씁니다.
/// 매핑에 없는 이름은 빈 문자열로 치환되며 에러가 아닙니다.
pub fn fill_template(template: &str, values: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            values.get(&caps[1]).cloned().unwrap_or_default()
        })
        .replace('\'', "\"")
}

/// 임의의 고유 문자열 (UUID v4)
pub fn guid() -> String {
    Uuid::new_v4().to_string()
}
