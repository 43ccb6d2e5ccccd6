//! 10진수 연산 유틸리티
//!
//! `rust_decimal` 기반의 생성/반올림/나눗셈 단축 함수와
//! 로케일을 반영한 금액 포맷터를 제공합니다.
//! 반올림은 전부 half-up(중간값을 0에서 먼 쪽으로) 규칙입니다.

use crate::error::{AppError, AppResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// 문자열을 10진수로 파싱 (실패 시 `None`)
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    Decimal::from_str(value).ok()
}

/// f64를 10진수로 변환
///
/// 이진 부동소수점 잔재를 피하려고 값의 표준 문자열 표현을 경유합니다.
pub fn dec_f64(value: f64) -> Option<Decimal> {
    Decimal::from_str(&value.to_string()).ok()
}

/// 소수부 자릿수를 지정해 half-up으로 반올림
///
/// 자릿수가 모자라면 0으로 채워서 정확히 `scale` 자리를 유지합니다
/// (`2.00`을 5자리로 → `2.00000`).
pub fn scale(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

/// 지정한 자릿수로 반올림되는 나눗셈
///
/// 0으로 나누면 에러입니다. 조용히 특별 취급하지 않습니다.
pub fn div(a: Decimal, b: Decimal, result_scale: u32) -> AppResult<Decimal> {
    a.checked_div(b)
        .map(|q| scale(q, result_scale))
        .ok_or(AppError::DivisionByZero)
}

/// 매퍼로 10진수를 뽑아 전체 합을 구합니다.
pub fn total<I, T, F>(items: I, mapper: F) -> Decimal
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Decimal,
{
    items
        .into_iter()
        .fold(Decimal::ZERO, |acc, item| acc + mapper(&item))
}

/// 자릿수 구분자/소수점 구분자 쌍
///
/// 금액 포맷에 필요한 만큼만 담은 최소 로케일 표현입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    /// 천 단위 구분자
    pub group: &'static str,
    /// 소수점 구분자
    pub decimal: &'static str,
}

impl NumberLocale {
    /// 영어권: 1,000.00
    pub const EN: NumberLocale = NumberLocale { group: ",", decimal: "." };
    /// 러시아어권: 1 000,00 (구분자는 NBSP)
    pub const RU: NumberLocale = NumberLocale { group: "\u{a0}", decimal: "," };
    /// 독일어권: 1.000,00
    pub const DE: NumberLocale = NumberLocale { group: ".", decimal: "," };
}

/// 금액/수량 포맷터
///
/// # Arguments
/// * `value` - 포맷할 값
/// * `fraction_scale` - 소수부 자릿수
/// * `currency` - true면 통화(자릿수를 정확히 맞춤), false면 상품 수량
///   (반올림 후 뒤따르는 0은 생략: `0.10000g` 대신 `0.1g`)
/// * `symbol_at_start` - 심볼을 값 앞에 붙일지 여부
/// * `symbol` - 통화/상품 심볼
/// * `locale` - 구분자 로케일
pub fn format_amount(
    value: Decimal,
    fraction_scale: u32,
    currency: bool,
    symbol_at_start: bool,
    symbol: &str,
    locale: &NumberLocale,
) -> String {
    let rounded = scale(value, fraction_scale);
    let rendered = if currency {
        rounded
    } else {
        rounded.normalize()
    };

    let plain = rendered.to_string();
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::new();
    out.push_str(sign);
    out.push_str(&group_digits(int_part, locale.group));
    if let Some(frac) = frac_part {
        out.push_str(locale.decimal);
        out.push_str(frac);
    }

    if symbol_at_start {
        format!("{symbol}{out}")
    } else {
        format!("{out}{symbol}")
    }
}

/// 정수부를 3자리씩 묶어 구분자를 끼워 넣습니다.
fn group_digits(digits: &str, separator: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(*c);
    }
    out
}
