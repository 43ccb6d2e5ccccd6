//! 시간 유틸리티
//!
//! UTC 기준의 현재 시각, 구형(legacy) 시간 표현과의 상호 변환,
//! 포맷/파싱 단축 함수를 제공합니다.
//!
//! 전역 클럭 오버라이드 대신 `Clock` 트레이트를 주입하는 방식을 씁니다.
//! 프로덕션은 `SystemClock`, 테스트는 `FixedClock`을 쓰면 병렬 테스트에서도
//! 안전합니다.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// 현재 시각의 공급원
pub trait Clock: Send + Sync {
    /// UTC 기준 현재 시각
    fn now(&self) -> DateTime<Utc>;
}

/// 벽시계 구현
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 고정 시각 클럭 (결정적 테스트용)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 현재 시각 (항상 UTC)
pub fn now() -> DateTime<Utc> {
    SystemClock.now()
}

/// 주입된 클럭 기준의 현재 시각
pub fn now_with(clock: &dyn Clock) -> DateTime<Utc> {
    clock.now()
}

/// 주어진 시각이 과거인지 (엄격한 미만 비교)
pub fn in_past(t: DateTime<Utc>, clock: &dyn Clock) -> bool {
    t < clock.now()
}

/// 구형 단일 시점 객체(`SystemTime`)로 변환
///
/// 밀리초 단위로 절삭됩니다. 왕복 비교는 밀리초 정밀도로 해야 합니다.
pub fn to_legacy(t: DateTime<Utc>) -> SystemTime {
    let millis = t.timestamp_millis();
    if millis >= 0 {
        UNIX_EPOCH + Duration::from_millis(millis as u64)
    } else {
        UNIX_EPOCH - Duration::from_millis(millis.unsigned_abs())
    }
}

/// `SystemTime`을 UTC zoned 시각으로 변환 (밀리초 단위)
pub fn from_legacy(t: SystemTime) -> DateTime<Utc> {
    let millis = match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_millis() as i64,
        Err(e) => -(e.duration().as_millis() as i64),
    };
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// 존 정보를 가진 캘린더 표현(`DateTime<FixedOffset>`)으로 변환
///
/// 순간(instant)은 같지만 존의 "정체성"은 달라집니다
/// (`Utc` vs 오프셋 0의 `FixedOffset`). 왕복 동등성 비교는 반드시
/// instant 기준으로 해야 합니다.
pub fn to_calendar(t: DateTime<Utc>) -> DateTime<FixedOffset> {
    t.fixed_offset()
}

/// 캘린더 표현을 UTC zoned 시각으로 변환
pub fn from_calendar(t: DateTime<FixedOffset>) -> DateTime<Utc> {
    t.with_timezone(&Utc)
}

/// 존 없는 날짜를 UTC 자정 기준 zoned 시각으로 변환
pub fn from_local_date(d: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0).unwrap_or(NaiveDateTime::MIN))
}

/// 캘린더 표현에서 날짜만 추출
pub fn to_local_date(t: DateTime<FixedOffset>) -> NaiveDate {
    t.date_naive()
}

/// zoned 시각을 패턴 문자열로 렌더링
pub fn format_date_time(t: DateTime<Utc>, pattern: &str) -> String {
    t.format(pattern).to_string()
}

/// 문자열을 로컬 날짜-시각으로 파싱
///
/// 날짜-시각 패턴을 먼저 시도하고, 실패하면 같은 문자열을 날짜로만 보고
/// 자정을 붙입니다. 둘 다 실패하면 `None`.
pub fn parse_local(value: &str, pattern: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, pattern)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, pattern)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// 문자열을 UTC zoned 시각으로 파싱, 실패 시 기본값 사용
pub fn parse_date(value: &str, pattern: &str, default: DateTime<Utc>) -> DateTime<Utc> {
    match parse_local(value, pattern) {
        Some(t) => Utc.from_utc_datetime(&t),
        None => {
            debug!("날짜 파싱 실패: {} (패턴: {})", value, pattern);
            default
        }
    }
}

/// 인터럽트 불가능한 밀리초 단위 슬립
pub fn sleep_ms(millis: u64) {
    std::thread::sleep(Duration::from_millis(millis));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_fixed_clock_is_deterministic() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = FixedClock(t);
        assert_eq!(now_with(&clock), t);
        assert_eq!(now_with(&clock), t);
    }

    #[test]
    fn test_in_past_is_strict() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = FixedClock(t);
        assert!(!in_past(t, &clock));
        assert!(in_past(t - chrono::Duration::seconds(1), &clock));
        assert!(!in_past(t + chrono::Duration::seconds(1), &clock));
    }

    #[test]
    fn test_legacy_round_trip_millis() {
        let t = now();
        let back = from_legacy(to_legacy(t));
        // 밀리초 이하 절삭 허용
        assert_eq!(back.timestamp_millis(), t.timestamp_millis());
    }

    #[test]
    fn test_calendar_round_trip_instant() {
        let t = Utc.with_ymd_and_hms(2023, 7, 15, 8, 30, 45).unwrap();
        let cal = to_calendar(t);
        let back = from_calendar(cal);

        // 존 정체성이 아니라 instant 기준으로 비교해야 함
        assert_eq!(back.timestamp(), t.timestamp());
        assert_eq!(back, t);
    }

    #[test]
    fn test_from_local_date_is_utc_midnight() {
        let d = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
        let z = from_local_date(d);
        assert_eq!(z.hour(), 0);
        assert_eq!(z.minute(), 0);
        assert_eq!(z.date_naive(), d);
    }

    #[test]
    fn test_to_local_date() {
        let t = Utc.with_ymd_and_hms(2023, 7, 15, 23, 59, 59).unwrap();
        assert_eq!(
            to_local_date(to_calendar(t)),
            NaiveDate::from_ymd_opt(2023, 7, 15).unwrap()
        );
    }

    #[test]
    fn test_format_date_time() {
        let t = Utc.with_ymd_and_hms(2023, 7, 15, 8, 5, 0).unwrap();
        assert_eq!(format_date_time(t, "%Y-%m-%d %H:%M:%S"), "2023-07-15 08:05:00");
    }

    #[test]
    fn test_parse_local_with_fallback() {
        let full = parse_local("2023-07-15 10:20:30", "%Y-%m-%d %H:%M:%S");
        assert_eq!(
            full,
            NaiveDate::from_ymd_opt(2023, 7, 15)
                .unwrap()
                .and_hms_opt(10, 20, 30)
        );

        // 날짜만 주면 자정으로 고정
        let date_only = parse_local("2023-07-15", "%Y-%m-%d");
        assert_eq!(
            date_only,
            NaiveDate::from_ymd_opt(2023, 7, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
        );

        assert_eq!(parse_local("not a date", "%Y-%m-%d"), None);
    }

    #[test]
    fn test_parse_date_default() {
        let default = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("garbage", "%Y-%m-%d", default), default);

        let parsed = parse_date("2023-07-15", "%Y-%m-%d", default);
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2023, 7, 15, 0, 0, 0).unwrap()
        );
    }
}
