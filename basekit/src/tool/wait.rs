//! 조건 충족 대기 헬퍼
//!
//! 콜백이 참을 반환할 때까지 호출 스레드를 잡아두는 블로킹 폴링입니다.
//! 취소 토큰은 없으며, `std::thread::sleep`은 인터럽트되지 않습니다.
//! 일찍 끝내는 유일한 방법은 콜백이 참이 되는 것입니다.

use super::time::sleep_ms;
use tracing::info;

/// 진행률 로그를 남기는 퍼센트 지점
const PERCENTS: [u64; 5] = [10, 25, 50, 75, 90];

/// 콜백 조건이 충족될 때까지 최대 `secs`초 동안 대기합니다.
///
/// 매 반복마다 콜백을 확인하고, 아직이면 `sleep_time_ms`만큼 잠듭니다.
/// `log_progress`가 켜져 있으면 예산 대비 경과율이 10/25/50/75/90%를
/// 넘을 때마다 한 번씩 진행 로그를 남깁니다.
///
/// # Returns
/// 시간 예산을 초과했으면 true, 조건이 충족돼 끝났으면 false.
/// 콜백이 처음부터 참이면 잠들지 않고 즉시 false.
pub fn wait_condition<F>(
    location: &str,
    secs: u64,
    sleep_time_ms: u64,
    log_progress: bool,
    mut callback: F,
) -> bool
where
    F: FnMut() -> bool,
{
    let budget_ms = secs * 1000;
    let mut counter: u64 = 0;
    let mut pending: Vec<u64> = PERCENTS.to_vec();

    while !callback() {
        let tick = if budget_ms == 0 {
            100
        } else {
            100 * counter / budget_ms
        };

        pending.retain(|percent| {
            if *percent < tick {
                if log_progress {
                    info!("{}: 대기 진행률: {} %", location, percent);
                }
                false
            } else {
                true
            }
        });

        counter += sleep_time_ms;
        if counter > budget_ms {
            break;
        }
        sleep_ms(sleep_time_ms);
    }
    counter > budget_ms
}

/// 슬립 간격이 500ms로 고정된 변형
pub fn wait_condition_default<F>(location: &str, secs: u64, log_progress: bool, callback: F) -> bool
where
    F: FnMut() -> bool,
{
    wait_condition(location, secs, 500, log_progress, callback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_immediate_success_does_not_sleep() {
        let started = Instant::now();
        let exceeded = wait_condition("immediate", 5, 200, false, || true);

        assert!(!exceeded);
        assert!(started.elapsed().as_millis() < 100);
    }

    #[test]
    fn test_never_true_exceeds_budget() {
        let started = Instant::now();
        let exceeded = wait_condition("never", 1, 100, false, || false);

        assert!(exceeded);
        // 예산(1초) 근처까지 기다렸어야 함
        assert!(started.elapsed().as_millis() >= 900);
    }

    #[test]
    fn test_becomes_true_mid_wait() {
        let mut calls = 0;
        let exceeded = wait_condition("third-try", 5, 10, false, || {
            calls += 1;
            calls >= 3
        });

        assert!(!exceeded);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_progress_ticks_rebuilt_per_call() {
        // 두 번 연속 호출해도 같은 결과 (지점 집합은 호출마다 새로 생성)
        for _ in 0..2 {
            let exceeded = wait_condition("ticks", 0, 10, true, || false);
            assert!(exceeded);
        }
    }
}
