//! 로깅 부트스트랩
//!
//! 라이브러리 자체는 `tracing` 매크로로만 로그를 남깁니다. 이 모듈은
//! 호스트나 테스트가 구독자를 간단히 올릴 수 있게 해 주는 헬퍼입니다.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// 로깅 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 기본 필터 (RUST_LOG가 있으면 그쪽이 우선)
    pub level: String,
    /// 로그 라인에 타깃 모듈 경로를 포함할지
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
        }
    }
}

/// 로깅 시스템 초기화
///
/// 전역 구독자를 한 번만 설치할 수 있으므로 두 번째 호출은 에러입니다.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {e}"))
}
