//! basekit — 하위 프로젝트의 보일러플레이트를 줄이기 위한 공통 유틸리티
//!
//! 컬렉션 생성, 시간 변환, 10진수 연산, 문자열/인코딩, 정규식/XPath 파싱,
//! 조건 대기, 컨테이너 접근 파사드를 한곳에 모았습니다. 각 헬퍼는 상태가
//! 없는(혹은 사소하게만 있는) 독립 함수이며, 실패는 두 채널로 구분합니다:
//! "해석 못 함"은 `Option`, "수행 불가"는 `AppError`.

pub mod context;
pub mod error;
pub mod logging;
pub mod resource;
pub mod testing;
pub mod tool;

// Re-export commonly used types
pub use context::{BeanHandle, BeanRegistry, ContextFacade, MapRegistry, PRODUCTION_PROFILE};
pub use error::{handle_task_error, AppError, AppResult};
pub use logging::{init_logging, LoggingConfig};
pub use resource::Resources;
pub use tool::{Clock, FixedClock, NumberLocale, SystemClock};
