//! 공통 에러 관리
//!
//! 라이브러리 전체에서 사용하는 단일 에러 타입을 정의합니다.
//! "값을 찾지 못함"은 `Option`으로, "수행 자체가 불가능함"은 `AppError`로
//! 구분해서 전달합니다. 두 채널은 절대 합치지 않습니다.

use thiserror::Error;
use tracing::error;

/// 라이브러리 공통 Result 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 공통 애플리케이션 에러 정의
///
/// 설정 오류, 인프라 실패 등 복구 대상이 아닌 에러만 여기에 속합니다.
/// 입력 데이터가 해석되지 않는 경우는 에러가 아니라 `None`으로 처리합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 지원하지 않는 다이제스트 알고리즘 이름 (설정 오류)
    #[error("지원하지 않는 다이제스트 알고리즘: {0}")]
    UnsupportedAlgorithm(String),

    /// 정규식 패턴 자체가 잘못된 경우
    #[error("잘못된 정규식 패턴: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// XML 파싱 또는 XPath 평가 실패
    #[error("XML/XPath 처리 실패: {message}")]
    Xml { message: String },

    /// 리소스 파일 읽기 실패
    #[error("리소스 읽기 실패: {path}")]
    Resource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 0으로 나누기
    #[error("0으로 나눌 수 없습니다")]
    DivisionByZero,

    /// Base64 디코딩 실패
    #[error("Base64 디코딩 실패")]
    Base64Decode(#[from] base64::DecodeError),

    /// 컨테이너에 해당 이름의 빈이 없음
    #[error("빈을 찾을 수 없습니다: {0}")]
    BeanNotFound(String),

    /// 빈은 있지만 요청한 타입이 아님
    #[error("빈 타입 불일치: {0}")]
    BeanTypeMismatch(String),

    /// 기타 내부 에러 (원인 포함 가능)
    #[error("내부 에러: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    /// 메시지와 원인으로 내부 에러를 생성
    pub fn internal<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AppError::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// 메시지만으로 내부 에러를 생성
    pub fn message(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// 전체 스택(원인 포함)을 로깅할지 여부
    ///
    /// 원인 예외를 동반하는 인프라 실패는 전체를, 단순 설정/조회 실패는
    /// 메시지만 남깁니다.
    pub fn log_full_stack(&self) -> bool {
        match self {
            AppError::Resource { .. }
            | AppError::Xml { .. }
            | AppError::InvalidPattern { .. }
            | AppError::Internal { .. } => true,
            AppError::UnsupportedAlgorithm(_)
            | AppError::DivisionByZero
            | AppError::Base64Decode(_)
            | AppError::BeanNotFound(_)
            | AppError::BeanTypeMismatch(_) => false,
        }
    }

    /// 에러를 로깅합니다.
    pub fn log(&self, context: &str) {
        if self.log_full_stack() {
            error!("{} - {:?}", context, self);
        } else {
            error!("{} - {}", context, self);
        }
    }
}

/// 스케줄링된 작업의 에러 핸들러
///
/// `log_full_stack()` 판단에 따라 메시지만 남기거나 원인 체인까지 남깁니다.
pub fn handle_task_error(err: &AppError, context: &str) {
    if err.log_full_stack() {
        error!("작업 실패: {} - {:?}", context, err);
    } else {
        error!("작업 실패: {} - {}", context, err);
    }
}
