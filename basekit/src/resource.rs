//! 논리 경로 기반 리소스 로딩
//!
//! "이 이름의 리소스를 바이트/문자열로 읽어라"는 좁은 계약입니다.
//! 루트 디렉터리를 기준으로 한 불투명한 바이트 소스로 취급하며,
//! I/O 실패는 원인을 담은 `AppError`로 전파합니다.

use crate::error::{AppError, AppResult};
use crate::tool::text::utf8_string;
use std::path::{Path, PathBuf};

/// 루트 디렉터리 아래의 리소스 소스
#[derive(Debug, Clone)]
pub struct Resources {
    root: PathBuf,
}

impl Resources {
    /// 루트 디렉터리를 지정해 생성
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 논리 경로의 리소스를 바이트로 읽습니다.
    pub fn read_bytes(&self, path: &str) -> AppResult<Vec<u8>> {
        let full = self.resolve(path);
        std::fs::read(&full).map_err(|e| AppError::Resource {
            path: full.display().to_string(),
            source: e,
        })
    }

    /// 논리 경로의 리소스를 UTF-8 문자열로 읽습니다.
    pub fn read_string(&self, path: &str) -> AppResult<String> {
        Ok(utf8_string(&self.read_bytes(path)?))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(Path::new(path))
    }
}
