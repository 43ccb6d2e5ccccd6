//! 컨테이너 접근 파사드
//!
//! 이 라이브러리는 DI 컨테이너를 구현하지 않습니다. 호스트가 제공하는
//! 컨테이너를 `BeanRegistry`라는 좁은 계약으로 받아, 나머지 코드가 필요로
//! 하는 표면(이름/타입 조회, 존재 확인, 프로파일, 프록시 해제)만
//! 노출합니다. 계약을 만족하는 컨테이너라면 무엇이든 바꿔 끼울 수 있습니다.

use crate::error::{AppError, AppResult};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// 프로덕션 프로파일의 기본 이름
pub const PRODUCTION_PROFILE: &str = "production";

/// 등록된 컴포넌트에 대한 참조
///
/// 프레임워크가 횡단 관심사 때문에 래퍼를 끼워 넣은 경우(`Proxied`)
/// 원래 구현 인스턴스를 함께 들고 다닙니다.
#[derive(Clone)]
pub enum BeanHandle {
    /// 있는 그대로의 컴포넌트
    Plain(Arc<dyn Any + Send + Sync>),
    /// 프록시와 그 밑의 실제 대상
    Proxied {
        proxy: Arc<dyn Any + Send + Sync>,
        target: Arc<dyn Any + Send + Sync>,
    },
}

impl BeanHandle {
    /// 일반 컴포넌트 핸들 생성
    pub fn plain<T: Any + Send + Sync>(bean: T) -> Self {
        BeanHandle::Plain(Arc::new(bean))
    }

    /// 프록시 핸들 생성
    pub fn proxied<P, T>(proxy: P, target: T) -> Self
    where
        P: Any + Send + Sync,
        T: Any + Send + Sync,
    {
        BeanHandle::Proxied {
            proxy: Arc::new(proxy),
            target: Arc::new(target),
        }
    }

    /// 외부에 보이는 참조 (프록시가 있으면 프록시)
    pub fn visible(&self) -> &Arc<dyn Any + Send + Sync> {
        match self {
            BeanHandle::Plain(bean) => bean,
            BeanHandle::Proxied { proxy, .. } => proxy,
        }
    }

    /// 프록시를 벗겨낸 실제 인스턴스
    pub fn target(&self) -> &Arc<dyn Any + Send + Sync> {
        match self {
            BeanHandle::Plain(bean) => bean,
            BeanHandle::Proxied { target, .. } => target,
        }
    }
}

/// 호스트 컨테이너가 구현해야 하는 좁은 계약
pub trait BeanRegistry: Send + Sync {
    /// 이름으로 컴포넌트 조회
    fn get(&self, name: &str) -> Option<BeanHandle>;

    /// 이름의 컴포넌트가 존재하는지
    fn contains(&self, name: &str) -> bool;

    /// 현재 활성 프로파일 이름들
    fn active_profiles(&self) -> Vec<String>;
}

/// 컨테이너 표면을 좁혀 주는 파사드
#[derive(Clone)]
pub struct ContextFacade {
    registry: Arc<dyn BeanRegistry>,
}

impl ContextFacade {
    pub fn new(registry: Arc<dyn BeanRegistry>) -> Self {
        Self { registry }
    }

    /// 이름 + 타입으로 빈을 조회합니다.
    ///
    /// 없는 이름과 타입 불일치는 서로 다른 에러로 구분됩니다.
    pub fn bean<T: Any + Send + Sync>(&self, name: &str) -> AppResult<Arc<T>> {
        let handle = self
            .registry
            .get(name)
            .ok_or_else(|| AppError::BeanNotFound(name.to_string()))?;
        Arc::clone(handle.visible())
            .downcast::<T>()
            .map_err(|_| AppError::BeanTypeMismatch(name.to_string()))
    }

    /// 이름의 빈이 존재하는지
    pub fn has_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// 활성 프로파일 이름 집합
    pub fn profiles(&self) -> HashSet<String> {
        self.registry.active_profiles().into_iter().collect()
    }

    /// 'production' 프로파일이 활성 상태인지
    pub fn is_prod_mode(&self) -> bool {
        self.profiles().contains(PRODUCTION_PROFILE)
    }

    /// 프록시일 수 있는 핸들에서 실제 인스턴스를 꺼냅니다.
    pub fn target<T: Any + Send + Sync>(&self, handle: &BeanHandle) -> AppResult<Arc<T>> {
        Arc::clone(handle.target())
            .downcast::<T>()
            .map_err(|_| AppError::BeanTypeMismatch(std::any::type_name::<T>().to_string()))
    }
}

/// 테스트와 소형 호스트를 위한 맵 기반 레지스트리
///
/// 빌더 스타일로 구성합니다. 실제 서비스에서는 호스트의 컨테이너 어댑터가
/// `BeanRegistry`를 구현하는 쪽을 권장합니다.
#[derive(Default)]
pub struct MapRegistry {
    beans: HashMap<String, BeanHandle>,
    profiles: Vec<String>,
}

impl MapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컴포넌트 등록
    pub fn with_bean<T: Any + Send + Sync>(mut self, name: &str, bean: T) -> Self {
        self.beans.insert(name.to_string(), BeanHandle::plain(bean));
        self
    }

    /// 핸들 직접 등록 (프록시 포함)
    pub fn with_handle(mut self, name: &str, handle: BeanHandle) -> Self {
        self.beans.insert(name.to_string(), handle);
        self
    }

    /// 활성 프로파일 등록
    pub fn with_profile(mut self, profile: &str) -> Self {
        self.profiles.push(profile.to_string());
        self
    }
}

impl BeanRegistry for MapRegistry {
    fn get(&self, name: &str) -> Option<BeanHandle> {
        self.beans.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.beans.contains_key(name)
    }

    fn active_profiles(&self) -> Vec<String> {
        self.profiles.clone()
    }
}
