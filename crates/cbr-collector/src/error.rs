//! 에러 타입 정의.

use cbr_core::CoreError;
use cbr_data::DataError;
use thiserror::Error;

/// Collector 에러 타입
#[derive(Debug, Error)]
pub enum CollectorError {
    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(String),
    /// 입력값 에러 (기간, 통화 코드 등)
    #[error(transparent)]
    Core(#[from] CoreError),
    /// 데이터 소스/저장소 에러
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, CollectorError>;
