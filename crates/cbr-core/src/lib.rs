//! # CBR Core
//!
//! 러시아 중앙은행(ЦБ РФ) 환율 수집기의 핵심 도메인 타입을 제공합니다:
//! - 통화 코드 및 주요 통화 목록
//! - 수집 기간과 날짜 열거
//! - 일별 환율 레코드
//! - 로깅 인프라

pub mod error;
pub mod logging;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use types::*;
