//! 러시아 중앙은행 과거 환율 수집기.
//!
//! 이 crate는 지정한 기간의 일별 환율을 순차적으로 수집하는 바이너리를 제공합니다:
//! - 날짜당 한 번의 아카이브 조회 (요청 간 고정 딜레이)
//! - 데이터 없음/일시적 실패 분류 후 계속 진행
//! - CSV 저장

pub mod config;
pub mod error;
pub mod modules;
pub mod period;
pub mod stats;

pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use period::{resolve_range, Period};
pub use stats::CollectionStats;
