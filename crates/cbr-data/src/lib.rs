//! 환율 데이터 소스 및 저장.
//!
//! 이 crate는 다음을 제공합니다:
//! - 날짜별 환율 조회 trait (`RateSource`)와 조회 결과 분류
//! - 러시아 중앙은행 아카이브 HTTP 클라이언트
//! - CSV 저장소

pub mod error;
pub mod provider;
pub mod storage;

pub use error::{DataError, FetchError, Result};
pub use provider::{
    CbrArchiveClient, CbrClientConfig, FetchOutcome, NotFoundReason, RateSource,
};
pub use storage::{save_rates_csv, write_rates};
