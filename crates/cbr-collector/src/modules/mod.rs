//! 데이터 수집 모듈.

pub mod rate_collect;

pub use rate_collect::{collect_rates, CollectionReport, RateCollectConfig};
