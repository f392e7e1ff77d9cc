//! 환율 데이터 Provider 모듈.
//!
//! ## 러시아 중앙은행 아카이브
//! - `CbrArchiveClient`: cbr-xml-daily.ru 일별 JSON 아카이브 클라이언트
//! - 날짜당 한 번의 GET 요청, 캐시 없음

pub mod cbr_archive;

pub use cbr_archive::{CbrArchiveClient, CbrClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use async_trait::async_trait;
use cbr_core::{CurrencyCode, RateRecord};
use chrono::NaiveDate;
use std::fmt;

use crate::error::FetchError;

/// 데이터가 없다고 판단한 이유.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// 해당 날짜의 아카이브 없음 (휴일, 공시 이전 등)
    NoArchive,
    /// 아카이브에 통화 항목이 없음
    MissingCurrency,
    /// 통화 항목은 있지만 필수 필드가 없거나 잘못됨
    IncompleteEntry,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::NoArchive => write!(f, "no_archive"),
            NotFoundReason::MissingCurrency => write!(f, "missing_currency"),
            NotFoundReason::IncompleteEntry => write!(f, "incomplete_entry"),
        }
    }
}

/// 단일 날짜 조회 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 환율 조회 성공
    Found(RateRecord),
    /// 오류가 아닌, 예상된 데이터 부재
    NotFound(NotFoundReason),
}

impl FetchOutcome {
    pub fn into_record(self) -> Option<RateRecord> {
        match self {
            FetchOutcome::Found(record) => Some(record),
            FetchOutcome::NotFound(_) => None,
        }
    }
}

/// 날짜별 환율 조회 trait.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Provider 이름.
    fn name(&self) -> &str;

    /// 한 날짜의 환율을 조회합니다.
    ///
    /// 데이터 부재는 `Ok(FetchOutcome::NotFound)`, 일시적 실패는 `Err`로 구분합니다.
    async fn fetch_rate(
        &self,
        date: NaiveDate,
        currency: &CurrencyCode,
    ) -> Result<FetchOutcome, FetchError>;
}
