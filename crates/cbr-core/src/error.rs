//! 환율 수집기의 핵심 에러 타입.

use chrono::NaiveDate;
use thiserror::Error;

/// 도메인 타입 생성/파싱 에러.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// 시작일이 종료일보다 늦은 기간
    #[error("잘못된 기간: 시작일 {start}이 종료일 {end}보다 늦습니다")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// 3자리 영문 통화 코드가 아님
    #[error("잘못된 통화 코드: {0}")]
    InvalidCurrency(String),

    /// 날짜 문자열 파싱 실패
    #[error("잘못된 날짜 형식: {0} (YYYY-MM-DD 필요)")]
    InvalidDate(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;
