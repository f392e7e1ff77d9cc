//! 수집 기간 정의.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// 양 끝을 포함하는 날짜 구간 `[start, end]`.
///
/// 생성 시 `start <= end`가 보장됩니다. 역직렬화도 `DateRange::new`를 거칩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// 검증 전 역직렬화 형태.
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = CoreError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// 새 기간을 생성합니다. 시작일이 종료일보다 늦으면 `InvalidRange`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// 하루짜리 기간을 생성합니다.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 기간에 포함된 일수 (항상 1 이상).
    pub fn num_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// 시작일부터 종료일까지 하루 간격으로 오름차순 순회합니다.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.num_days())
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.start, self.end)
    }
}

/// `start`부터 `end`까지(포함) 모든 날짜를 오름차순으로 반환합니다.
///
/// `start > end`이면 빈 목록 대신 `InvalidRange` 에러를 반환합니다.
pub fn enumerate_dates(start: NaiveDate, end: NaiveDate) -> CoreResult<Vec<NaiveDate>> {
    Ok(DateRange::new(start, end)?.dates().collect())
}

/// 날짜 문자열 파싱 (YYYY-MM-DD)
pub fn parse_date(s: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_enumerate_dates_count_and_order() {
        let start = ymd(2023, 12, 30);
        let end = ymd(2024, 3, 2);
        let dates = enumerate_dates(start, end).unwrap();

        assert_eq!(dates.len() as i64, (end - start).num_days() + 1);
        assert_eq!(dates.first(), Some(&start));
        assert_eq!(dates.last(), Some(&end));
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_enumerate_dates_leap_day() {
        let dates = enumerate_dates(ymd(2024, 2, 28), ymd(2024, 3, 1)).unwrap();
        assert_eq!(dates, vec![ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]);
    }

    #[test]
    fn test_enumerate_dates_single_day() {
        let day = ymd(2024, 1, 1);
        assert_eq!(enumerate_dates(day, day).unwrap(), vec![day]);
        assert_eq!(DateRange::single(day).num_days(), 1);
    }

    #[test]
    fn test_enumerate_dates_rejects_reversed_range() {
        let err = enumerate_dates(ymd(2024, 1, 2), ymd(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRange { .. }));
    }

    #[test]
    fn test_date_range_is_restartable() {
        let range = DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 10)).unwrap();
        let first: Vec<_> = range.dates().collect();
        let second: Vec<_> = range.dates().collect();
        assert_eq!(first, second);
        assert_eq!(range.num_days(), 10);
    }

    #[test]
    fn test_date_range_deserialize_validates_order() {
        let range: DateRange =
            serde_json::from_str(r#"{"start":"2024-01-01","end":"2024-01-03"}"#).unwrap();
        assert_eq!(range.num_days(), 3);

        let reversed =
            serde_json::from_str::<DateRange>(r#"{"start":"2024-01-02","end":"2024-01-01"}"#);
        assert!(reversed.is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-15").unwrap(), ymd(2024, 1, 15));
        assert_eq!(parse_date(" 2005-01-01 ").unwrap(), ymd(2005, 1, 1));
        assert!(parse_date("2024/01/15").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }
}
