//! 수집 기간 프리셋.
//!
//! - `all`: 2005-01-01부터 오늘까지
//! - `2024`: 해당 연도 1월 1일부터 오늘까지
//! - `2023-2024`: 첫 연도 1월 1일부터 둘째 연도 12월 31일까지 (오늘 이후는 잘라냄)

use cbr_core::{parse_date, CoreError, DateRange};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// 아카이브가 제공하는 가장 이른 연도.
pub const ARCHIVE_FIRST_YEAR: i32 = 2005;

/// CLI에서 선택하는 기간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// 아카이브 전체
    All,
    /// 지정 연도부터 오늘까지
    Since(i32),
    /// 연도 구간 (양 끝 포함)
    ///
    /// 둘째 연도 12월 31일에서 끝나며, `Since`와 달리 오늘까지 연장되지 않습니다.
    Years(i32, i32),
}

impl Period {
    /// 오늘 날짜 기준으로 실제 기간을 계산합니다.
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange, CoreError> {
        DateRange::new(self.start_date()?, self.end_date(today)?)
    }

    /// 프리셋 시작일.
    pub fn start_date(&self) -> Result<NaiveDate, CoreError> {
        match *self {
            Period::All => jan_first(ARCHIVE_FIRST_YEAR),
            Period::Since(year) | Period::Years(year, _) => jan_first(year),
        }
    }

    /// 프리셋 종료일 (오늘 이후는 잘라냄).
    pub fn end_date(&self, today: NaiveDate) -> Result<NaiveDate, CoreError> {
        match *self {
            Period::All | Period::Since(_) => Ok(today),
            Period::Years(_, to) => Ok(dec_last(to)?.min(today)),
        }
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(Period::All);
        }

        let parse_year =
            |v: &str| v.trim().parse::<i32>().map_err(|_| CoreError::InvalidDate(s.to_string()));

        match s.split_once('-') {
            Some((from, to)) => Ok(Period::Years(parse_year(from)?, parse_year(to)?)),
            None => Ok(Period::Since(parse_year(s)?)),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::All => write!(f, "all"),
            Period::Since(year) => write!(f, "{}", year),
            Period::Years(from, to) => write!(f, "{}-{}", from, to),
        }
    }
}

/// CLI 인자로 수집 기간을 결정합니다.
///
/// `--from`/`--to`가 주어지면 프리셋 경계보다 우선하며, 프리셋은
/// 빠진 경계에만 사용됩니다. 프리셋이 없으면 올해 1월 1일부터 오늘까지입니다.
pub fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    period: Option<Period>,
    today: NaiveDate,
) -> Result<DateRange, CoreError> {
    let preset = period.unwrap_or(Period::Since(today.year()));
    if from.is_none() && to.is_none() {
        return preset.resolve(today);
    }

    let start = match from {
        Some(from) => parse_date(from)?,
        None => preset.start_date()?,
    };
    let end = match to {
        Some(to) => parse_date(to)?,
        None => preset.end_date(today)?,
    };
    DateRange::new(start, end)
}

fn jan_first(year: i32) -> Result<NaiveDate, CoreError> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| CoreError::InvalidDate(format!("{}-01-01", year)))
}

fn dec_last(year: i32) -> Result<NaiveDate, CoreError> {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .ok_or_else(|| CoreError::InvalidDate(format!("{}-12-31", year)))
}
