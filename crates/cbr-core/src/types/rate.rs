//! 일별 환율 레코드.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CurrencyCode;

/// 특정 날짜의 단일 통화 환율.
///
/// 필드 순서가 CSV 컬럼 순서(`date, currency, name, nominal, rate`)와 같습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRecord {
    /// 기준일 (YYYY-MM-DD로 직렬화)
    pub date: NaiveDate,
    /// 통화 코드
    pub currency: CurrencyCode,
    /// 통화 표시명 (예: "Доллар США")
    pub name: String,
    /// 환율이 적용되는 단위 수량 (예: JPY는 100)
    pub nominal: u32,
    /// `nominal` 단위당 루블 환율
    pub rate: Decimal,
}

impl RateRecord {
    /// 1 단위당 환율 (`rate / nominal`).
    pub fn unit_rate(&self) -> Decimal {
        if self.nominal == 0 {
            return self.rate;
        }
        self.rate / Decimal::from(self.nominal)
    }
}
