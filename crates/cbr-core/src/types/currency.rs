//! 통화 코드 정의.
//!
//! - `CurrencyCode` - ISO 4217 형식의 3자리 통화 코드
//! - `KnownCurrency` - CLI에서 안내하는 주요 통화 목록

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 3자리 영문 통화 코드 (항상 대문자로 정규화).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// 통화 코드를 생성합니다.
    ///
    /// 앞뒤 공백은 무시하며, 정확히 3개의 ASCII 영문자가 아니면 에러를 반환합니다.
    pub fn new(code: impl AsRef<str>) -> Result<Self, CoreError> {
        let trimmed = code.as_ref().trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidCurrency(code.as_ref().to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// 코드 문자열을 반환합니다.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// CLI 메뉴에 노출되는 주요 통화.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownCurrency {
    /// 통화 코드 (예: USD)
    pub code: &'static str,
    /// 러시아 중앙은행 표기명
    pub name: &'static str,
}

static KNOWN_CURRENCIES: [KnownCurrency; 7] = [
    KnownCurrency { code: "USD", name: "Доллар США" },
    KnownCurrency { code: "EUR", name: "Евро" },
    KnownCurrency { code: "CNY", name: "Юань" },
    KnownCurrency { code: "JPY", name: "Японская йена" },
    KnownCurrency { code: "KRW", name: "Корейская вона" },
    KnownCurrency { code: "INR", name: "Индийская рупия" },
    KnownCurrency { code: "BYN", name: "Белорусский рубль" },
];

/// 주요 통화 목록을 반환합니다.
pub fn known_currencies() -> &'static [KnownCurrency] {
    &KNOWN_CURRENCIES
}

/// 메뉴 번호(1부터 시작)로 주요 통화를 찾습니다.
pub fn known_currency_by_index(index: usize) -> Option<&'static KnownCurrency> {
    index.checked_sub(1).and_then(|i| KNOWN_CURRENCIES.get(i))
}

/// CLI 입력을 통화 코드로 해석합니다.
///
/// 숫자면 주요 통화 목록의 메뉴 번호, 아니면 통화 코드로 취급합니다.
pub fn parse_currency_choice(input: &str) -> Result<CurrencyCode, CoreError> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(index) => known_currency_by_index(index)
            .ok_or_else(|| CoreError::InvalidCurrency(input.to_string()))
            .and_then(|known| CurrencyCode::new(known.code)),
        Err(_) => CurrencyCode::new(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_normalizes_case() {
        let code: CurrencyCode = " usd ".parse().unwrap();
        assert_eq!(code.as_str(), "USD");
        assert_eq!(code.to_string(), "USD");
    }

    #[test]
    fn test_currency_code_rejects_invalid() {
        assert!(CurrencyCode::new("US").is_err());
        assert!(CurrencyCode::new("USDT").is_err());
        assert!(CurrencyCode::new("U5D").is_err());
        assert!(CurrencyCode::new("").is_err());
    }

    #[test]
    fn test_currency_code_serde_as_string() {
        let code = CurrencyCode::new("eur").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"EUR\"");

        let parsed: CurrencyCode = serde_json::from_str("\"cny\"").unwrap();
        assert_eq!(parsed.as_str(), "CNY");
        assert!(serde_json::from_str::<CurrencyCode>("\"dollar\"").is_err());
    }

    #[test]
    fn test_known_currency_lookup() {
        assert_eq!(known_currencies().len(), 7);
        assert_eq!(known_currency_by_index(1).unwrap().code, "USD");
        assert_eq!(known_currency_by_index(7).unwrap().code, "BYN");
        assert!(known_currency_by_index(0).is_none());
        assert!(known_currency_by_index(8).is_none());

        for known in known_currencies() {
            assert!(CurrencyCode::new(known.code).is_ok());
        }
    }

    #[test]
    fn test_parse_currency_choice() {
        assert_eq!(parse_currency_choice("3").unwrap().as_str(), "CNY");
        assert_eq!(parse_currency_choice("krw").unwrap().as_str(), "KRW");
        assert!(matches!(
            parse_currency_choice("8"),
            Err(CoreError::InvalidCurrency(_))
        ));
        assert!(parse_currency_choice("0").is_err());
        assert!(parse_currency_choice("dollar").is_err());
    }
}
