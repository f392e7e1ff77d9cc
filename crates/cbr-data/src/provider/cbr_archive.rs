//! 러시아 중앙은행 일별 환율 아카이브 클라이언트.
//!
//! `https://www.cbr-xml-daily.ru/archive/YYYY/MM/DD/daily_json.js`에서
//! 하루치 환율표를 받아 요청한 통화 한 건만 추출합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use cbr_data::provider::{CbrArchiveClient, CbrClientConfig, RateSource};
//!
//! let client = CbrArchiveClient::new(CbrClientConfig::default())?;
//! let usd = "USD".parse()?;
//! let outcome = client.fetch_rate(date, &usd).await?;
//! ```

use async_trait::async_trait;
use cbr_core::{CurrencyCode, RateRecord};
use chrono::{Datelike, NaiveDate};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use super::{FetchOutcome, NotFoundReason, RateSource};
use crate::error::{DataError, FetchError, Result};

/// 아카이브 기본 호스트.
pub const DEFAULT_BASE_URL: &str = "https://www.cbr-xml-daily.ru";

/// 기본 User-Agent (브라우저 흉내).
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// 클라이언트 설정.
#[derive(Debug, Clone)]
pub struct CbrClientConfig {
    /// 아카이브 호스트 (끝의 `/`는 무시)
    pub base_url: String,
    /// 요청당 타임아웃
    pub timeout: Duration,
    /// User-Agent 헤더
    pub user_agent: String,
}

impl Default for CbrClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// 일별 아카이브 응답 (`Valute` 외 필드는 무시).
#[derive(Debug, Deserialize)]
struct CbrDailyResponse {
    #[serde(rename = "Valute", default)]
    valute: Option<Map<String, Value>>,
}

/// 중앙은행 아카이브 데이터 소스.
pub struct CbrArchiveClient {
    client: reqwest::Client,
    base_url: String,
}

impl CbrArchiveClient {
    /// 새 클라이언트 생성.
    pub fn new(config: CbrClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| DataError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 날짜별 아카이브 URL.
    pub fn archive_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/archive/{:04}/{:02}/{:02}/daily_json.js",
            self.base_url,
            date.year(),
            date.month(),
            date.day()
        )
    }
}

#[async_trait]
impl RateSource for CbrArchiveClient {
    fn name(&self) -> &str {
        "cbr-archive"
    }

    async fn fetch_rate(
        &self,
        date: NaiveDate,
        currency: &CurrencyCode,
    ) -> std::result::Result<FetchOutcome, FetchError> {
        let url = self.archive_url(date);
        debug!(url = %url, "아카이브 조회");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(FetchOutcome::NotFound(NotFoundReason::NoArchive));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        parse_daily_json(date, currency, &body)
    }
}

/// reqwest 오류를 타임아웃/연결 실패로 분류.
fn classify_transport_error(err: reqwest::Error) -> FetchError {
    classify_transport_failure(err.is_connect(), err.is_timeout(), err.to_string())
}

/// 연결 단계 실패는 타임아웃이어도 `Connection`, 연결 이후 응답 대기 초과만 `Timeout`.
fn classify_transport_failure(connect: bool, timeout: bool, message: String) -> FetchError {
    if !connect && timeout {
        FetchError::Timeout(message)
    } else {
        FetchError::Connection(message)
    }
}

/// 일별 JSON 본문에서 한 통화를 추출.
///
/// 통화 키나 하위 필드가 없으면 에러가 아니라 `NotFound`입니다.
pub(crate) fn parse_daily_json(
    date: NaiveDate,
    currency: &CurrencyCode,
    body: &str,
) -> std::result::Result<FetchOutcome, FetchError> {
    let response: CbrDailyResponse = serde_json::from_str(body).map_err(|e| {
        FetchError::Decode(format!("{} - {}", e, &body[..floor_char_boundary(body, 200)]))
    })?;

    let Some(entry) = response
        .valute
        .as_ref()
        .and_then(|valute| valute.get(currency.as_str()))
    else {
        return Ok(FetchOutcome::NotFound(NotFoundReason::MissingCurrency));
    };

    match extract_record(date, currency, entry) {
        Some(record) => Ok(FetchOutcome::Found(record)),
        None => Ok(FetchOutcome::NotFound(NotFoundReason::IncompleteEntry)),
    }
}

fn extract_record(date: NaiveDate, currency: &CurrencyCode, entry: &Value) -> Option<RateRecord> {
    let name = entry.get("Name")?.as_str()?.trim();
    let nominal = entry.get("Nominal")?.as_u64()?;
    let Value::Number(value) = entry.get("Value")? else {
        return None;
    };

    // JSON 숫자의 텍스트 표현을 그대로 사용해 f64 오차를 피함
    let rate = Decimal::from_str(&value.to_string())
        .or_else(|_| Decimal::from_scientific(&value.to_string()))
        .ok()?;

    if name.is_empty() || nominal == 0 || rate <= Decimal::ZERO {
        return None;
    }

    Some(RateRecord {
        date,
        currency: currency.clone(),
        name: name.to_string(),
        nominal: u32::try_from(nominal).ok()?,
        rate,
    })
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
