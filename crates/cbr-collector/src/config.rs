//! 환경변수 기반 설정 모듈.

use cbr_core::{CurrencyCode, DateRange};
use cbr_data::provider::{CbrClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use chrono::Datelike;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::CollectorError;
use crate::modules::RateCollectConfig;
use crate::Result;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 아카이브 요청 설정
    pub source: SourceConfig,
    /// 수집 루프 설정
    pub collect: CollectConfig,
    /// CSV 기본 저장 디렉터리
    pub output_dir: PathBuf,
}

/// 아카이브 요청 설정
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// 아카이브 호스트
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
    /// User-Agent 헤더
    pub user_agent: String,
}

/// 수집 루프 설정
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// 날짜 간 요청 딜레이 (밀리초)
    pub request_delay_ms: u64,
    /// 연결 실패 후 대기 시간 (초)
    pub cooldown_secs: u64,
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드 (`.env` 포함)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 키 조회 함수로 설정 로드
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("CBR_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CollectorError::Config(format!(
                "CBR_BASE_URL은 http(s) URL이어야 합니다: {}",
                base_url
            )));
        }

        Ok(Self {
            source: SourceConfig {
                base_url,
                timeout_secs: parse_or(&lookup, "CBR_REQUEST_TIMEOUT_SECS", 10),
                user_agent: lookup("CBR_USER_AGENT")
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            },
            collect: CollectConfig {
                request_delay_ms: parse_or(&lookup, "COLLECT_REQUEST_DELAY_MS", 300),
                cooldown_secs: parse_or(&lookup, "COLLECT_COOLDOWN_SECS", 5),
            },
            output_dir: lookup("COLLECT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dataset")),
        })
    }

    /// 기본 CSV 경로: `{output_dir}/{CODE}_rates_{시작연도}_{종료연도}.csv`
    pub fn default_output_path(&self, currency: &CurrencyCode, range: &DateRange) -> PathBuf {
        self.output_dir.join(format!(
            "{}_rates_{}_{}.csv",
            currency,
            range.start().year(),
            range.end().year()
        ))
    }
}

impl SourceConfig {
    /// HTTP 클라이언트 설정으로 변환
    pub fn client_config(&self) -> CbrClientConfig {
        CbrClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl CollectConfig {
    /// 요청 간 딜레이를 Duration으로 반환
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// 연결 실패 후 대기 시간을 Duration으로 반환
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// 특정 통화에 대한 수집 설정 생성
    pub fn for_currency(&self, currency: CurrencyCode) -> RateCollectConfig {
        RateCollectConfig {
            currency,
            request_delay: self.request_delay(),
            cooldown: self.cooldown(),
        }
    }
}

/// 값을 파싱 (없거나 실패 시 기본값 사용)
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
