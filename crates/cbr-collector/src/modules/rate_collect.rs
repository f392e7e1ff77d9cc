//! 일별 환율 수집 모듈.
//!
//! 기간 내 날짜를 하나씩 순서대로 조회합니다. 날짜당 요청은 한 번뿐이며
//! 실패한 날짜는 같은 실행 안에서 재시도하지 않습니다.

use cbr_core::{CurrencyCode, DateRange, RateRecord};
use cbr_data::{FetchOutcome, RateSource};
use indicatif::ProgressBar;
use std::time::{Duration, Instant};

use crate::CollectionStats;

/// 단일 수집 실행 설정 (실행 중 변경되지 않음)
#[derive(Debug, Clone)]
pub struct RateCollectConfig {
    /// 수집 대상 통화
    pub currency: CurrencyCode,
    /// 날짜마다 다음 요청 전 대기 시간
    pub request_delay: Duration,
    /// 연결 실패 후 추가 대기 시간
    pub cooldown: Duration,
}

/// 수집 결과
#[derive(Debug, Clone, Default)]
pub struct CollectionReport {
    /// 날짜 오름차순 레코드
    pub records: Vec<RateRecord>,
    pub stats: CollectionStats,
}

/// 기간 내 모든 날짜의 환율 수집.
///
/// 어떤 조회 실패도 실행을 중단시키지 않으며, 범위를 끝까지 처리한 뒤
/// 수집된 레코드(0건 포함)를 반환합니다.
pub async fn collect_rates<S>(
    source: &S,
    range: DateRange,
    config: &RateCollectConfig,
    progress: Option<&ProgressBar>,
) -> CollectionReport
where
    S: RateSource + ?Sized,
{
    let start = Instant::now();
    let total_days = range.num_days();
    let mut report = CollectionReport {
        records: Vec::with_capacity(total_days),
        stats: CollectionStats::new(),
    };

    tracing::info!(
        source = source.name(),
        currency = %config.currency,
        range = %range,
        days = total_days,
        "환율 수집 시작"
    );

    for (idx, date) in range.dates().enumerate() {
        report.stats.total += 1;

        match source.fetch_rate(date, &config.currency).await {
            Ok(FetchOutcome::Found(record)) => {
                report.stats.success += 1;
                tracing::debug!(
                    date = %date,
                    rate = %record.rate,
                    nominal = record.nominal,
                    progress = format!("{}/{}", idx + 1, total_days),
                    "환율 수집"
                );
                report.records.push(record);
            }
            Ok(FetchOutcome::NotFound(reason)) => {
                report.stats.empty += 1;
                tracing::debug!(date = %date, reason = %reason, "데이터 없음");
            }
            Err(e) if e.requires_cooldown() => {
                report.stats.errors += 1;
                report.stats.cooldowns += 1;
                tracing::error!(
                    date = %date,
                    error = %e,
                    cooldown_secs = config.cooldown.as_secs_f64(),
                    "연결 실패, 대기 후 계속"
                );
                tokio::time::sleep(config.cooldown).await;
            }
            Err(e) => {
                report.stats.errors += 1;
                match e {
                    cbr_data::FetchError::Status { status } => {
                        tracing::warn!(date = %date, status = status, "HTTP 오류");
                    }
                    other => {
                        tracing::error!(date = %date, kind = other.kind(), error = %other, "조회 실패");
                    }
                }
            }
        }

        if let Some(pb) = progress {
            pb.inc(1);
        }

        // Rate limiting
        tokio::time::sleep(config.request_delay).await;
    }

    report.stats.elapsed = start.elapsed();
    tracing::info!(
        collected = report.records.len(),
        days = total_days,
        "수집된 레코드: {}/{}",
        report.records.len(),
        total_days
    );
    report
}
