//! 수집 통계 구조체.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 수집 작업 통계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    /// 시도한 날짜 수
    pub total: usize,
    /// 환율 수집 성공
    pub success: usize,
    /// 데이터 없음 (휴일, 통화 미존재 등)
    pub empty: usize,
    /// 복구 가능한 조회 실패
    pub errors: usize,
    /// 연결 실패로 인한 냉각 대기 횟수
    pub cooldowns: usize,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
}

impl CollectionStats {
    /// 새 통계 객체 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            success = self.success,
            empty = self.empty,
            errors = self.errors,
            cooldowns = self.cooldowns,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료: {}/{}건",
            self.success,
            self.total
        );
    }
}
