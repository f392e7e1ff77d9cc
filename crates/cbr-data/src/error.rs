//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 저장소/클라이언트 구성 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV 직렬화 오류
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP 클라이언트 생성 오류
    #[error("HTTP client error: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, DataError>;

/// 단일 날짜 조회 실패.
///
/// 모든 변형은 복구 가능하며, 수집 루프는 기록 후 다음 날짜로 넘어갑니다.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// 200/404 이외의 HTTP 상태
    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    /// 연결 실패 (거부, 리셋, DNS 등)
    #[error("connection failed: {0}")]
    Connection(String),

    /// 요청 타임아웃
    #[error("request timed out: {0}")]
    Timeout(String),

    /// 응답 본문이 JSON이 아님
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// 다음 요청 전에 냉각 대기가 필요한 오류인지.
    ///
    /// 장애 중인 원격 서버에 연속 요청하지 않도록 연결 실패에만 적용합니다.
    pub fn requires_cooldown(&self) -> bool {
        matches!(self, FetchError::Connection(_))
    }

    /// 로그/통계용 분류 문자열.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Status { .. } => "status",
            FetchError::Connection(_) => "connection",
            FetchError::Timeout(_) => "timeout",
            FetchError::Decode(_) => "decode",
        }
    }
}
