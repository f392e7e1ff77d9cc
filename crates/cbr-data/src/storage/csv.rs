//! 환율 레코드 CSV 저장소.
//!
//! 컬럼: `date, currency, name, nominal, rate` (UTF-8, 헤더 포함).

use cbr_core::RateRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::Result;

/// CSV 헤더.
pub const CSV_HEADER: [&str; 5] = ["date", "currency", "name", "nominal", "rate"];

/// 레코드를 CSV로 기록하고 기록한 행 수를 반환합니다.
///
/// 레코드가 없어도 헤더는 항상 기록됩니다.
pub fn write_rates<W: Write>(writer: W, records: &[RateRecord]) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(records.len())
}

/// CSV 파일로 저장 (상위 디렉터리 자동 생성, 기존 파일은 덮어씀).
pub fn save_rates_csv(path: &Path, records: &[RateRecord]) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let count = write_rates(BufWriter::new(file), records)?;

    info!(path = %path.display(), rows = count, "CSV 저장 완료");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbr_core::CurrencyCode;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn records() -> Vec<RateRecord> {
        vec![
            RateRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                currency: CurrencyCode::new("USD").unwrap(),
                name: "Доллар США".to_string(),
                nominal: 1,
                rate: dec!(90.1234),
            },
            RateRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                currency: CurrencyCode::new("USD").unwrap(),
                name: "Доллар, США".to_string(),
                nominal: 1,
                rate: dec!(91.5),
            },
        ]
    }

    #[test]
    fn test_write_rates_layout() {
        let mut buf = Vec::new();
        let count = write_rates(&mut buf, &records()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(count, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,currency,name,nominal,rate");
        assert_eq!(lines[1], "2024-01-01,USD,Доллар США,1,90.1234");
        // 쉼표가 포함된 이름은 따옴표 처리
        assert_eq!(lines[2], "2024-01-03,USD,\"Доллар, США\",1,91.5");
    }

    #[test]
    fn test_write_rates_empty_has_header() {
        let mut buf = Vec::new();
        assert_eq!(write_rates(&mut buf, &[]).unwrap(), 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "date,currency,name,nominal,rate\n");
    }

    #[test]
    fn test_save_rates_csv_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset").join("USD_rates_2024_2024.csv");

        let count = save_rates_csv(&path, &records()).unwrap();
        assert_eq!(count, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.starts_with("date,currency,name,nominal,rate"));
    }
}
