//! 수집 결과 저장소.

pub mod csv;

pub use self::csv::{save_rates_csv, write_rates, CSV_HEADER};
