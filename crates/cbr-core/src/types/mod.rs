//! 수집기 전반에서 사용되는 공통 타입.

mod currency;
mod date_range;
mod rate;

pub use currency::*;
pub use date_range::*;
pub use rate::*;
