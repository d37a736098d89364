pub mod hook;
pub mod quota;

pub use hook::StatusInput;
pub use quota::{QuotaCacheEntry, QuotaPeriod, QuotaSnapshot};
