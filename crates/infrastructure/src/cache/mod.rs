//! Cache implementations
//!
//! - `ResponseCache`: in-memory Moka cache of upstream bodies with a TTL per entry

mod response_cache;

pub use response_cache::{CacheStats, ResponseCache};
