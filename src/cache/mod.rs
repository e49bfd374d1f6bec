mod clock;
mod memo;
mod ttl;

pub use clock::{Clock, ManualClock, SystemClock};
pub use memo::MemoCache;
pub use ttl::{CacheEntry, TtlCache};
