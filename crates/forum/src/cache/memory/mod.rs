//! In-memory cache and event bus backends.

mod bus;
mod cache;

pub use bus::MemoryEventBus;
pub use cache::MemoryCache;
