//! Redis cache and event bus backends.

mod bus;
mod cache;
mod error;

pub use bus::RedisEventBus;
pub use cache::RedisCache;
