mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{KeyPolicy, APP_NAME, DEFAULT_ENV};
pub use serialization::{deserialize_posts, serialize_posts, SerializationError};
pub use traits::Cache;
