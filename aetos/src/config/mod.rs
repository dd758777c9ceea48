pub mod error;
pub mod store;

pub use error::ConfigError;
pub use store::{ConfigStore, Preference, DEFAULT_INDEX_URL};
