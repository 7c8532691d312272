pub mod config;
pub mod csv;
pub mod dates;
pub mod error;
pub mod types;

pub use config::Config;
pub use dates::*;
pub use error::BirdscoutError;
pub use types::*;
