pub mod config;
pub mod error;
pub mod types;

pub use config::IntradeskConfig;
pub use error::{IntradeskError, Result};
pub use types::*;
