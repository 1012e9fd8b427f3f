pub mod config;
pub mod error;

#[cfg(feature = "ssr")]
pub mod client;

pub use config::BackendConfig;
pub use error::BackendError;

#[cfg(feature = "ssr")]
pub use client::{get_client, init_client, BackendClient};
