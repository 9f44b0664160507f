pub mod client;
pub mod config;
mod error;
pub mod jsonrpc;
pub mod registry;
pub mod server;

pub use client::Client;
pub use config::Network;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
