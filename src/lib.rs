pub mod channel;
pub mod config;
pub mod convert;
pub mod error;
pub mod stats;
