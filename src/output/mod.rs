//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `streaming` - Streaming formatter for console output

mod config;
mod streaming;

pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
