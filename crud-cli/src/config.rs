//! Configuration module
//!
//! Handles CLI configuration including the server URL and output format.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the CRUD server
    pub server_url: String,

    /// Emit JSON rather than human-readable output
    pub json: bool,
}
