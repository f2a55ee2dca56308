/// Command-line parsing and report generation
pub mod cli;
/// Command-line defaults and configuration constants
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Plain-text rendering
pub mod render;
