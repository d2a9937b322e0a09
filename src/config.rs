// ABOUTME: Configuration and constants for the REPL driver

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const BANNER: &str = "Mini-scheme interpreter in Rust.";
pub const BANNER_SUBTITLE: &str = "Ctrl-C to exit.";

/// REPL prompt prefix; turn number is appended by `repl.rs`.
pub const PROMPT_PREFIX: &str = "[In ";
pub const PROMPT_SUFFIX: &str = "]: ";

/// Output line prefix; turn number is appended by `repl.rs`.
pub const OUTPUT_PREFIX: &str = "[Out ";
pub const OUTPUT_SUFFIX: &str = "]: ";
