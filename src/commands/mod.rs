//! CLI command implementations.
//!
//! Available commands:
//! - **generate**: Classify the registry and emit the constants table (default)
//! - **init**: Write a default configuration file

pub mod generate;
pub mod init;

pub use generate::{
    check_up_to_date, generate_text, handle_generate, resolve, run, GeneratePlan,
    GenerateSummary,
};
pub use init::{init_config, init_config_in, DEFAULT_CONFIG};
