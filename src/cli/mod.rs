//! CLI module for pagesmith
//!
//! Provides command-line access to:
//! - pages: page types and their allow-lists
//! - schema: registered schema, description and example of a section type
//! - validate: payload validation with the full error report
//! - authorize: section placement decisions
//! - check-config: configuration loading and validation

mod args;
mod commands;
mod errors;
mod io;

pub use args::{parse_existing, Cli, Command};
pub use commands::{
    authorize, check_config, load_config, pages, run, run_command, schema, validate,
    ConfigSource, DEFAULT_CONFIG_PATH,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_payload, write_error_body, write_response};
