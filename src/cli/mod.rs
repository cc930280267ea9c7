//! CLI module
//!
//! A JSON-over-stdio presenter for the question flow:
//! - session: interactive walk, one request per line
//! - evaluate: one-shot evaluation of a full answer list
//! - timeline: key dates for a period

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod protocol;

pub use args::{Cli, Command};
pub use commands::{evaluate, run, run_command, session, timeline};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, read_requests, write_error, write_response};
pub use protocol::{step_json, EvaluateRequest, SessionRequest};
