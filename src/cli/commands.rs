//! CLI command implementations
//!
//! Commands are thin presenters: they parse JSON, call into the session
//! or the decision procedure, and print JSON. Readers and writers are
//! passed in so the commands run the same against stdio and buffers.

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::{json, Value};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{read_request, read_requests, write_error, write_response};
use super::protocol::{step_json, EvaluateRequest, SessionRequest, TimelineRequest};
use crate::procedure::evaluate as evaluate_answers;
use crate::session::SessionController;
use crate::timeline::TimelineInfo;

/// Parse arguments and run the selected command against stdio
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match cmd {
        Command::Session { config } => {
            let config = load_config(config.as_deref())?;
            session(&config, input, &mut output)
        }
        Command::Evaluate { config } => {
            let config = load_config(config.as_deref())?;
            evaluate(&config, &mut input, &mut output)
        }
        Command::Timeline => timeline(&mut input, &mut output),
    }
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load_or_default(path)?;
    config.apply_logging()?;
    Ok(config)
}

/// Serve session requests until input ends.
///
/// A request that cannot be parsed or applied gets an error response;
/// the session keeps running. Only I/O failures end the loop.
pub fn session<R: BufRead, W: Write>(config: &Config, input: R, output: &mut W) -> CliResult<()> {
    let mut controller = SessionController::new(config.registry.build());

    for request in read_requests(input) {
        let request = match request {
            Ok(value) => value,
            Err(e) if e.code() == &CliErrorCode::IoError => return Err(e),
            Err(e) => {
                write_error(output, e.code_str(), e.message())?;
                continue;
            }
        };

        let request: SessionRequest = match serde_json::from_value(request) {
            Ok(request) => request,
            Err(e) => {
                let e = CliError::invalid_request(e.to_string());
                write_error(output, e.code_str(), e.message())?;
                continue;
            }
        };

        match request.apply(&mut controller) {
            Ok(data) => write_response(output, data)?,
            Err(e) => write_error(output, e.code(), &e.to_string())?,
        }
    }

    Ok(())
}

/// Evaluate `{"answers":[...]}` in one shot.
pub fn evaluate<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    let request: EvaluateRequest = parse_request(read_request(input)?)?;
    let registry = config.registry.build();
    let evaluation = evaluate_answers(&request.answers, &*registry);

    write_response(
        output,
        json!({
            "step": step_json(Some(evaluation.step)),
            "answers_used": evaluation.answers_used,
        }),
    )
}

/// Print `TimelineInfo` for `{"start":...,"end":...}`.
pub fn timeline<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> CliResult<()> {
    let period: TimelineRequest = parse_request(read_request(input)?)?;
    let info = TimelineInfo::for_period(&period)?;
    write_response(output, serde_json::to_value(info)?)
}

fn parse_request<T: serde::de::DeserializeOwned>(value: Value) -> CliResult<T> {
    serde_json::from_value(value).map_err(|e| CliError::invalid_request(e.to_string()))
}
