//! JSON I/O handling for the CLI
//!
//! - Input: one JSON object per line
//! - Output: one JSON object per line, `{"status":"ok","data":...}` or
//!   `{"status":"error","code":...,"message":...}`
//! - UTF-8 only

use std::io::{BufRead, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read a single JSON request
pub fn read_request<R: BufRead>(reader: &mut R) -> CliResult<Value> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::invalid_request("Empty input"));
    }

    Ok(serde_json::from_str(&line)?)
}

/// Read JSON requests line by line, skipping blank lines
pub fn read_requests<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<Value>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(serde_json::from_str(&line).map_err(CliError::from)),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

/// Write a success response
pub fn write_response<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_line(writer, &response)
}

/// Write an error response
pub fn write_error<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(writer, &response)
}

fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
