//! JSON I/O handling for CLI
//!
//! - Input: one JSON object per line on stdin
//! - Output: one JSON envelope per line on stdout
//! - UTF-8 only

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// `{"status":"ok","data":...}`
pub fn ok_envelope(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

/// `{"status":"error","code":...,"message":...}`
pub fn error_envelope(code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

fn parse_request(line: &str) -> CliResult<Value> {
    serde_json::from_str(line).map_err(|e| CliError::invalid_request(format!("Invalid request JSON: {}", e)))
}

/// Read a JSON request from stdin
pub fn read_request() -> CliResult<Value> {
    let stdin = io::stdin();
    let mut line = String::new();

    stdin.lock().read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::invalid_request("Empty input"));
    }

    parse_request(&line)
}

/// Read JSON requests from stdin until EOF, skipping blank lines
pub fn read_requests() -> impl Iterator<Item = CliResult<Value>> {
    let stdin = io::stdin();
    stdin.lock().lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(parse_request(&line)),
        Err(e) => Some(Err(CliError::from(e))),
    })
}

/// Write a raw JSON value to stdout as one line
pub fn write_json(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_json(&ok_envelope(data))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_json(&error_envelope(code, message))
}
