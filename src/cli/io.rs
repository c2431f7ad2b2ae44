//! JSON I/O handling for CLI
//!
//! - Input: one JSON document from a file or stdin
//! - Output: one JSON object per command, written to stdout by `run`
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read a JSON payload from `path`, or all of stdin when `None`
pub fn read_payload(path: Option<&Path>) -> CliResult<Value> {
    let content = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            CliError::io_error(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if content.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }

    Ok(serde_json::from_str(&content)?)
}

fn emit<W: Write>(out: &mut W, response: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, response)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    emit(
        out,
        &serde_json::json!({
            "status": "ok",
            "data": data
        }),
    )
}

/// Write a structured error body (code, message, details, help)
pub fn write_error_body<W: Write, B: Serialize>(out: &mut W, body: &B) -> CliResult<()> {
    let mut response = serde_json::to_value(body)?;
    if let Value::Object(fields) = &mut response {
        fields.insert("status".to_string(), Value::String("error".to_string()));
    }
    emit(out, &response)
}
