use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Creates (or truncates) `file_path` and writes one value per line.
pub fn write_trace(file_path: &Path, values: &[f64]) -> Result<(), TraceWriterError> {
    let file = File::create(file_path).map_err(|e| open_error(file_path, e))?;
    write_values(file, file_path, values)
}

/// Appends one value per line to `file_path`, creating the file if needed.
pub fn append_trace(file_path: &Path, values: &[f64]) -> Result<(), TraceWriterError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)
        .map_err(|e| open_error(file_path, e))?;
    write_values(file, file_path, values)
}

// Six decimal places, one sample per line
pub fn format_trace(values: &[f64]) -> String {
    values.iter().map(|value| format!("{:.6}\n", value)).collect()
}

fn write_values(file: File, file_path: &Path, values: &[f64]) -> Result<(), TraceWriterError> {
    let write_error = |e: std::io::Error| TraceWriterError::FailedToWrite {
        file: file_path.display().to_string(),
        reason: e.to_string(),
    };

    let mut writer = BufWriter::new(file);
    writer.write_all(format_trace(values).as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    log::debug!("Wrote {} samples to {}", values.len(), file_path.display());
    Ok(())
}

fn open_error(file_path: &Path, e: std::io::Error) -> TraceWriterError {
    TraceWriterError::FailedToOpenFile {
        file: file_path.display().to_string(),
        reason: e.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceWriterError {
    #[error("failed to open {file} for writing: {reason}")]
    FailedToOpenFile { file: String, reason: String },
    #[error("failed to write to {file}: {reason}")]
    FailedToWrite { file: String, reason: String },
}
