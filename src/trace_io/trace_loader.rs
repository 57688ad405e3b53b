use std::fs::File;
use std::io::{self, BufRead, Read};
use std::path::Path;
use thiserror::Error;

/// Upper bound on the number of samples read from a single trace file.
pub const DEFAULT_MAX_SAMPLES: usize = 4000;

// Reads whitespace separated numbers from a file, at most max_samples of them.
// Lenient mode keeps the numeric prefix of the first malformed token ("12abc" gives 12)
// and stops there, strict mode reports the token.
pub fn read_trace(file_path: &Path, max_samples: usize, strict: bool) -> Result<Vec<f64>, TraceLoaderError> {
    let file = File::open(file_path).map_err(|e| TraceLoaderError::FailedToLoadSingleFile {
        file: file_path.display().to_string(),
        reason: e.to_string(),
    })?;

    let values = read_trace_from(file, max_samples, strict)?;
    log::info!("Loaded {} samples from {}", values.len(), file_path.display());

    Ok(values)
}

pub fn parse_trace(text: &str, max_samples: usize, strict: bool) -> Result<Vec<f64>, TraceLoaderError> {
    read_trace_from(text.as_bytes(), max_samples, strict)
}

pub fn read_trace_from<R: Read>(source: R, max_samples: usize, strict: bool) -> Result<Vec<f64>, TraceLoaderError> {
    let reader = io::BufReader::new(source);
    let mut values: Vec<f64> = Vec::new();

    'lines: for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|_| TraceLoaderError::FailedToAnalyzeFile)?;

        for token in line.split_whitespace() {
            if values.len() >= max_samples {
                log::warn!("Trace truncated at {} samples", max_samples);
                break 'lines;
            }

            match token.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) if strict => {
                    return Err(TraceLoaderError::InvalidToken {
                        line_num: index + 1,
                        token: token.to_string(),
                    })
                }
                Err(_) => {
                    if let Some(value) = numeric_prefix(token) {
                        values.push(value);
                    }
                    log::warn!("Stopped reading at non-numeric token '{}' on line {}", token, index + 1);
                    break 'lines;
                }
            }
        }
    }

    Ok(values)
}

// Longest leading part of the token that reads as a number
fn numeric_prefix(token: &str) -> Option<f64> {
    token
        .char_indices()
        .map(|(index, _)| index)
        .skip(1)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .find_map(|end| token[..end].parse::<f64>().ok())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceLoaderError {
    #[error("failed to load {file}: {reason}")]
    FailedToLoadSingleFile { file: String, reason: String },
    #[error("failed to read trace data")]
    FailedToAnalyzeFile,
    #[error("invalid token '{token}' on line {line_num}")]
    InvalidToken { line_num: usize, token: String },
}
