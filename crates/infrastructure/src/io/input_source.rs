use massresolve_domain::config::InputConfig;
use massresolve_domain::DomainError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use tracing::info;

const INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Open the configured input: a file, or stdin when no path (or `-`) is set.
pub fn open_input(config: &InputConfig) -> Result<Box<dyn BufRead + Send>, DomainError> {
    match config.path.as_deref() {
        None | Some("-") => {
            info!(source = "stdin", field = %config.field, "Reading names");
            Ok(Box::new(BufReader::with_capacity(INPUT_BUFFER_SIZE, io::stdin())))
        }
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                DomainError::SetupFailed(format!("cannot open input {}: {}", path, e))
            })?;
            info!(source = %path, field = %config.field, "Reading names");
            Ok(Box::new(BufReader::with_capacity(INPUT_BUFFER_SIZE, file)))
        }
    }
}
