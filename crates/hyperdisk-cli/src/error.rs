//! CLI error type and exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Geometry error (domain violation, precision loss) |
//! | 2 | Configuration error |
//! | 3 | I/O or serialization error |

use hyperdisk_geometry::GeometryError;
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    Geometry = 1,
    Config = 2,
    Io = 3,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

/// Map an error to the exit code reported to the shell.
pub fn exit_code_for_error(err: &CliError) -> CliExitCode {
    match err {
        CliError::Geometry(e) if e.is_config_error() => CliExitCode::Config,
        CliError::Geometry(_) => CliExitCode::Geometry,
        CliError::Serialization(_) | CliError::Io(_) => CliExitCode::Io,
    }
}
