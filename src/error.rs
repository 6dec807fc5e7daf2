// error.rs

use thiserror::Error;

/// Failures that abort the interpreter rather than the current line.
/// Everything else is reported on stderr where it happens and the
/// read-eval loop keeps going.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("pipe: {0}")]
    Pipe(nix::Error),
    #[error("fork: {0}")]
    Fork(nix::Error),
}
