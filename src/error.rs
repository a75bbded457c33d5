use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures talking to the backlight device. None of these are recoverable.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} does not hold a number ({content:?}): {source}", path.display())]
    Parse {
        path: PathBuf,
        content: String,
        #[source]
        source: ParseIntError,
    },
}
