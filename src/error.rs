use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parse::ParseError;
use crate::EngineError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read players from {}: {source}", path.display())]
    Players { path: PathBuf, source: io::Error },

    #[error("invalid draw on line {line}: {source}")]
    Draw { line: usize, source: ParseError },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
