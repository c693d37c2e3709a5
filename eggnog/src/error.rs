use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::level::TaxonId;

pub type Result<T> = std::result::Result<T, LevelError>;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("Cannot read levels file \"{}\": {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading levels data: {0}")]
    ReadFailed(#[source] io::Error),
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("Can't find level {0} in list of orthologous groups")]
    UnknownGroup(TaxonId),
    #[error("\"{0}\" is not a valid level id")]
    InvalidKey(String),
    #[error("Cannot find any valid group for members {members:?}")]
    NoEnclosingGroup { members: Vec<TaxonId> },
    #[error(transparent)]
    InvalidArguments(#[from] ArgumentError),
}

/// Ways a level search can be under- or over-specified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Specify either a search level or a list of search organisms, not both")]
    BothSpecified,
    #[error("Must specify either a search level or a list of search organisms")]
    NeitherSpecified,
}
