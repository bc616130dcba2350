extern crate thiserror;

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::normalizer::lemmatize::Pos;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Resource(#[from] ResourceError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),
}

/// Linguistic resource errors. Always fatal at startup.
#[derive(Debug, Error, PartialEq)]
pub enum ResourceError {
    #[error("Stopword list {path:?} unavailable: {kind}")]
    Stopwords { path: PathBuf, kind: io::ErrorKind },

    #[error("Lexicon file {path:?} unavailable: {kind}")]
    Lexicon { path: PathBuf, kind: io::ErrorKind },

    #[error("No WordNet index files found in {0:?}")]
    EmptyLexicon(PathBuf),

    #[error("Lexicon has no entries for part of speech `{0}`")]
    MissingPos(Pos),
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Config file {path:?} unavailable: {kind}")]
    File { path: PathBuf, kind: io::ErrorKind },

    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Unknown part of speech `{0}`, expected one of: noun, verb, adjective, adverb")]
    Pos(String),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {path:?}: {kind}")]
    File { path: PathBuf, kind: io::ErrorKind },

    #[error("Reader Error: {0}")]
    Reader(io::ErrorKind),
}
