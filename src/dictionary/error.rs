use super::Dictionary;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors loading a serialized dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A record does not have the shape `[<id><!?>]( <pos>:<child>)*;`
    #[error("malformed dictionary record {record}: {reason}")]
    Format { record: usize, reason: String },

    /// An edge names a node id no earlier record defined
    #[error("dictionary record {record} references undefined node {id}")]
    Reference { record: usize, id: u32 },

    #[error("dictionary contains no records")]
    Empty,

    #[error("failed to read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DictionaryError {
    pub(crate) fn format(record: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            record,
            reason: reason.into(),
        }
    }
}

/// Errors compiling a word list into a dictionary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("words must be inserted in sorted order, got {word:?} after {previous:?}")]
    Unsorted { previous: String, word: String },

    #[error("{0:?} is not a word of ASCII letters")]
    InvalidWord(String),
}

/// Installing a dictionary after one is already in place
#[derive(Debug, Error)]
#[error("the dictionary is already initialized")]
pub struct InitError {
    /// The dictionary that was not installed
    pub dictionary: Box<Dictionary>,
}
