//! Quiz and config error types.
//!
//! Defined here so the CLI can match on the user-facing conditions
//! (missing config file, not enough input) without string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a PAO system from its config file.
#[derive(Debug, Error)]
pub enum PaoError {
    /// The config file could not be read at all.
    #[error("unable to read config file: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file parsed but contained no `[pao]` section.
    #[error("no [pao] section found")]
    MissingSection,

    /// An association line did not have the `NN = person,action,object` shape.
    #[error("malformed association on line {line}: {text}")]
    MalformedEntry { line: usize, text: String },

    /// An association key was not a 1-2 digit number.
    #[error("bad number {number:?} on line {line}")]
    BadNumber { line: usize, number: String },
}

impl PaoError {
    /// Returns `true` for the "config file absent or unreadable" case,
    /// which the CLI reports without failing the process.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, PaoError::Unreadable { .. })
    }
}

/// Errors raised while dealing a quiz round.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A missing-item round needs at least two distinct choices.
    #[error("need at least two distinct choices to hide one")]
    NotEnoughChoices,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_is_soft() {
        let err = PaoError::Unreadable {
            path: PathBuf::from("/nope"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_unreadable());
        assert!(!PaoError::MissingSection.is_unreadable());
    }

    #[test]
    fn display_names_the_path() {
        let err = PaoError::Unreadable {
            path: PathBuf::from("/home/x/.artofmemory.conf"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains(".artofmemory.conf"));
    }
}
