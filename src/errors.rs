use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The four form fields, in the order they are read and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Numbers,
    Specials,
    Letters,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Length, Field::Numbers, Field::Specials, Field::Letters];

    pub fn label(self) -> &'static str {
        match self {
            Field::Length => "Password Length",
            Field::Numbers => "Amount of Numbers",
            Field::Specials => "Amount of Special Characters",
            Field::Letters => "Amount of Alphabets",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    Missing,
    NotANumber,
    OutOfRange { max: usize },
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputProblem::Missing => write!(f, "is empty"),
            InputProblem::NotANumber => write!(f, "is not a valid integer"),
            InputProblem::OutOfRange { max } => write!(f, "must be between 0 and {}", max),
        }
    }
}

/// Rejections of a password request. Nothing is generated when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Please fill every field with a valid integer ({field} {problem}).")]
    MissingOrInvalidInput { field: Field, problem: InputProblem },

    #[error("Total character count exceeds password length ({requested} > {length}).")]
    CountExceedsLength { requested: usize, length: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("could not read settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    SettingsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("field maximum {max} is above the limit of {ceiling}")]
    MaxTooLarge { max: usize, ceiling: usize },

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Exit status for the process: 2 for rejected input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Compose(_) | AppError::MaxTooLarge { .. } => 2,
            _ => 1,
        }
    }
}
