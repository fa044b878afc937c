// Domain-level errors for landmark validation.
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LandmarkError {
    WrongCount { found: usize },
    NonFinite { index: usize },
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::WrongCount { found } => {
                write!(f, "expected 21 landmarks, found {found}")
            }
            LandmarkError::NonFinite { index } => {
                write!(f, "landmark {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for LandmarkError {}
