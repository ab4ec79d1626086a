use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Malformed(String),
    #[error("Not enough categories, needed {needed} but only {got} usable")]
    NotEnoughCategories { needed: usize, got: usize },
    #[error("Not enough clues in \"{category}\", needed {needed} but only {got} usable")]
    NotEnoughClues {
        category: String,
        needed: usize,
        got: usize,
    },
    #[error("Categories do not match the board shape")]
    ShapeMismatch,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board build was cancelled")]
    Cancelled,
}

impl TriviaError {
    /// Whether the data source answered, but with less data than a board needs.
    pub const fn is_data_shortfall(&self) -> bool {
        matches!(
            self,
            Self::NotEnoughCategories { .. } | Self::NotEnoughClues { .. }
        )
    }

    pub const fn is_network_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Malformed(_))
    }
}

pub type Result<T> = core::result::Result<T, TriviaError>;
