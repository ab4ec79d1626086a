use serde::{Deserialize, Serialize};

/// What a single board cell currently shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    ShowingQuestion,
    ShowingAnswer,
}

impl RevealState {
    /// The state after one click. `ShowingAnswer` is a fixed point.
    pub const fn advance(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => ShowingQuestion,
            ShowingQuestion => ShowingAnswer,
            ShowingAnswer => ShowingAnswer,
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_answered(self) -> bool {
        matches!(self, Self::ShowingAnswer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Result of clicking a cell: the newly displayed text, if anything changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Reveal<'a> {
    NoChange,
    Question(&'a str),
    Answer(&'a str),
}

impl<'a> Reveal<'a> {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn text(self) -> Option<&'a str> {
        match self {
            Self::NoChange => None,
            Self::Question(text) | Self::Answer(text) => Some(text),
        }
    }
}
