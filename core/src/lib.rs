#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub use board::*;
pub use builder::*;
pub use cancel::*;
pub use clue::*;
pub use error::*;
pub use reveal::*;
pub use shuffle::*;
pub use types::*;

pub use jeopardy_protocol::{CategoryDetail, CategoryId, CategorySummary, ClueRecord};

mod board;
mod builder;
mod cancel;
mod clue;
mod error;
mod reveal;
mod shuffle;
mod types;
