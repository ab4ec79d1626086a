use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The categories of one game and the reveal state of every clue cell.
///
/// Cells are indexed by `(category, clue)`, so the grid has one column per category and one row per clue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
    states: Array2<RevealState>,
}

impl Board {
    /// Builds a board where every category holds exactly `clues_per_category` clues; all cells start hidden.
    pub fn new(categories: Vec<Category>, clues_per_category: Coord) -> Result<Self> {
        let category_count: Coord = categories
            .len()
            .try_into()
            .map_err(|_| TriviaError::ShapeMismatch)?;
        if categories
            .iter()
            .any(|category| category.clues().len() != usize::from(clues_per_category))
        {
            return Err(TriviaError::ShapeMismatch);
        }

        let size: Coord2 = (category_count, clues_per_category);
        Ok(Self {
            categories,
            states: Array2::default(size.to_nd_index()),
        })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.states.dim();
        // shape was checked against `Coord` on construction
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (categories, clues) = self.size();
        mult(categories, clues)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(TriviaError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, coords: Coord2) -> Option<&Clue> {
        let coords = self.validate_coords(coords).ok()?;
        self.categories[usize::from(coords.0)]
            .clues()
            .get(usize::from(coords.1))
    }

    pub fn state_at(&self, coords: Coord2) -> Option<RevealState> {
        self.states.get(coords.to_nd_index()).copied()
    }

    /// Text currently shown in a cell, `None` while it is hidden or out of bounds.
    pub fn display_at(&self, coords: Coord2) -> Option<&str> {
        let clue = self.clue_at(coords)?;
        match self.state_at(coords)? {
            RevealState::Hidden => None,
            RevealState::ShowingQuestion => Some(&clue.question),
            RevealState::ShowingAnswer => Some(&clue.answer),
        }
    }

    /// Advances the cell one step and reports the newly displayed text.
    ///
    /// Clicking an answered cell is a silent no-op; clicking outside the board is a no-op with a warning.
    pub fn on_click(&mut self, coords: Coord2) -> Reveal<'_> {
        let Ok(coords) = self.validate_coords(coords) else {
            log::warn!(
                "Ignoring click at {:?} outside of board sized {:?}",
                coords,
                self.size()
            );
            return Reveal::NoChange;
        };

        let index = coords.to_nd_index();
        let current = self.states[index];
        let next = current.advance();
        if next == current {
            log::trace!("{:?} already answered", coords);
            return Reveal::NoChange;
        }
        self.states[index] = next;
        log::trace!("{:?}: {:?} -> {:?}", coords, current, next);

        let clue = &self.categories[usize::from(coords.0)].clues()[usize::from(coords.1)];
        match next {
            RevealState::Hidden => Reveal::NoChange,
            RevealState::ShowingQuestion => Reveal::Question(&clue.question),
            RevealState::ShowingAnswer => Reveal::Answer(&clue.answer),
        }
    }

    /// Puts every cell back to hidden, keeping the categories.
    pub fn clear(&mut self) {
        self.states.fill(RevealState::Hidden);
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|state| !state.is_hidden())
    }

    pub fn answered_count(&self) -> CellCount {
        self.count_cells(RevealState::is_answered)
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.total_cells()
    }

    fn count_cells(&self, predicate: impl Fn(RevealState) -> bool) -> CellCount {
        self.states
            .iter()
            .filter(|&&state| predicate(state))
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}
