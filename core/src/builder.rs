use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Where the builder gets its trivia from.
///
/// Futures are awaited one at a time on a single thread, so implementations need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait ClueSource {
    /// Lists up to `count` categories to pick from.
    async fn categories(&self, count: u16) -> Result<Vec<CategorySummary>>;

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail>;
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: Coord,
    pub clues_per_category: Coord,
    /// How many categories to list before drawing `categories` of them at random.
    pub category_pool: u16,
}

impl GameConfig {
    pub const fn new_unchecked(categories: Coord, clues_per_category: Coord, category_pool: u16) -> Self {
        Self {
            categories,
            clues_per_category,
            category_pool,
        }
    }

    pub fn new(categories: Coord, clues_per_category: Coord, category_pool: u16) -> Self {
        let categories = categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        let category_pool = category_pool.max(categories.into());
        Self::new_unchecked(categories, clues_per_category, category_pool)
    }

    pub const fn standard() -> Self {
        Self::new_unchecked(6, 5, 100)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.categories, self.clues_per_category)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Draws random categories from a [`ClueSource`] and lays them out as a [`Board`].
#[derive(Clone, Debug, PartialEq)]
pub struct BoardBuilder {
    config: GameConfig,
    seed: u64,
}

impl BoardBuilder {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Fetches the category pool and then each chosen category in turn.
    ///
    /// Any failed fetch fails the whole build. `cancel` is checked after every fetch, and a cancelled build stops
    /// without issuing further requests.
    pub async fn build<S: ClueSource>(self, source: &S, cancel: &CancelToken) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);

        cancel.check()?;
        let ids = self.pick_category_ids(source, &mut rng, cancel).await?;

        let mut categories = Vec::with_capacity(ids.len());
        for id in ids {
            log::debug!("fetching category {}", id);
            let detail = source.category(id).await?;
            cancel.check()?;
            categories.push(self.prepare_category(detail, &mut rng)?);
        }

        let board = Board::new(categories, self.config.clues_per_category)?;
        log::debug!("built board of size {:?}", board.size());
        Ok(board)
    }

    async fn pick_category_ids<S: ClueSource>(
        &self,
        source: &S,
        rng: &mut SmallRng,
        cancel: &CancelToken,
    ) -> Result<Vec<CategoryId>> {
        let needed = usize::from(self.config.categories);
        let min_clues = u32::from(self.config.clues_per_category);

        let pool = source.categories(self.config.category_pool).await?;
        cancel.check()?;
        log::debug!("received {} categories", pool.len());

        let mut seen = BTreeSet::new();
        let mut ids: Vec<CategoryId> = pool
            .iter()
            .filter(|summary| summary.clues_count.is_none_or(|count| count >= min_clues))
            .filter(|summary| seen.insert(summary.id))
            .map(|summary| summary.id)
            .collect();
        if ids.len() < needed {
            return Err(TriviaError::NotEnoughCategories {
                needed,
                got: ids.len(),
            });
        }

        shuffle(&mut ids, rng);
        ids.truncate(needed);
        Ok(ids)
    }

    fn prepare_category(&self, detail: CategoryDetail, rng: &mut SmallRng) -> Result<Category> {
        let needed = usize::from(self.config.clues_per_category);
        let title = normalize_text(&detail.title);
        let mut clues: Vec<Clue> = detail.clues.iter().filter_map(Clue::from_record).collect();
        if clues.len() < needed {
            return Err(TriviaError::NotEnoughClues {
                category: title,
                needed,
                got: clues.len(),
            });
        }

        shuffle(&mut clues, rng);
        clues.truncate(needed);
        Ok(Category::new(title, clues))
    }
}
