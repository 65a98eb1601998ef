use log::debug;
use rand::Rng;

use crate::{difficulty::Difficulty, direction::Direction, logic, Grid, DEFAULT_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

/// Owns the grid for one game and applies every mutation to it.
#[derive(Clone, Debug)]
pub struct GridEngine {
    grid: Grid,
    difficulty: Difficulty,
}

impl GridEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_size(DEFAULT_SIZE, difficulty)
    }

    pub fn with_size(size: usize, difficulty: Difficulty) -> Self {
        Self::from_grid(Grid::new(size), difficulty)
    }

    pub const fn from_grid(grid: Grid, difficulty: Difficulty) -> Self {
        Self { grid, difficulty }
    }

    /// An empty default-sized grid seeded with two random tiles.
    pub fn new_game(difficulty: Difficulty, rng: &mut impl Rng) -> Self {
        let mut engine = Self::new(difficulty);

        engine.spawn_random_tile(rng);
        engine.spawn_random_tile(rng);

        engine
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub const fn target(&self) -> u32 {
        self.difficulty.target()
    }

    /// Slides every tile toward `direction`. Never spawns.
    pub fn slide(&mut self, direction: Direction) -> bool {
        let changed = logic::try_move(&mut self.grid, direction);

        debug!("slide {direction:?}: changed={changed}");

        changed
    }

    pub fn spawn_random_tile(&mut self, rng: &mut impl Rng) -> Option<(usize, usize, u32)> {
        let spawned = logic::spawn_tile(rng, &mut self.grid, self.difficulty);

        match spawned {
            Some((row, col, value)) => debug!("spawned {value} at ({row}, {col})"),
            None => debug!("no empty cell to spawn into"),
        }

        spawned
    }

    pub fn has_any_move_available(&self) -> bool {
        self.grid.count_empty_cells() > 0 || self.grid.has_adjacent_pair()
    }

    pub fn has_reached_target(&self) -> bool {
        self.grid.contains(self.target())
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.has_reached_target() {
            GameOutcome::Won
        } else if !self.has_any_move_available() {
            GameOutcome::Lost
        } else {
            GameOutcome::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn engine(values: [u32; 16], difficulty: Difficulty) -> GridEngine {
        GridEngine::from_grid(Grid::from_values(4, values).unwrap(), difficulty)
    }

    const STALEMATE: [u32; 16] = [2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2];

    #[test]
    fn it_starts_with_two_tiles() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let engine = GridEngine::new_game(Difficulty::Medium, &mut rng);

        assert_eq!(engine.grid().size(), 4);
        assert_eq!(engine.grid().count_empty_cells(), 14);
        assert!(engine
            .grid()
            .values()
            .all(|value| [0, 2, 4].contains(&value)));
        assert_eq!(engine.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn it_replays_a_seed() {
        let play = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut engine = GridEngine::new_game(Difficulty::Hard, &mut rng);

            let directions = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

            for direction in directions.into_iter().cycle().take(40) {
                if engine.slide(direction) {
                    engine.spawn_random_tile(&mut rng);
                }
            }

            engine.grid().clone()
        };

        assert_eq!(play(99), play(99));
    }

    #[test]
    fn it_chain_merges_leftmost_pair() {
        let mut engine = engine(
            [2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            Difficulty::Easy,
        );

        assert!(engine.slide(Direction::Left));
        assert_eq!(
            engine.grid().rows().next().unwrap().collect::<Vec<_>>(),
            vec![4, 2, 0, 0]
        );
    }

    #[test]
    fn it_does_not_spawn_on_slide() {
        let mut engine = engine(
            [0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            Difficulty::Easy,
        );

        assert!(engine.slide(Direction::Down));
        assert_eq!(engine.grid().count_empty_cells(), 15);
        assert_eq!(engine.grid().get(3, 3), 2);
    }

    #[test]
    fn it_detects_stalemate() {
        let engine = engine(STALEMATE, Difficulty::Easy);

        assert!(!engine.has_any_move_available());
        assert_eq!(engine.outcome(), GameOutcome::Lost);
    }

    #[test]
    fn it_finds_remaining_moves() {
        let mut values = STALEMATE;
        values[5] = 0;
        assert!(engine(values, Difficulty::Easy).has_any_move_available());

        let mut values = STALEMATE;
        values[15] = 4;
        assert!(engine(values, Difficulty::Easy).has_any_move_available());
    }

    #[test]
    fn it_detects_target() {
        let mut values = STALEMATE;
        values[9] = 256;

        let easy = engine(values, Difficulty::Easy);
        assert!(easy.has_reached_target());
        assert_eq!(easy.outcome(), GameOutcome::Won);

        let medium = engine(values, Difficulty::Medium);
        assert!(!medium.has_reached_target());
        assert_eq!(medium.outcome(), GameOutcome::Lost);
    }

    #[test]
    fn it_requires_exact_target() {
        let mut values = [0; 16];
        values[0] = 512;

        assert!(!engine(values, Difficulty::Easy).has_reached_target());
        assert!(engine(values, Difficulty::Medium).has_reached_target());
    }

    #[test]
    fn it_wins_by_merging() {
        let mut engine = engine(
            [128, 128, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            Difficulty::Easy,
        );

        assert_eq!(engine.outcome(), GameOutcome::InProgress);
        assert!(engine.slide(Direction::Right));
        assert_eq!(engine.grid().get(0, 3), 256);
        assert_eq!(engine.outcome(), GameOutcome::Won);
    }

    #[test]
    fn it_fills_last_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut values = STALEMATE;
        values[0] = 0;
        let mut engine = engine(values, Difficulty::Hard);

        let spawned = engine.spawn_random_tile(&mut rng);

        assert!(matches!(spawned, Some((0, 0, 2 | 4))));
        assert_eq!(engine.spawn_random_tile(&mut rng), None);
    }

    #[test]
    fn it_supports_other_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut engine = GridEngine::with_size(2, Difficulty::Easy);

        for _ in 0..4 {
            assert!(engine.spawn_random_tile(&mut rng).is_some());
        }

        assert_eq!(engine.grid().count_empty_cells(), 0);
        assert_eq!(engine.spawn_random_tile(&mut rng), None);
    }
}
