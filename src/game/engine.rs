use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{
    config::{BOARD_HEIGHT, BOARD_WIDTH, INITIAL_SNAKE_LENGTH, RESTART_HEAD},
    direction::Direction,
    state::{GameState, Position},
};

/// What happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The head advanced onto an empty cell
    Moved,
    /// The head advanced onto the food
    Ate,
    /// The head hit the body; the run was reset
    Collided,
}

/// Advances a [`GameState`] by one tick.
///
/// The engine owns the two pieces of state that are not part of a
/// snapshot: the running length target and the food RNG.
pub struct GameEngine<R = ChaCha8Rng> {
    length: usize,
    rng: R,
}

impl GameEngine<ChaCha8Rng> {
    /// Create an engine seeded with `seed`, or from OS entropy when `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            length: INITIAL_SNAKE_LENGTH,
            rng,
        }
    }

    /// Length the snake is growing towards
    pub fn length(&self) -> usize {
        self.length
    }

    /// Compute the snapshot that follows `state` when moving in `direction`
    pub fn tick(&mut self, state: &GameState, direction: Direction) -> (GameState, TickOutcome) {
        let new_head = state.head().wrapped_step(direction);
        let ate_food = new_head == state.food;

        let length = if ate_food { self.length + 1 } else { self.length };

        // Checked against the whole pre-move body, tail included.
        if state.occupies(new_head) {
            self.length = INITIAL_SNAKE_LENGTH;
            let reset = GameState::new(vec![RESTART_HEAD], state.food, 0);
            return (reset, TickOutcome::Collided);
        }

        self.length = length;
        let kept = length.saturating_sub(1).min(state.snake.len());

        let mut snake = Vec::with_capacity(kept + 1);
        snake.push(new_head);
        snake.extend_from_slice(&state.snake[..kept]);

        if ate_food {
            let food = self.spawn_food();
            (
                GameState::new(snake, food, state.score + 1),
                TickOutcome::Ate,
            )
        } else {
            (
                GameState::new(snake, state.food, state.score),
                TickOutcome::Moved,
            )
        }
    }

    /// Uniform over the whole board. Food may land on the snake.
    fn spawn_food(&mut self) -> Position {
        Position::new(
            self.rng.gen_range(0..BOARD_WIDTH),
            self.rng.gen_range(0..BOARD_HEIGHT),
        )
    }
}
