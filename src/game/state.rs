use super::config::{BOARD_HEIGHT, BOARD_WIDTH, INITIAL_FOOD, INITIAL_HEAD};
use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move one cell in `direction`, reappearing on the opposite edge
    /// when leaving the board
    pub fn wrapped_step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(BOARD_WIDTH),
            y: (self.y + dy).rem_euclid(BOARD_HEIGHT),
        }
    }

    pub fn is_in_bounds(&self) -> bool {
        (0..BOARD_WIDTH).contains(&self.x) && (0..BOARD_HEIGHT).contains(&self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One published snapshot of the game. A new value replaces the old one
/// every tick; nothing mutates a snapshot after it has been handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Body cells, head first. Never empty.
    pub snake: Vec<Position>,
    pub food: Position,
    pub score: u32,
}

impl GameState {
    pub fn new(snake: Vec<Position>, food: Position, score: u32) -> Self {
        debug_assert!(!snake.is_empty(), "snake must have a head");
        Self { snake, food, score }
    }

    /// First cell of the snake.
    ///
    /// Panics if `snake` is empty. Snapshots published by the simulation
    /// always have a head; hand-built ones must too.
    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false for a well-formed snapshot
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Check if a position is occupied by the snake
    pub fn occupies(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    pub fn is_in_bounds(&self) -> bool {
        self.food.is_in_bounds() && self.snake.iter().all(Position::is_in_bounds)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(vec![INITIAL_HEAD], INITIAL_FOOD, 0)
    }
}
