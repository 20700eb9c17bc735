use crate::game::{Direction, DirectionError, DirectionStore, INITIAL_DIRECTION};

/// Presentation-side steering.
///
/// The store accepts any direction, so reversal filtering happens here
/// against the last direction this handler applied, not against the
/// simulation's state.
pub struct InputHandler {
    store: DirectionStore,
    current: Direction,
}

impl InputHandler {
    pub fn new(store: DirectionStore) -> Self {
        Self {
            store,
            current: INITIAL_DIRECTION,
        }
    }

    /// Last direction forwarded to the store
    pub fn current(&self) -> Direction {
        self.current
    }

    /// Forward `direction` unless it reverses the current one.
    /// Returns whether it was applied.
    pub fn request(&mut self, direction: Direction) -> bool {
        if self.current.is_opposite(direction) {
            return false;
        }

        self.current = direction;
        self.store.set(direction);
        true
    }

    /// Same as [`InputHandler::request`] for a raw `(dx, dy)` vector
    pub fn request_vector(&mut self, vector: (i32, i32)) -> Result<bool, DirectionError> {
        let direction = Direction::try_from(vector)?;
        Ok(self.request(direction))
    }
}
