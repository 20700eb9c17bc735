use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::direction::Direction;

/// Holds the single pending movement direction.
///
/// Input code writes through [`DirectionStore::set`], the simulation reads
/// once per tick through [`DirectionStore::get`]. Clones share the same
/// cell. Only the latest write is retained.
#[derive(Debug, Clone)]
pub struct DirectionStore {
    inner: Arc<Mutex<Direction>>,
}

impl DirectionStore {
    pub fn new(initial: Direction) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial)),
        }
    }

    /// Replace the stored direction. Reversal filtering is the caller's job.
    pub fn set(&self, direction: Direction) {
        *self.lock() = direction;
    }

    pub fn get(&self) -> Direction {
        *self.lock()
    }

    // A poisoned lock still holds a whole `Direction`, so keep using it.
    fn lock(&self) -> MutexGuard<'_, Direction> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DirectionStore {
    fn default() -> Self {
        Self::new(super::config::INITIAL_DIRECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_default_is_right() {
        assert_eq!(DirectionStore::default().get(), Direction::Right);
    }

    #[test]
    fn test_last_write_wins() {
        let store = DirectionStore::default();
        store.set(Direction::Down);
        store.set(Direction::Right);
        assert_eq!(store.get(), Direction::Right);
    }

    #[test]
    fn test_no_reversal_check() {
        let store = DirectionStore::new(Direction::Right);
        store.set(Direction::Left);
        assert_eq!(store.get(), Direction::Left);
    }

    #[test]
    fn test_clones_share_cell() {
        let store = DirectionStore::default();
        let writer = store.clone();
        writer.set(Direction::Up);
        assert_eq!(store.get(), Direction::Up);
    }

    #[test]
    fn test_concurrent_writers() {
        let store = DirectionStore::default();

        let handles: Vec<_> = Direction::ALL
            .into_iter()
            .map(|direction| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..1000 {
                        store.set(direction);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(Direction::ALL.contains(&store.get()));
    }

    #[test]
    fn test_survives_poisoned_lock() {
        let store = DirectionStore::default();
        let poisoner = store.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        store.set(Direction::Down);
        assert_eq!(store.get(), Direction::Down);
    }
}
