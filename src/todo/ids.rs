//! Item id generation
//!
//! Ids are millisecond timestamps, bumped past the last issued id whenever
//! the clock has not moved (or moved backwards). Two items created in the
//! same millisecond therefore never share an id.
//!
//! Ids never exceed [`MAX_ID`]. Once the sequence reaches it, the generator
//! hands out the smallest id not currently in use instead.

use super::item::TodoId;
use crate::platform::time::now_ms;

/// Largest id ever issued or accepted (`Number.MAX_SAFE_INTEGER`, so ids
/// survive a trip through browser JSON exactly)
pub const MAX_ID: u64 = (1 << 53) - 1;

/// Clock-derived id source, strictly increasing until the id space runs out
#[derive(Debug, Clone)]
pub struct IdGenerator {
    clock: fn() -> u64,
    last: Option<u64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(now_ms)
    }
}

impl IdGenerator {
    pub fn new(clock: fn() -> u64) -> Self {
        Self { clock, last: None }
    }

    /// Make sure future ids are greater than `id` (used after a restore)
    pub fn observe(&mut self, id: TodoId) {
        let id = id.get().min(MAX_ID);
        self.last = Some(self.last.map_or(id, |last| last.max(id)));
    }

    /// Issue the next id; `taken` reports ids held by the current list
    pub fn next_id(&mut self, taken: impl Fn(TodoId) -> bool) -> TodoId {
        let now = (self.clock)().min(MAX_ID);
        let id = match self.last {
            Some(last) if now <= last => match last.checked_add(1) {
                Some(next) if next <= MAX_ID => next,
                _ => return Self::lowest_free(taken),
            },
            _ => now,
        };
        self.last = Some(id);
        TodoId::new(id)
    }

    fn lowest_free(taken: impl Fn(TodoId) -> bool) -> TodoId {
        // A list can't hold MAX_ID + 1 items, so a free id always exists
        let id = (0..=MAX_ID)
            .map(TodoId::new)
            .find(|&id| !taken(id))
            .unwrap_or(TodoId::new(0));
        log::warn!("Id space exhausted, reusing free id {}", id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen() -> u64 {
        1_700_000_000_000
    }

    #[test]
    fn test_uses_clock_when_it_advances() {
        let mut ids = IdGenerator::new(frozen);
        assert_eq!(ids.next_id(|_| false).get(), 1_700_000_000_000);
    }

    #[test]
    fn test_same_millisecond_bumps() {
        let mut ids = IdGenerator::new(frozen);
        let a = ids.next_id(|_| false);
        let b = ids.next_id(|_| false);
        let c = ids.next_id(|_| false);
        assert!(a < b && b < c);
        assert_eq!(c.get(), frozen() + 2);
    }

    #[test]
    fn test_observe_skips_restored_ids() {
        let mut ids = IdGenerator::new(frozen);
        ids.observe(TodoId::new(frozen() + 10));
        ids.observe(TodoId::new(3));
        assert_eq!(ids.next_id(|_| false).get(), frozen() + 11);
    }

    #[test]
    fn test_huge_ids_do_not_overflow() {
        let mut ids = IdGenerator::new(frozen);
        ids.observe(TodoId::new(u64::MAX));
        let taken = |id: TodoId| id.get() == MAX_ID || id.get() == 0;
        assert_eq!(ids.next_id(taken).get(), 1);

        fn far_future() -> u64 {
            u64::MAX
        }
        let mut ids = IdGenerator::new(far_future);
        assert_eq!(ids.next_id(|_| false).get(), MAX_ID);
        let in_use = |id: TodoId| id.get() == MAX_ID;
        assert_eq!(ids.next_id(in_use).get(), 0);
    }

    #[test]
    fn test_default_clock() {
        let mut ids = IdGenerator::default();
        let a = ids.next_id(|_| false);
        let b = ids.next_id(|_| false);
        assert!(b > a);
    }
}
