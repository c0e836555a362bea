//! Per-table id allocation with recycling.
//!
//! Ids are handed out sequentially from a seed taken from the database.
//! When an operation that drew an id fails or is abandoned, the id is
//! released and handed out again before the counter advances, so aborted
//! work leaves no holes in the key space.

#[cfg(test)]
mod proptests;

use std::collections::{BTreeMap, VecDeque};

use rusqlite::Connection;

use crate::database::Database;
use crate::entity::EntityKind;
use crate::error::Result;

/// Sequential id source for a single table.
///
/// # Examples
///
/// ```
/// use flightdesk::IdAllocator;
///
/// let mut ids = IdAllocator::new(4);
/// assert_eq!(ids.allocate(), 5);
/// assert_eq!(ids.allocate(), 6);
///
/// ids.release(5);
/// assert_eq!(ids.allocate(), 5);
/// assert_eq!(ids.allocate(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    last: i64,
    recycled: VecDeque<i64>,
}

impl IdAllocator {
    /// Creates an allocator whose first fresh id is `seed + 1`.
    ///
    /// A seed of `-1` makes the first id `0`.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self {
            last: seed,
            recycled: VecDeque::new(),
        }
    }

    /// Returns the oldest released id, or the next fresh id.
    pub fn allocate(&mut self) -> i64 {
        if let Some(id) = self.recycled.pop_front() {
            return id;
        }
        self.last += 1;
        self.last
    }

    /// Queues `id` for reuse.
    ///
    /// Returns `false` and changes nothing when the id was never handed out
    /// or is already queued.
    pub fn release(&mut self, id: i64) -> bool {
        if id < 0 || id > self.last || self.recycled.contains(&id) {
            return false;
        }
        self.recycled.push_back(id);
        true
    }

    /// Moves the counter past `taken`, a key some other row already holds.
    ///
    /// Queued ids are kept. Returns `true` if the counter moved.
    pub fn advance_past(&mut self, taken: i64) -> bool {
        if taken <= self.last {
            return false;
        }
        self.last = taken;
        true
    }

    /// The highest id handed out so far (or the seed).
    #[must_use]
    pub const fn last_issued(&self) -> i64 {
        self.last
    }

    /// Released ids waiting to be reused, oldest first.
    #[must_use]
    pub fn pending_recycled(&self) -> Vec<i64> {
        self.recycled.iter().copied().collect()
    }
}

/// One [`IdAllocator`] per table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocators {
    allocators: BTreeMap<EntityKind, IdAllocator>,
}

impl IdAllocators {
    /// Seeds every allocator from the largest key currently stored.
    ///
    /// Empty tables seed to `-1`, so their first id is `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the seeding queries fail.
    pub fn seed(conn: &Connection) -> Result<Self> {
        let mut allocators = BTreeMap::new();
        for kind in EntityKind::ALL {
            let seed = Database::max_key(conn, kind)?;
            log::debug!("seeded {kind} ids from {seed}");
            allocators.insert(kind, IdAllocator::new(seed));
        }
        Ok(Self { allocators })
    }

    /// Allocators that all start from `-1`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            allocators: EntityKind::ALL
                .into_iter()
                .map(|kind| (kind, IdAllocator::new(-1)))
                .collect(),
        }
    }

    /// Draws an id for `kind`.
    pub fn allocate(&mut self, kind: EntityKind) -> i64 {
        self.allocators
            .entry(kind)
            .or_insert_with(|| IdAllocator::new(-1))
            .allocate()
    }

    /// Returns an unused id for `kind` to its queue.
    pub fn release(&mut self, kind: EntityKind, id: i64) -> bool {
        let released = self
            .allocators
            .get_mut(&kind)
            .is_some_and(|allocator| allocator.release(id));
        if released {
            log::debug!("released {kind} id {id}");
        }
        released
    }

    /// Moves the allocator for `kind` past `taken`.
    pub fn advance_past(&mut self, kind: EntityKind, taken: i64) {
        let allocator = self
            .allocators
            .entry(kind)
            .or_insert_with(|| IdAllocator::new(-1));
        if allocator.advance_past(taken) {
            log::debug!("advanced {kind} ids past {taken}");
        }
    }

    /// Returns every id in `ids` to its queue.
    pub fn release_all(&mut self, ids: &[(EntityKind, i64)]) {
        for &(kind, id) in ids {
            self.release(kind, id);
        }
    }

    /// The allocator for `kind`, if it has been seeded.
    #[must_use]
    pub fn get(&self, kind: EntityKind) -> Option<&IdAllocator> {
        self.allocators.get(&kind)
    }
}
