// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A lock-free reader/writer slot for a lookup table.
//!
//! Ported from `original_source/table/shared_table.h`'s `SharedTable<Table>`
//! (`std::atomic_store`/`std::atomic_load` over a `shared_ptr<Table>`), using
//! [`arc_swap::ArcSwap`] in place of hand-rolled atomic pointer juggling — the
//! idiomatic Rust equivalent of the same non-blocking reader/writer pattern.
//!
//! ```
//! use orbkit::table::SharedTable;
//!
//! let shared: SharedTable<Vec<i32>> = SharedTable::new();
//! shared.set(vec![1, 2, 3]);
//!
//! let local = shared.load();
//! assert_eq!(local.as_deref(), Some(&vec![1, 2, 3]));
//! ```
use std::sync::Arc;

use arc_swap::ArcSwapOption;

/// A read-mostly table that can be atomically swapped out from any thread.
///
/// `Load` never blocks a concurrent `Set`, and vice versa; this mirrors the
/// teacher's rationale that a `RwLock` is too heavy for a lookup this cheap.
pub struct SharedTable<T> {
    table: ArcSwapOption<T>,
}

impl<T> SharedTable<T> {
    pub fn new() -> Self {
        Self { table: ArcSwapOption::from(None) }
    }

    /// Replace the underlying table. Readers observe either the old or the
    /// new table, never a partially-updated one.
    pub fn set(&self, table: T) {
        self.table.store(Some(Arc::new(table)));
    }

    /// Acquire a handle to the current table, or `None` if it was never set.
    pub fn load(&self) -> Option<Arc<T>> {
        self.table.load_full()
    }
}

impl<T> Default for SharedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_before_set_is_none() {
        let shared: SharedTable<u32> = SharedTable::new();
        assert!(shared.load().is_none());
    }

    #[test]
    fn set_then_load_observes_the_new_value() {
        let shared = SharedTable::new();
        shared.set(42u32);
        assert_eq!(*shared.load().unwrap(), 42);
    }

    #[test]
    fn readers_see_old_value_until_set_completes() {
        let shared = SharedTable::new();
        shared.set(1u32);
        let old = shared.load().unwrap();
        shared.set(2u32);
        assert_eq!(*old, 1);
        assert_eq!(*shared.load().unwrap(), 2);
    }
}
