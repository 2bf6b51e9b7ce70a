// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-writer / multi-reader value cell with an explicit snapshot API.
//!
//! Event handlers own the [`SnapshotWriter`]; frame loops hold any number of
//! [`SnapshotReader`] clones. A snapshot is always a complete value: readers
//! never observe a half-applied write.
//!
//! ## Minimal example
//!
//! ```
//! use glide_progress::SnapshotWriter;
//!
//! let mut writer = SnapshotWriter::new((0_u32, 0_u32));
//! let reader = writer.reader();
//!
//! writer.update(|pair| *pair = (pair.0 + 1, pair.1 + 1));
//! let (a, b) = reader.snapshot();
//! assert_eq!(a, b);
//! ```

use std::sync::{Arc, PoisonError, RwLock};

/// The writing half of a snapshot cell.
///
/// Not `Clone`: there is exactly one writer per cell, and writes take `&mut self`.
#[derive(Debug)]
pub struct SnapshotWriter<T> {
    shared: Arc<RwLock<T>>,
}

/// A reading handle for a snapshot cell.
#[derive(Debug)]
pub struct SnapshotReader<T> {
    shared: Arc<RwLock<T>>,
}

impl<T> Clone for SnapshotReader<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone> SnapshotWriter<T> {
    /// Creates a cell holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(RwLock::new(value)),
        }
    }

    /// Returns a new reader for this cell.
    #[must_use]
    pub fn reader(&self) -> SnapshotReader<T> {
        SnapshotReader {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Replaces the stored value, returning the previous one.
    pub fn replace(&mut self, value: T) -> T {
        let mut guard = self.shared.write().unwrap_or_else(PoisonError::into_inner);
        core::mem::replace(&mut *guard, value)
    }

    /// Mutates the stored value in place while holding the write lock.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.shared.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn snapshot(&self) -> T {
        read(&self.shared)
    }
}

impl<T: Clone> SnapshotReader<T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn snapshot(&self) -> T {
        read(&self.shared)
    }
}

fn read<T: Clone>(shared: &RwLock<T>) -> T {
    // A panicked writer leaves the last fully written value behind.
    shared
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn readers_see_writes() {
        let mut writer = SnapshotWriter::new(1_i32);
        let reader = writer.reader();
        assert_eq!(reader.snapshot(), 1);

        let previous = writer.replace(5);
        assert_eq!(previous, 1);
        assert_eq!(reader.snapshot(), 5);
        assert_eq!(writer.snapshot(), 5);
    }

    #[test]
    fn cloned_readers_share_the_cell() {
        let mut writer = SnapshotWriter::new(0_u8);
        let a = writer.reader();
        let b = a.clone();
        writer.update(|v| *v = 9);
        assert_eq!(a.snapshot(), 9);
        assert_eq!(b.snapshot(), 9);
    }

    #[test]
    fn concurrent_readers_never_observe_torn_pairs() {
        let mut writer = SnapshotWriter::new((0_u64, 0_u64));
        let readers: Vec<_> = (0..4).map(|_| writer.reader()).collect();

        std::thread::scope(|scope| {
            for reader in &readers {
                scope.spawn(move || {
                    for _ in 0..2_000 {
                        let (a, b) = reader.snapshot();
                        assert_eq!(a, b, "observed a torn write");
                    }
                });
            }
            for i in 0..2_000 {
                writer.update(|pair| {
                    pair.0 = i;
                    pair.1 = i;
                });
            }
        });
    }
}
