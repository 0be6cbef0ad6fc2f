//! Adaptive key index for object field lookup.
//!
//! Objects store fields as an ordered `Vec<(String, Value)>`, which keeps
//! insertion order and makes construction cheap, but leaves keyed lookup
//! O(n).  For large objects under repeated random access that is the wrong
//! trade, so each object carries a lazily built hash overlay: once the
//! accumulated linear-scan cost crosses a threshold, the overlay is
//! materialized and lookups become O(1).
//!
//! The overlay is a pure cache.  Its presence is not observable through
//! results except for one documented corner: with duplicate keys (which
//! only the decoder can produce), the sequential walk returns the first
//! occurrence while the hash table keeps the last.  Mutating the field
//! list discards the overlay and zeroes the counter.
//!
//! Interior mutability discipline: only reads that observe a missing
//! overlay may build one, and builds are idempotent.  `Cell`/`RefCell`
//! keep this single-threaded, matching the document model's ownership
//! story (one tree, one accessor at a time).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::constants::{JIT_ACCESS_LIMIT, JIT_SIZE_LIMIT};
use crate::value::Value;

/// Lazily built key → position overlay plus the scan-cost counter that
/// decides when to build it.
#[derive(Debug)]
pub(crate) struct FieldIndex {
    table: RefCell<Option<HashMap<String, usize>>>,
    scanned: Cell<u64>,
}

impl FieldIndex {
    pub(crate) const fn new() -> Self {
        FieldIndex {
            table: RefCell::new(None),
            scanned: Cell::new(0),
        }
    }

    /// Position of `key` in `entries` under the adaptive policy.
    ///
    /// With an overlay: hash lookup.  Without one: linear walk, counting
    /// one unit per field visited when the object is large enough to
    /// care (`JIT_SIZE_LIMIT`).  If the accumulated cost crosses
    /// `JIT_ACCESS_LIMIT` mid-walk, the overlay is built and the lookup
    /// retried against it.
    pub(crate) fn locate(&self, entries: &[(String, Value)], key: &str) -> Option<usize> {
        if let Some(table) = self.table.borrow().as_ref() {
            return table.get(key).copied();
        }

        if entries.len() < JIT_SIZE_LIMIT {
            // Small object: walk without bookkeeping.
            return entries.iter().position(|(k, _)| k == key);
        }

        let mut scanned = self.scanned.get();
        for (i, (k, _)) in entries.iter().enumerate() {
            scanned += 1;
            if k == key {
                self.scanned.set(scanned);
                return Some(i);
            }
            if scanned >= JIT_ACCESS_LIMIT {
                self.scanned.set(scanned);
                self.build(entries);
                return self
                    .table
                    .borrow()
                    .as_ref()
                    .and_then(|table| table.get(key).copied());
            }
        }
        self.scanned.set(scanned);
        None
    }

    /// Materialize the overlay.  Later occurrences of a duplicate key
    /// replace earlier ones, so the overlay resolves duplicates to the
    /// last insertion while the sequential view keeps all of them.
    pub(crate) fn build(&self, entries: &[(String, Value)]) {
        let mut table = HashMap::with_capacity(entries.len());
        for (i, (k, _)) in entries.iter().enumerate() {
            table.insert(k.clone(), i);
        }
        tracing::debug!(
            fields = entries.len(),
            scanned = self.scanned.get(),
            "built object key index"
        );
        *self.table.borrow_mut() = Some(table);
    }

    /// Discard the overlay and reset the counter.  Must run before any
    /// field-list mutation becomes visible.
    pub(crate) fn invalidate(&mut self) {
        *self.table.get_mut() = None;
        self.scanned.set(0);
    }

    pub(crate) fn is_built(&self) -> bool {
        self.table.borrow().is_some()
    }
}

impl Default for FieldIndex {
    fn default() -> Self {
        FieldIndex::new()
    }
}

impl Clone for FieldIndex {
    /// Cloned containers start with a cold cache.
    fn clone(&self) -> Self {
        FieldIndex::new()
    }
}
