//! Per-parse key/value storage for open-block state.
//!
//! Block parsers stash transient state here between the Open and Close
//! transitions of a block. The context belongs to a single parse: two
//! documents parsed concurrently must each have their own instance.
//! Another parser may clear an entry out of band (forced closure), so
//! lookups always return an `Option` and callers treat absence as
//! "already closed".

use std::any::Any;
use std::sync::atomic::{AtomicU32, Ordering};

use rustc_hash::FxHashMap;

static NEXT_KEY: AtomicU32 = AtomicU32::new(0);

/// Identity of a context slot.
///
/// Keys are allocated from a process-wide counter so distinct parser
/// instances never collide; the values they index live in a
/// [`ParseContext`], never in globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextKey(u32);

impl ContextKey {
    /// Allocate a fresh, unique key.
    pub fn new() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ContextKey {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed key/value storage scoped to one parse.
#[derive(Default)]
pub struct ParseContext {
    slots: FxHashMap<ContextKey, Box<dyn Any>>,
}

impl ParseContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, replacing any previous value.
    pub fn set<T: Any>(&mut self, key: ContextKey, value: T) {
        self.slots.insert(key, Box::new(value));
    }

    /// Look up the value under `key`, if present and of type `T`.
    pub fn get<T: Any>(&self, key: ContextKey) -> Option<&T> {
        self.slots.get(&key).and_then(|v| v.downcast_ref())
    }

    /// Remove the value under `key`. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: ContextKey) {
        self.slots.remove(&key);
    }
}
