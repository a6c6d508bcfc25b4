//! Per-gamut precomputed state shared by the mapping methods.
//!
//! Edge-seeker tables and Oklab gamut matrices are built on first request
//! and kept for the lifetime of the context. Entries are immutable and
//! handed out as `Arc`, so concurrent sweeps can share one context.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use gamut_color::{Color, Gamut, Space};

use crate::edge_table::{EdgeTable, Lch};
use crate::oklab_gamut::OklabGamut;

/// Lazily built, read-only-after-build caches keyed by [`Gamut`].
#[derive(Debug, Default)]
pub struct MethodContext {
    edge_tables: RwLock<HashMap<Gamut, Arc<EdgeTable>>>,
    oklab_gamuts: RwLock<HashMap<Gamut, Arc<OklabGamut>>>,
}

impl MethodContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge-seeker table for `gamut`, building it on first use.
    pub fn edge_table(&self, gamut: Gamut) -> Arc<EdgeTable> {
        get_or_build(&self.edge_tables, gamut, || {
            debug!(gamut = %gamut, "building edge-seeker table");
            EdgeTable::build(|r, g, b| {
                let [l, c, h] = Color::rgb(gamut, [r, g, b]).to(Space::Oklch).coords();
                Lch { l, c, h }
            })
        })
    }

    /// Oklab transforms for `gamut`, building them on first use.
    pub fn oklab_gamut(&self, gamut: Gamut) -> Arc<OklabGamut> {
        get_or_build(&self.oklab_gamuts, gamut, || OklabGamut::new(gamut))
    }

    /// Number of edge-seeker tables built so far.
    pub fn edge_table_count(&self) -> usize {
        self.edge_tables.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

fn get_or_build<K, V>(cache: &RwLock<HashMap<K, Arc<V>>>, key: K, build: impl FnOnce() -> V) -> Arc<V>
where
    K: Hash + Eq + Copy,
{
    // Read lock first (fast path)
    {
        let map = cache.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(v) = map.get(&key) {
            return Arc::clone(v);
        }
    }

    // Build under the write lock so a table is only ever built once.
    let mut map = cache.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(map.entry(key).or_insert_with(|| Arc::new(build())))
}
