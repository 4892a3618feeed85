//! Connected sets over rigid (magnetic/beam) edges.
//!
//! Bands do not count: they join groups that move independently. The cache is rebuilt on
//! first query after any rigid change, keyed by the graph generation.

use rustc_hash::FxBuildHasher;
use std::cell::RefMut;
use std::collections::VecDeque;

use super::BlockGraph;
use crate::ids::BlockId;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub(in crate::graph) struct ConnectivityCache {
    generation: u64,
    component_of: HashMap<BlockId, usize>,
    sets: Vec<Vec<BlockId>>,
}

impl BlockGraph {
    fn ensure_connectivity(&self) -> RefMut<'_, ConnectivityCache> {
        let generation = self.generation;
        let mut cache = self.connectivity.borrow_mut();
        let stale = cache
            .as_ref()
            .map(|c| c.generation != generation)
            .unwrap_or(true);
        if stale {
            *cache = Some(self.build_connectivity());
        }
        RefMut::map(cache, |c| {
            c.get_or_insert_with(|| ConnectivityCache {
                generation,
                component_of: HashMap::default(),
                sets: Vec::new(),
            })
        })
    }

    fn build_connectivity(&self) -> ConnectivityCache {
        let mut component_of: HashMap<BlockId, usize> = HashMap::default();
        let mut sets: Vec<Vec<BlockId>> = Vec::new();

        for &start in self.vertices.keys() {
            if component_of.contains_key(&start) {
                continue;
            }
            let idx = sets.len();
            component_of.insert(start, idx);
            let mut set: Vec<BlockId> = Vec::new();
            let mut q: VecDeque<BlockId> = VecDeque::new();
            q.push_back(start);
            while let Some(v) = q.pop_front() {
                set.push(v);
                for e in self.edges_of(v) {
                    if !e.kind.is_rigid() {
                        continue;
                    }
                    let Some(w) = e.opposite(v) else {
                        continue;
                    };
                    if !component_of.contains_key(&w) {
                        component_of.insert(w, idx);
                        q.push_back(w);
                    }
                }
            }
            sets.push(set);
        }

        ConnectivityCache {
            generation: self.generation,
            component_of,
            sets,
        }
    }

    /// Blocks rigidly connected to `block`, including itself; empty when absent.
    pub fn connected_set_of(&self, block: BlockId) -> Vec<BlockId> {
        let cache = self.ensure_connectivity();
        cache
            .component_of
            .get(&block)
            .map(|&i| cache.sets[i].clone())
            .unwrap_or_default()
    }

    pub fn connected_sets(&self) -> Vec<Vec<BlockId>> {
        self.ensure_connectivity().sets.clone()
    }

    pub fn path_exists(&self, a: BlockId, b: BlockId) -> bool {
        let cache = self.ensure_connectivity();
        match (cache.component_of.get(&a), cache.component_of.get(&b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}
