//! Directional traversals.

use rustc_hash::FxBuildHasher;

use super::BlockGraph;
use crate::block::Dimension;
use crate::direction::EdgeDirection;
use crate::edge::Edge;
use crate::ids::BlockId;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

impl BlockGraph {
    /// Depth-first walk from `start` that only follows edges accepted by `filter` whose other
    /// end lies in `direction` of the current block. `start` comes first.
    pub fn walk_along_direction<F>(
        &self,
        direction: EdgeDirection,
        start: BlockId,
        filter: F,
    ) -> Vec<BlockId>
    where
        F: Fn(&Edge) -> bool,
    {
        let mut out: Vec<BlockId> = Vec::new();
        if !self.contains(start) {
            return out;
        }
        let mut visited: HashSet<BlockId> = HashSet::default();
        let mut stack: Vec<BlockId> = vec![start];
        while let Some(v) = stack.pop() {
            if !visited.insert(v) {
                continue;
            }
            out.push(v);
            for e in self.edges_in_direction(v, direction) {
                if !filter(e) {
                    continue;
                }
                if let Some(w) = e.opposite(v).filter(|w| !visited.contains(w)) {
                    stack.push(w);
                }
            }
        }
        out
    }

    /// Blocks lined up with `start` along `dimension`, in spatial order: the walk towards
    /// `dimension.before()` reversed, then the walk towards `dimension.after()`. `start`
    /// appears once.
    pub fn walk_along<F>(&self, dimension: Dimension, start: BlockId, filter: F) -> Vec<BlockId>
    where
        F: Fn(&Edge) -> bool,
    {
        let mut out = self.walk_along_direction(dimension.before(), start, &filter);
        out.reverse();
        let after = self.walk_along_direction(dimension.after(), start, &filter);
        out.extend(after.into_iter().skip(1));
        out
    }

    /// Everything reachable from `start` through `filter`ed edges, where the first step out of
    /// `start` is restricted to edges towards `direction` (or, with `include_opposite`, to all
    /// other edges). Beyond the first step the search follows edges in any direction.
    pub fn all_reachable<F>(
        &self,
        direction: EdgeDirection,
        start: BlockId,
        filter: F,
        include_opposite: bool,
    ) -> Vec<BlockId>
    where
        F: Fn(&Edge) -> bool,
    {
        let mut out: Vec<BlockId> = Vec::new();
        if !self.contains(start) {
            return out;
        }
        let mut visited: HashSet<BlockId> = HashSet::default();
        visited.insert(start);
        out.push(start);

        let mut stack: Vec<BlockId> = Vec::new();
        for e in self.edges_of(start) {
            let towards = e.direction_from(start) == Some(direction);
            if towards == include_opposite || !filter(e) {
                continue;
            }
            if let Some(w) = e.opposite(start) {
                stack.push(w);
            }
        }

        while let Some(v) = stack.pop() {
            if !visited.insert(v) {
                continue;
            }
            out.push(v);
            for e in self.edges_of(v) {
                if !filter(e) {
                    continue;
                }
                if let Some(w) = e.opposite(v).filter(|w| !visited.contains(w)) {
                    stack.push(w);
                }
            }
        }
        out
    }
}
