//! Sort-key cycling.

use super::BlockGraph;
use crate::block::{Dimension, SortPriority};
use crate::ids::BlockId;

impl BlockGraph {
    /// Advances the sort state of `node` along `dimension`:
    /// `NO_SORTING` -> `TOP_PRIORITY` -> lowest active rank -> `NO_SORTING`.
    ///
    /// Other sortable blocks lined up with `node` (not crossing a sort barrier) shift by one
    /// rank so the active ranks stay contiguous. Blocks pushed past `MIN_PRIORITY` stop sorting.
    pub fn sort_by(&mut self, node: BlockId, dimension: Dimension) -> bool {
        let Some(current) = self
            .block(node)
            .filter(|b| !b.is_placeholder())
            .map(|b| b.sort_priority(dimension))
        else {
            return false;
        };

        let group: Vec<(BlockId, SortPriority)> = self
            .walk_along(dimension, node, |e| !e.kind.is_sort_barrier())
            .into_iter()
            .filter(|&id| id != node)
            .filter_map(|id| {
                self.block(id)
                    .filter(|b| !b.is_placeholder())
                    .map(|b| (id, b.sort_priority(dimension)))
            })
            .collect();

        let next = if !current.is_active() {
            for &(id, p) in &group {
                self.set_priority(id, dimension, p.demoted());
            }
            SortPriority::TOP_PRIORITY
        } else if current.is_top() {
            let lowest = group
                .iter()
                .map(|(_, p)| p.value())
                .max()
                .unwrap_or(SortPriority::NO_SORTING.value());
            let rank = SortPriority::rank(lowest.max(SortPriority::TOP_PRIORITY.value() + 1));
            for &(id, p) in &group {
                if p.value() > current.value() && p <= rank {
                    self.set_priority(id, dimension, p.promoted());
                }
            }
            rank
        } else {
            for &(id, p) in &group {
                if p > current {
                    self.set_priority(id, dimension, p.promoted());
                }
            }
            SortPriority::NO_SORTING
        };

        self.set_priority(node, dimension, next);
        tracing::debug!(%node, ?dimension, from = current.value(), to = next.value(), "sort by");
        true
    }

    fn set_priority(&mut self, block: BlockId, dimension: Dimension, priority: SortPriority) {
        if let Some(entry) = self.vertices.get_mut(&block) {
            entry.block.set_sort_priority(dimension, priority);
        }
    }
}
