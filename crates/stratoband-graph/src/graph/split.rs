//! Splitting a block into one child per group of its ids.

use stratoband_geom::{ConnectorStrategy, Rect};

use super::BlockGraph;
use crate::block::Dimension;
use crate::edge::{BandLink, EdgeKind};
use crate::error::{Error, Result};
use crate::ids::{BlockId, IdSet};

impl BlockGraph {
    /// Creates a child block for every group in `groups`, each carrying that subset of the
    /// parent's ids along `dimension` and the parent's full ids along the other dimension.
    ///
    /// Every child is linked to the parent with a `ParentChild` edge whose parent-side
    /// connector is anchored at the group's offset, and consecutive children are linked with
    /// `Sibling` edges along the other dimension. Groups must be non-empty, pairwise disjoint
    /// subsets of the parent's ids, and the parent must not be a placeholder.
    pub fn split(
        &mut self,
        parent: BlockId,
        dimension: Dimension,
        groups: &[IdSet],
    ) -> Result<Vec<BlockId>> {
        let block = self.block(parent).ok_or(Error::MissingVertex(parent))?;
        let invalid = |reason: &str| Error::InvalidSplit {
            block: parent,
            reason: reason.to_string(),
        };
        if block.is_placeholder() {
            return Err(invalid("placeholder blocks cannot be split"));
        }
        if groups.is_empty() {
            return Err(invalid("no groups"));
        }
        let ids = block.ids(dimension);
        let mut seen = IdSet::new();
        for group in groups {
            if group.is_empty() {
                return Err(invalid("empty group"));
            }
            if !group.is_subset(ids) {
                return Err(invalid("group holds ids the block does not have"));
            }
            if !group.is_disjoint(&seen) {
                return Err(invalid("groups overlap"));
            }
            seen.extend(group.iter().copied());
        }

        let total = block.size(dimension).max(ids.len()) as f64;
        let template = block.clone();
        let mut children: Vec<BlockId> = Vec::with_capacity(groups.len());
        let mut start = 0usize;
        for (i, group) in groups.iter().enumerate() {
            let mut child = template.clone();
            child.label = format!("{} [{}]", template.label, i + 1);
            child.set_ids(dimension, group.clone());
            child.set_sort_priority(Dimension::D1, Default::default());
            child.set_sort_priority(Dimension::D2, Default::default());
            child.set_bounds(Rect::unplaced(
                template.bounds().width,
                template.bounds().height,
            ));
            child.flags = Default::default();
            let id = self.add_vertex(child);

            let offset = start as f64 / total;
            let link = BandLink::with_strategies(
                dimension,
                ConnectorStrategy::Parent { offset },
                ConnectorStrategy::Shared,
            );
            self.insert_edge(parent, id, EdgeKind::ParentChild(link), dimension.after());

            if let Some(&prev) = children.last() {
                let other = dimension.other();
                self.insert_edge(
                    prev,
                    id,
                    EdgeKind::Sibling(BandLink::new(other)),
                    other.after(),
                );
            }
            start += group.len();
            children.push(id);
        }

        tracing::debug!(%parent, ?dimension, children = children.len(), "split block");
        Ok(children)
    }
}
