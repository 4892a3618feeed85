//! The canvas: a block graph, its layout driver and the user operations that mutate them.

use stratoband_geom::Rect;
use stratoband_graph::{
    Block, BlockGraph, BlockId, DataSlice, Dimension, GraphEvent, IdSet, PlaceholderOptions,
};

use crate::config::Config;
use crate::error::Result;
use crate::layout::{LayoutDriver, LayoutPass};
use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq)]
struct Drag {
    block: BlockId,
    placeholders: Vec<BlockId>,
}

/// Owns the graph and forwards host actions into it.
///
/// Every mutation queues [`GraphEvent`]s; the host drains them with [`Canvas::drain_events`]
/// after each action and sees them in mutation order.
#[derive(Debug, Default)]
pub struct Canvas {
    graph: BlockGraph,
    driver: LayoutDriver,
    config: Config,
    selection: Selection,
    drag: Option<Drag>,
}

impl Canvas {
    pub fn new(config: Config) -> Self {
        Self {
            graph: BlockGraph::new(),
            driver: LayoutDriver::new(&config),
            config,
            selection: Selection::default(),
            drag: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn graph(&self) -> &BlockGraph {
        &self.graph
    }

    /// Direct graph access for host-side edits (bounds, labels, explicit edges).
    pub fn graph_mut(&mut self) -> &mut BlockGraph {
        &mut self.graph
    }

    /// Adds a block for `slice` with the default size and bands it with every block it shares
    /// data with.
    pub fn add_block(&mut self, label: impl Into<String>, slice: &impl DataSlice) -> BlockId {
        let layout = &self.config.layout;
        let block = Block::from_slice(label, slice).with_bounds(Rect::unplaced(
            layout.default_block_width,
            layout.default_block_height,
        ));
        let id = self.graph.add_vertex(block);
        self.graph.create_band_edges(id);
        id
    }

    pub fn remove_block(&mut self, id: BlockId) -> Option<Block> {
        if self.drag.as_ref().is_some_and(|d| d.block == id) {
            self.cancel_drag();
        }
        self.graph.remove(id)
    }

    pub fn split_block(
        &mut self,
        id: BlockId,
        dimension: Dimension,
        groups: &[IdSet],
    ) -> Result<Vec<BlockId>> {
        Ok(self.graph.split(id, dimension, groups)?)
    }

    /// Starts dragging `block`: materialises every slot it could be dropped into and returns
    /// the placeholder ids. A drag already in progress is cancelled first.
    pub fn begin_drag(&mut self, block: BlockId, options: PlaceholderOptions) -> Vec<BlockId> {
        if self.drag.is_some() {
            self.cancel_drag();
        }
        let Some(template) = self.graph.block(block).cloned() else {
            return Vec::new();
        };
        let slots = self.graph.find_placeholders(block, options);
        let placeholders = self.graph.insert_placeholders(&slots, &template);
        if let Some(b) = self.graph.block_mut(block) {
            b.flags.dragged = true;
        }
        tracing::debug!(%block, placeholders = placeholders.len(), "begin drag");
        self.drag = Some(Drag {
            block,
            placeholders: placeholders.clone(),
        });
        placeholders
    }

    /// Drops the dragged block onto `placeholder` and clears the other placeholders. An
    /// unknown placeholder or a rejected move cancels the drag and returns `false`.
    pub fn drop_on(&mut self, placeholder: BlockId) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if !drag.placeholders.contains(&placeholder)
            || !self.graph.move_block(drag.block, placeholder)
        {
            self.drag = Some(drag);
            self.cancel_drag();
            return false;
        }
        let rest: Vec<BlockId> = drag
            .placeholders
            .iter()
            .copied()
            .filter(|&p| p != placeholder)
            .collect();
        self.graph.remove_placeholders(&rest);
        if let Some(b) = self.graph.block_mut(drag.block) {
            b.flags.dragged = false;
        }
        tracing::debug!(block = %drag.block, %placeholder, "drop");
        true
    }

    /// Removes every placeholder, leaving the graph as it was before the drag started.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        self.graph.remove_placeholders(&drag.placeholders);
        let stray = self.graph.placeholder_ids();
        if !stray.is_empty() {
            tracing::warn!(count = stray.len(), "removing placeholders left from an earlier drag");
            self.graph.remove_placeholders(&stray);
        }
        if let Some(b) = self.graph.block_mut(drag.block) {
            b.flags.dragged = false;
        }
        tracing::debug!(block = %drag.block, "cancel drag");
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Translates `block` together with everything rigidly attached to it.
    pub fn drag_by(&mut self, block: BlockId, dx: f64, dy: f64) {
        for id in self.graph.connected_set_of(block) {
            if let Some(b) = self.graph.block_mut(id) {
                b.translate(dx, dy);
            }
        }
    }

    pub fn sort_by(&mut self, block: BlockId, dimension: Dimension) -> bool {
        self.graph.sort_by(block, dimension)
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Runs layout passes until one leaves nothing to redo, at most `maxPasses` times.
    pub fn layout(&mut self) -> LayoutPass {
        let max = self.config.layout.max_passes.max(1);
        let mut pass = LayoutPass::default();
        for i in 0..max {
            pass = self.driver.run(&mut self.graph, &self.selection);
            if !pass.needs_another_pass {
                tracing::trace!(passes = i + 1, "layout settled");
                break;
            }
        }
        pass
    }

    pub fn drain_events(&mut self) -> Vec<GraphEvent> {
        self.graph.drain_events()
    }
}
