//! One layout pass: sizing, placement, normalisation and ribbon construction.

use stratoband_geom::{Band, BandOptions, Rect};
use stratoband_graph::{BlockGraph, BlockId, EdgeDirection, EdgeId, EdgeKind};

use crate::config::{ColorConfig, Config, LayoutConfig};
use crate::ribbon::{Highlight, Ribbon};
use crate::selection::Selection;
use crate::timing::{LayoutTimings, Phase, layout_timing_enabled};

#[derive(Debug, Clone, Default)]
pub struct LayoutPass {
    pub ribbons: Vec<Ribbon>,
    /// Set when this pass changed block sizes; positions derived from the old sizes are stale.
    pub needs_another_pass: bool,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutDriver {
    layout: LayoutConfig,
    band: BandOptions,
    colors: ColorConfig,
}

impl LayoutDriver {
    pub fn new(config: &Config) -> Self {
        Self {
            layout: config.layout.clone(),
            band: config.band.clone(),
            colors: config.colors.clone(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn run(&self, graph: &mut BlockGraph, selection: &Selection) -> LayoutPass {
        let mut timings = LayoutTimings::new(layout_timing_enabled());
        let resized = timings.time(Phase::Sizing, || self.enforce_sizes(graph));
        timings.time(Phase::Placement, || self.place(graph));
        timings.time(Phase::Normalize, || shift_to_non_negative(graph));
        let ribbons = timings.time(Phase::Ribbons, || self.ribbons(graph, selection));
        timings.finish(graph.block_count(), ribbons.len());

        LayoutPass {
            ribbons,
            needs_another_pass: resized,
        }
    }

    /// Gives sizeless blocks the default size and grows undersized ones to the minimum.
    fn enforce_sizes(&self, graph: &mut BlockGraph) -> bool {
        let cfg = &self.layout;
        let mut changed = false;
        for id in graph.block_ids() {
            let Some(block) = graph.block_mut(id) else {
                continue;
            };
            let b = block.bounds();
            let width = fit(b.width, cfg.default_block_width, cfg.min_block_width);
            let height = fit(b.height, cfg.default_block_height, cfg.min_block_height);
            if width != b.width || height != b.height {
                block.set_bounds(Rect::new(b.x, b.y, width, height));
                changed = true;
            }
        }
        if changed {
            tracing::debug!("block sizes adjusted");
        }
        changed
    }

    /// Places every unplaced block: next to a placed neighbour when it has one, otherwise at
    /// the packing cursor right of everything placed so far.
    fn place(&self, graph: &mut BlockGraph) {
        let gutter = self.layout.gutter;
        let mut cursor = graph
            .blocks()
            .filter(|(_, b)| b.bounds().is_placed())
            .map(|(_, b)| b.bounds().right() + gutter)
            .fold(None, |acc: Option<f64>, r| Some(acc.map_or(r, |a| a.max(r))))
            .unwrap_or(0.0);

        loop {
            while self.snap_one(graph) {}
            let Some((id, b)) = graph
                .blocks()
                .find(|(_, b)| !b.bounds().is_placed())
                .map(|(id, b)| (id, b.bounds()))
            else {
                break;
            };
            let x = if b.x.is_nan() { cursor } else { b.x };
            let y = if b.y.is_nan() { 0.0 } else { b.y };
            if let Some(block) = graph.block_mut(id) {
                block.set_bounds(Rect::new(x, y, b.width, b.height));
            }
            cursor = cursor.max(x + b.width + gutter);
            tracing::trace!(block = %id, x, y, "packed block");
        }
    }

    /// Snaps one unplaced block beside a placed neighbour. Returns `false` when none could be.
    ///
    /// Among all candidate edges the lowest [`snap_rank`] wins, so split children line up
    /// along their sibling chain instead of all landing on the parent's side.
    fn snap_one(&self, graph: &mut BlockGraph) -> bool {
        let mut best: Option<(u8, BlockId, Rect)> = None;
        for (id, block) in graph.blocks() {
            let own = block.bounds();
            if own.is_placed() {
                continue;
            }
            for e in graph.edges_of(id) {
                let rank = snap_rank(&e.kind);
                if best.as_ref().is_some_and(|(r, _, _)| *r <= rank) {
                    continue;
                }
                let (Some(other), Some(direction)) = (e.opposite(id), e.direction_from(id)) else {
                    continue;
                };
                let Some(n) = graph.block(other).map(|b| b.bounds()) else {
                    continue;
                };
                if !n.is_placed() {
                    continue;
                }
                let gap = if e.kind.is_rigid() {
                    0.0
                } else {
                    self.layout.gutter
                };
                best = Some((rank, id, beside(&own, &n, direction, gap)));
            }
        }
        let Some((_, id, rect)) = best else {
            return false;
        };
        if let Some(block) = graph.block_mut(id) {
            block.set_bounds(rect);
        }
        tracing::trace!(block = %id, x = rect.x, y = rect.y, "snapped block");
        true
    }

    fn ribbons(&self, graph: &mut BlockGraph, selection: &Selection) -> Vec<Ribbon> {
        let ids: Vec<EdgeId> = graph
            .edges()
            .filter(|e| e.kind.is_ribbon())
            .map(|e| e.id)
            .collect();
        let mut out = Vec::with_capacity(ids.len());
        for id in ids {
            graph.update_edge(id);
            if let Some(r) = self.ribbon(graph, id, selection) {
                out.push(r);
            }
        }
        out
    }

    fn ribbon(&self, graph: &BlockGraph, id: EdgeId, selection: &Selection) -> Option<Ribbon> {
        let edge = graph.edge(id)?;
        let link = edge.kind.band_link()?;
        let tag = edge.kind.tag();
        let color = self.colors.for_tag(tag)?;
        let source = graph.block(edge.source)?;
        let target = graph.block(edge.target)?;

        let band = Band::new(
            &source.bounds(),
            &target.bounds(),
            link.dimension.axis(),
            &link.source_connector(),
            &link.target_connector(),
            &self.band,
        );
        let id_type = source.id_type(link.dimension).clone();
        let highlight = selection
            .fraction_of(&id_type, link.overlap())
            .map(|f| Highlight {
                band: band.sub_ribbon(f, f),
                color: self.colors.highlight,
            });
        Some(Ribbon {
            edge: id,
            tag,
            color,
            band,
            ids: link.overlap().clone(),
            id_type,
            highlight,
        })
    }
}

/// Lower ranks snap first. A parent link is only used when nothing closer is placed.
fn snap_rank(kind: &EdgeKind) -> u8 {
    match kind {
        EdgeKind::Magnetic | EdgeKind::Beam => 0,
        EdgeKind::Sibling(_) => 1,
        EdgeKind::Band(_) => 2,
        EdgeKind::ParentChild(_) => 3,
    }
}

fn fit(v: f64, default: f64, min: f64) -> f64 {
    if !v.is_finite() || v <= 0.0 {
        default.max(min)
    } else {
        v.max(min)
    }
}

/// Rectangle of size `own` placed so that `neighbour` lies in `direction` of it, `gap` apart.
fn beside(own: &Rect, neighbour: &Rect, direction: EdgeDirection, gap: f64) -> Rect {
    let (w, h) = (own.width, own.height);
    let (x, y) = match direction {
        EdgeDirection::RightOf => (neighbour.x - gap - w, neighbour.y),
        EdgeDirection::LeftOf => (neighbour.right() + gap, neighbour.y),
        EdgeDirection::Below => (neighbour.x, neighbour.y - gap - h),
        EdgeDirection::Above => (neighbour.x, neighbour.bottom() + gap),
    };
    Rect::new(x, y, w, h)
}

fn shift_to_non_negative(graph: &mut BlockGraph) {
    let (mut min_x, mut min_y) = (0.0f64, 0.0f64);
    for (_, b) in graph.blocks() {
        let r = b.bounds();
        if r.is_placed() {
            min_x = min_x.min(r.x);
            min_y = min_y.min(r.y);
        }
    }
    if min_x >= 0.0 && min_y >= 0.0 {
        return;
    }
    tracing::debug!(dx = -min_x, dy = -min_y, "shift layout to non-negative");
    for id in graph.block_ids() {
        if let Some(b) = graph.block_mut(id) {
            b.translate(-min_x, -min_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beside_respects_direction_and_gap() {
        let n = Rect::new(100.0, 50.0, 40.0, 30.0);
        let own = Rect::unplaced(20.0, 10.0);
        assert_eq!(
            beside(&own, &n, EdgeDirection::RightOf, 5.0),
            Rect::new(75.0, 50.0, 20.0, 10.0)
        );
        assert_eq!(
            beside(&own, &n, EdgeDirection::LeftOf, 0.0),
            Rect::new(140.0, 50.0, 20.0, 10.0)
        );
        assert_eq!(
            beside(&own, &n, EdgeDirection::Above, 0.0),
            Rect::new(100.0, 80.0, 20.0, 10.0)
        );
        assert_eq!(
            beside(&own, &n, EdgeDirection::Below, 0.0),
            Rect::new(100.0, 40.0, 20.0, 10.0)
        );
    }

    #[test]
    fn fit_falls_back_to_default_then_min() {
        assert_eq!(fit(f64::NAN, 160.0, 40.0), 160.0);
        assert_eq!(fit(0.0, 10.0, 40.0), 40.0);
        assert_eq!(fit(20.0, 160.0, 40.0), 40.0);
        assert_eq!(fit(80.0, 160.0, 40.0), 80.0);
    }
}
