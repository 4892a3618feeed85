use std::collections::HashSet;

use stratoband_graph::{
    Block, BlockGraph, BlockId, DimensionData, EdgeDirection, EdgeKind, EdgeTag, IdSet, IdType,
    PlaceholderOptions,
};

fn block(label: &str) -> Block {
    Block::new(
        label,
        DimensionData::new(IdType::new("gene", "gene"), [1, 2, 3]),
        DimensionData::new(IdType::new("sample", "sample"), [10, 20]),
    )
}

fn slots(found: &[stratoband_graph::Placeholder]) -> HashSet<(BlockId, EdgeDirection)> {
    found.iter().map(|p| (p.anchor, p.direction)).collect()
}

/// Edges as (endpoints, kind, direction seen from the lower id), independent of edge ids and
/// stored orientation.
fn edge_shape(g: &BlockGraph) -> HashSet<(BlockId, BlockId, EdgeTag, EdgeDirection)> {
    g.edges()
        .map(|e| {
            let (lo, hi) = if e.source < e.target {
                (e.source, e.target)
            } else {
                (e.target, e.source)
            };
            (lo, hi, e.kind.tag(), e.direction_from(lo).unwrap())
        })
        .collect()
}

#[test]
fn lone_block_offers_all_four_sides() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let found = g.find_placeholders_for(&block("n"), PlaceholderOptions::default());
    assert_eq!(found.len(), 4);
    assert!(found.iter().all(|p| p.anchor == a && !p.transpose));
    assert_eq!(slots(&found).len(), 4);
}

#[test]
fn occupied_magnetic_slots_need_the_between_option() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    g.connect(a, b, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();

    let plain = g.find_placeholders_for(&block("n"), PlaceholderOptions::default());
    assert_eq!(plain.len(), 6);
    assert!(!slots(&plain).contains(&(a, EdgeDirection::RightOf)));
    assert!(!slots(&plain).contains(&(b, EdgeDirection::LeftOf)));

    let between = g.find_placeholders_for(
        &block("n"),
        PlaceholderOptions {
            include_between_magnetic: true,
            ..Default::default()
        },
    );
    // The gap is offered once, from the side where it lies before the anchor.
    assert_eq!(between.len(), 7);
    assert!(slots(&between).contains(&(b, EdgeDirection::LeftOf)));
    assert!(!slots(&between).contains(&(a, EdgeDirection::RightOf)));
}

#[test]
fn in_graph_node_is_never_an_anchor_or_a_neighbour() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    g.connect(a, b, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();

    let found = g.find_placeholders(a, PlaceholderOptions::all());
    assert!(found.iter().all(|p| p.anchor != a));
    assert_eq!(
        slots(&found),
        HashSet::from([
            (b, EdgeDirection::RightOf),
            (b, EdgeDirection::Above),
            (b, EdgeDirection::Below),
        ])
    );
}

#[test]
fn transposed_slots_only_with_option() {
    let mut g = BlockGraph::new();
    g.add_vertex(block("a"));
    let crosswise = block("n").transposed();

    assert!(
        g.find_placeholders_for(&crosswise, PlaceholderOptions::default())
            .is_empty()
    );
    let found = g.find_placeholders_for(
        &crosswise,
        PlaceholderOptions {
            include_transpose: true,
            ..Default::default()
        },
    );
    assert_eq!(found.len(), 4);
    assert!(found.iter().all(|p| p.transpose));
}

#[test]
fn placeholders_are_never_duplicated() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    let c = g.add_vertex(block("c"));
    g.connect(a, b, EdgeKind::Magnetic, EdgeDirection::Below).unwrap();
    g.connect(b, c, EdgeKind::band(EdgeDirection::RightOf.dimension()), EdgeDirection::RightOf)
        .unwrap();

    let found = g.find_placeholders_for(&block("n"), PlaceholderOptions::all());
    assert_eq!(slots(&found).len(), found.len());
}

#[test]
fn split_links_are_never_offered() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let children = g
        .split(
            a,
            stratoband_graph::Dimension::D1,
            &[IdSet::from([1]), IdSet::from([2, 3])],
        )
        .unwrap();
    let found = g.find_placeholders_for(&block("n"), PlaceholderOptions::all());
    let slots = slots(&found);
    assert!(!slots.contains(&(a, EdgeDirection::RightOf)));
    assert!(!slots.contains(&(children[0], EdgeDirection::LeftOf)));
    assert!(!slots.contains(&(children[0], EdgeDirection::Below)));
}

#[test]
fn insert_then_remove_restores_the_graph() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    let c = g.add_vertex(block("c"));
    g.connect(a, b, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();
    g.connect(b, c, EdgeKind::band(EdgeDirection::Below.dimension()), EdgeDirection::Below)
        .unwrap();
    let before = edge_shape(&g);
    let blocks = g.block_count();

    let template = block("n");
    let found = g.find_placeholders_for(&template, PlaceholderOptions::all());
    let inserted = g.insert_placeholders(&found, &template);
    assert_eq!(inserted.len(), found.len());
    assert!(inserted.iter().all(|&p| g.block(p).unwrap().is_placeholder()));
    assert_eq!(g.placeholder_ids().len(), inserted.len());

    g.remove_placeholders(&inserted);
    assert_eq!(g.block_count(), blocks);
    assert!(g.placeholder_ids().is_empty());
    assert_eq!(edge_shape(&g), before);
}

#[test]
fn splicing_a_band_keeps_it_a_band() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    g.connect(a, b, EdgeKind::band(EdgeDirection::RightOf.dimension()), EdgeDirection::RightOf)
        .unwrap();

    let template = block("n");
    let slot = g
        .find_placeholders_for(&template, PlaceholderOptions::all())
        .into_iter()
        .find(|p| p.anchor == a && p.direction == EdgeDirection::RightOf)
        .unwrap();
    let p = g.insert_placeholders(&[slot], &template)[0];

    assert_eq!(g.edge_between(a, p).unwrap().kind.tag(), EdgeTag::Magnetic);
    assert_eq!(g.edge_between(p, b).unwrap().kind.tag(), EdgeTag::Band);
    assert!(g.edge_between(a, b).is_none());
    assert_eq!(
        g.edge_between(p, b).unwrap().direction_from(p),
        Some(EdgeDirection::RightOf)
    );
}
