use stratoband_graph::{
    Block, BlockGraph, Dimension, DimensionData, EdgeDirection, EdgeKind, EdgeTag, GraphEvent,
    IdType, PlaceholderOptions,
};

fn block(label: &str) -> Block {
    Block::new(
        label,
        DimensionData::new(IdType::new("gene", "gene"), [1, 2, 3]),
        DimensionData::new(IdType::new("sample", "sample"), [10, 20]),
    )
}

fn placeholder_at(
    g: &mut BlockGraph,
    node: stratoband_graph::BlockId,
    anchor: stratoband_graph::BlockId,
    direction: EdgeDirection,
    options: PlaceholderOptions,
) -> stratoband_graph::BlockId {
    let slot = g
        .find_placeholders(node, options)
        .into_iter()
        .find(|p| p.anchor == anchor && p.direction == direction)
        .unwrap();
    let template = g.block(node).unwrap().clone();
    g.insert_placeholders(&[slot], &template)[0]
}

#[test]
fn move_takes_over_the_placeholder_edges() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let n = g.add_vertex(block("n"));
    let p = placeholder_at(&mut g, n, a, EdgeDirection::RightOf, PlaceholderOptions::default());
    let expected: Vec<_> = g
        .edges_of(p)
        .map(|e| (e.opposite(p).unwrap(), e.kind.tag(), e.direction_from(p).unwrap()))
        .collect();

    assert!(g.move_block(n, p));

    assert!(!g.contains(p));
    assert_eq!(g.block_count(), 2);
    let got: Vec<_> = g
        .edges_of(n)
        .map(|e| (e.opposite(n).unwrap(), e.kind.tag(), e.direction_from(n).unwrap()))
        .collect();
    assert_eq!(got, expected);
    assert_eq!(got, vec![(a, EdgeTag::Magnetic, EdgeDirection::LeftOf)]);
    assert!(g.path_exists(a, n));
}

#[test]
fn moved_block_leaves_its_old_chain_connected() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let c = g.add_vertex(block("c"));
    let n = g.add_vertex(block("n"));
    let d = g.add_vertex(block("d"));
    g.connect(c, n, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();
    g.connect(n, d, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();
    let p = placeholder_at(&mut g, n, a, EdgeDirection::Below, PlaceholderOptions::default());

    assert!(g.move_block(n, p));

    assert_eq!(g.edge_between(c, d).unwrap().kind.tag(), EdgeTag::Magnetic);
    assert_eq!(
        g.neighbor_in_direction(a, EdgeDirection::Below),
        Some(n)
    );
    assert_eq!(g.edges_of(n).count(), 1);
}

#[test]
fn move_into_band_gap_keeps_the_band() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    let n = g.add_vertex(block("n"));
    g.connect(a, b, EdgeKind::band(Dimension::D2), EdgeDirection::Below)
        .unwrap();
    let p = placeholder_at(&mut g, n, a, EdgeDirection::Below, PlaceholderOptions::all());

    assert!(g.move_block(n, p));
    assert_eq!(g.edge_between(a, n).unwrap().kind.tag(), EdgeTag::Magnetic);
    let band = g.edge_between(n, b).unwrap();
    assert_eq!(band.kind.tag(), EdgeTag::Band);
    assert_eq!(band.direction_from(n), Some(EdgeDirection::Below));
    assert_eq!(band.kind.band_link().unwrap().overlap().len(), 2);
}

#[test]
fn transposed_placeholder_transposes_the_block() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let n = g.add_vertex(block("n").transposed());
    let p = placeholder_at(
        &mut g,
        n,
        a,
        EdgeDirection::RightOf,
        PlaceholderOptions {
            include_transpose: true,
            ..Default::default()
        },
    );

    assert!(g.move_block(n, p));
    let moved = g.block(n).unwrap();
    assert!(!moved.is_transposed());
    assert_eq!(moved.id_type(Dimension::D1).category, "gene");
}

#[test]
fn incompatible_move_changes_nothing() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let n = g.add_vertex(block("n"));
    let other = g.add_vertex(Block::new(
        "other",
        DimensionData::new(IdType::new("compound", "compound"), [1]),
        DimensionData::new(IdType::new("site", "site"), [2]),
    ));
    g.connect(a, n, EdgeKind::Magnetic, EdgeDirection::Above).unwrap();
    g.drain_events();

    assert!(!g.move_block(n, other));
    assert!(!g.move_block(n, n));
    assert!(!g.move_block(n, stratoband_graph::BlockId::from_raw(99)));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.block_count(), 3);
    assert!(g.events().is_empty());
}

#[test]
fn move_reports_removal_then_addition() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let n = g.add_vertex(block("n"));
    let p = placeholder_at(&mut g, n, a, EdgeDirection::LeftOf, PlaceholderOptions::default());
    g.drain_events();

    g.move_block(n, p);
    let vertices: Vec<_> = g
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            GraphEvent::VertexAdded { vertex, .. } => Some(("added", vertex)),
            GraphEvent::VertexRemoved { vertex, .. } => Some(("removed", vertex)),
            _ => None,
        })
        .collect();
    assert_eq!(
        vertices,
        vec![("removed", n), ("removed", p), ("added", n)]
    );
}

#[test]
fn move_onto_a_real_block_is_refused() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let n = g.add_vertex(block("n"));
    let real = g.add_vertex(block("real"));
    g.connect(a, real, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();
    g.drain_events();

    assert!(!g.move_block(n, real));

    assert!(g.contains(real));
    assert_eq!(g.block_count(), 3);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.neighbor_in_direction(a, EdgeDirection::RightOf), Some(real));
    assert_eq!(g.edges_of(n).count(), 0);
    assert!(g.events().is_empty());
}
