use stratoband_graph::{Block, BlockGraph, DimensionData, EdgeDirection, EdgeKind, IdType};

fn block(label: &str) -> Block {
    Block::new(
        label,
        DimensionData::new(IdType::new("gene", "gene"), [1, 2]),
        DimensionData::new(IdType::new("sample", "sample"), [10, 20]),
    )
}

#[test]
fn rigid_edge_merges_components_and_disconnect_splits_them() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    let c = g.add_vertex(block("c"));
    assert_eq!(g.connected_sets().len(), 3);
    assert!(!g.path_exists(a, b));

    let ab = g.connect(a, b, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();
    assert!(g.path_exists(a, b));
    assert_eq!(g.connected_sets().len(), 2);

    g.connect(b, c, EdgeKind::Beam, EdgeDirection::Below).unwrap();
    let mut set = g.connected_set_of(c);
    set.sort();
    assert_eq!(set, vec![a, b, c]);

    g.disconnect(ab);
    assert!(!g.path_exists(a, c));
    assert!(g.path_exists(b, c));
}

#[test]
fn alternative_path_keeps_component_together() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    let c = g.add_vertex(block("c"));
    let d = g.add_vertex(block("d"));
    // a b
    // c d
    let ab = g.connect(a, b, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();
    g.connect(a, c, EdgeKind::Magnetic, EdgeDirection::Below).unwrap();
    g.connect(c, d, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();
    g.connect(b, d, EdgeKind::Magnetic, EdgeDirection::Below).unwrap();

    g.disconnect(ab);
    assert!(g.path_exists(a, b));
}

#[test]
fn bands_do_not_connect() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    g.connect(a, b, EdgeKind::band(EdgeDirection::LeftOf.dimension()), EdgeDirection::LeftOf)
        .unwrap();
    assert!(!g.path_exists(a, b));
    assert_eq!(g.connected_set_of(a), vec![a]);
}

#[test]
fn removed_block_leaves_its_set() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    g.connect(a, b, EdgeKind::Magnetic, EdgeDirection::Above).unwrap();
    assert_eq!(g.connected_set_of(a).len(), 2);

    g.remove(b);
    assert_eq!(g.connected_set_of(a), vec![a]);
    assert!(g.connected_set_of(b).is_empty());
    assert!(!g.path_exists(a, b));
}

#[test]
fn occupied_rigid_slot_is_rejected() {
    let mut g = BlockGraph::new();
    let a = g.add_vertex(block("a"));
    let b = g.add_vertex(block("b"));
    let c = g.add_vertex(block("c"));
    g.connect(a, b, EdgeKind::Magnetic, EdgeDirection::RightOf).unwrap();
    let err = g
        .connect(a, c, EdgeKind::Magnetic, EdgeDirection::RightOf)
        .unwrap_err();
    assert!(matches!(err, stratoband_graph::Error::SlotOccupied { .. }));
    assert!(g.connect(a, a, EdgeKind::Magnetic, EdgeDirection::LeftOf).is_err());
}
