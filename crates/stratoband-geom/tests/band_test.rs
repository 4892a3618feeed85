use stratoband_geom::{Axis, Band, BandOptions, Connector, Point, RadiusInterpolation, Rect};

fn full() -> Connector {
    Connector::new(0.5, 0.5)
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn facing_aligned_blocks_get_a_straight_band() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(200.0, 0.0, 100.0, 100.0);
    let band = Band::new(&a, &b, Axis::Horizontal, &full(), &full(), &BandOptions::default());

    assert_eq!(band.control_points().len(), 2);
    assert!(close(band.centerline()[0], Point::new(100.0, 50.0)));
    assert!(close(*band.centerline().last().unwrap(), Point::new(200.0, 50.0)));
    assert_eq!(band.source_radius(), 50.0);
    assert_eq!(band.target_radius(), 50.0);

    let [top, bottom] = band.stroke();
    assert!(close(top[0], Point::new(100.0, 100.0)));
    assert!(close(bottom[0], Point::new(100.0, 0.0)));
}

#[test]
fn band_attaches_to_the_side_facing_the_other_block() {
    let a = Rect::new(300.0, 0.0, 100.0, 100.0);
    let b = Rect::new(0.0, 0.0, 100.0, 100.0);
    let band = Band::new(&a, &b, Axis::Horizontal, &full(), &full(), &BandOptions::default());
    assert!(close(band.control_points()[0], Point::new(300.0, 50.0)));
    assert!(close(
        *band.control_points().last().unwrap(),
        Point::new(100.0, 50.0)
    ));
}

#[test]
fn offset_connectors_produce_an_s_curve_with_preserved_endpoints() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(200.0, 0.0, 100.0, 100.0);
    let top_quarter = Connector::new(0.25, 0.25);
    let bottom_quarter = Connector::new(0.75, 0.25);
    let band = Band::new(
        &a,
        &b,
        Axis::Horizontal,
        &top_quarter,
        &bottom_quarter,
        &BandOptions::default(),
    );

    assert_eq!(band.control_points().len(), 4);
    assert!(close(band.centerline()[0], Point::new(100.0, 25.0)));
    assert!(close(*band.centerline().last().unwrap(), Point::new(200.0, 75.0)));
    assert!(band.centerline().len() > 4);
}

#[test]
fn vertical_bands_attach_to_top_and_bottom_edges() {
    let a = Rect::new(0.0, 0.0, 100.0, 50.0);
    let b = Rect::new(0.0, 150.0, 100.0, 50.0);
    let band = Band::new(&a, &b, Axis::Vertical, &full(), &full(), &BandOptions::default());

    assert!(close(band.control_points()[0], Point::new(50.0, 50.0)));
    assert!(close(
        *band.control_points().last().unwrap(),
        Point::new(50.0, 150.0)
    ));
    // Radius is measured along the attached (horizontal) edge.
    assert_eq!(band.source_radius(), 50.0);
}

#[test]
fn non_facing_blocks_route_through_offset_points() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 200.0, 100.0, 100.0);
    let options = BandOptions {
        spline: false,
        ..Default::default()
    };
    let band = Band::new(&a, &b, Axis::Horizontal, &full(), &full(), &options);
    let ctrl = band.control_points();
    assert_eq!(ctrl.len(), 4);
    assert!(close(ctrl[1], Point::new(120.0, 50.0)));
    assert!(close(ctrl[2], Point::new(30.0, 250.0)));
}

#[test]
fn overlapping_blocks_take_the_question_mark_detour() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 20.0, 100.0, 100.0);
    let options = BandOptions {
        spline: false,
        ..Default::default()
    };
    let band = Band::new(&a, &b, Axis::Horizontal, &full(), &full(), &options);
    let ctrl = band.control_points();
    assert_eq!(ctrl.len(), 6);
    assert!(close(ctrl[2], Point::new(120.0, 140.0)));
    assert!(close(ctrl[3], Point::new(30.0, 140.0)));
}

#[test]
fn fill_is_top_plus_reversed_bottom() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(200.0, 40.0, 100.0, 100.0);
    let band = Band::new(&a, &b, Axis::Horizontal, &full(), &full(), &BandOptions::default());
    let fill = band.fill();
    assert_eq!(fill.len(), 2 * band.centerline().len());
    assert_eq!(fill[0], band.top()[0]);
    assert_eq!(*fill.last().unwrap(), band.bottom()[0]);
    assert!(band.fill_path_d().ends_with('Z'));
}

#[test]
fn sub_ribbon_shares_the_centerline_with_smaller_radii() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(200.0, 0.0, 100.0, 100.0);
    let options = BandOptions {
        radius_interpolation: RadiusInterpolation::Smooth,
        ..Default::default()
    };
    let band = Band::new(&a, &b, Axis::Horizontal, &full(), &full(), &options);
    let sub = band.sub_ribbon(0.5, 2.0);

    assert_eq!(sub.centerline(), band.centerline());
    assert_eq!(sub.source_radius(), 25.0);
    assert_eq!(sub.target_radius(), 50.0);
    assert!(!sub.is_empty());
    assert!(band.sub_ribbon(0.0, 0.0).is_empty());
}
