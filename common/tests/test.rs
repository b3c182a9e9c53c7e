use common::shapes::*;
use common::GeometryError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bb(x: f32, y: f32, half_width: f32, half_height: f32) -> BoundingBox {
    BoundingBox::new(Point::new(x, y), half_width, half_height).unwrap()
}

#[test]
fn test_new_and_getters() {
    let rect = bb(2.0, 3.0, 2.0, 3.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.area(), 24.0);
    assert_eq!(rect.left(), 0.0);
    assert_eq!(rect.right(), 4.0);
    assert_eq!(rect.top(), 0.0);
    assert_eq!(rect.bottom(), 6.0);
    assert!(!rect.is_object());
    assert!(rect.corner_points().is_empty());
}

#[test]
fn test_contains_point_center() {
    let rect = bb(0.0, 0.0, 2.0, 3.0);
    assert!(rect.contains_point(&Point::new(0.0, 0.0)));
}

#[test]
fn test_contains_point_edges_and_corners_inclusive() {
    let rect = bb(2.0, 3.0, 2.0, 3.0);
    // Edges.
    assert!(rect.contains_point(&Point::new(0.0, 3.0)));
    assert!(rect.contains_point(&Point::new(4.0, 3.0)));
    assert!(rect.contains_point(&Point::new(2.0, 0.0)));
    assert!(rect.contains_point(&Point::new(2.0, 6.0)));
    // Corners.
    assert!(rect.contains_point(&Point::new(0.0, 0.0)));
    assert!(rect.contains_point(&Point::new(4.0, 0.0)));
    assert!(rect.contains_point(&Point::new(0.0, 6.0)));
    assert!(rect.contains_point(&Point::new(4.0, 6.0)));
}

#[test]
fn test_contains_point_outside() {
    let rect = bb(2.0, 3.0, 2.0, 3.0);
    assert!(!rect.contains_point(&Point::new(-0.01, 3.0)));
    assert!(!rect.contains_point(&Point::new(4.01, 3.0)));
    assert!(!rect.contains_point(&Point::new(2.0, -0.01)));
    assert!(!rect.contains_point(&Point::new(2.0, 6.01)));
    assert!(!rect.contains_point(&Point::new(f32::NAN, 3.0)));
}

#[test]
fn test_intersects_positive_overlap() {
    let a = bb(0.0, 0.0, 10.0, 10.0);
    let b = bb(15.0, 5.0, 10.0, 10.0);
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));

    // Full containment counts as overlap.
    let inner = bb(1.0, 1.0, 1.0, 1.0);
    assert!(a.intersects(&inner));
    assert!(inner.intersects(&a));
}

#[test]
fn test_intersects_edge_touching_is_false() {
    let a = bb(0.0, 0.0, 10.0, 10.0);
    let right = bb(20.0, 0.0, 10.0, 10.0);
    let below = bb(0.0, 20.0, 10.0, 10.0);
    assert!(!a.intersects(&right));
    assert!(!right.intersects(&a));
    assert!(!a.intersects(&below));
    assert!(!below.intersects(&a));
}

#[test]
fn test_intersects_corner_touching_is_false() {
    let a = bb(0.0, 0.0, 10.0, 10.0);
    let diagonal = bb(20.0, 20.0, 10.0, 10.0);
    assert!(!a.intersects(&diagonal));
    assert!(!diagonal.intersects(&a));
}

#[test]
fn test_intersects_disjoint() {
    let a = bb(0.0, 0.0, 10.0, 10.0);
    let far = bb(100.0, -100.0, 10.0, 10.0);
    assert!(!a.intersects(&far));
}

#[test]
fn test_object_corners() {
    let id = RegionId(7);
    let object = BoundingBox::new_object(id, Point::new(500.0, 500.0), 75.0, 75.0).unwrap();
    assert!(object.is_object());
    let corners = object.corner_points();
    assert_eq!(corners.len(), 4);
    assert_eq!((corners[0].x, corners[0].y), (425.0, 425.0));
    assert_eq!((corners[1].x, corners[1].y), (425.0, 575.0));
    assert_eq!((corners[2].x, corners[2].y), (575.0, 425.0));
    assert_eq!((corners[3].x, corners[3].y), (575.0, 575.0));
    for corner in corners {
        assert_eq!(corner.parent(), Some(id));
    }
}

#[test]
fn test_set_center_updates_sides_but_not_corners() {
    let mut object =
        BoundingBox::new_object(RegionId(0), Point::new(10.0, 10.0), 5.0, 5.0).unwrap();
    let corners_before: Vec<Point> = object.corner_points().to_vec();

    object.set_center(Point::new(100.0, 200.0)).unwrap();
    assert_eq!(object.left(), 95.0);
    assert_eq!(object.right(), 105.0);
    assert_eq!(object.top(), 195.0);
    assert_eq!(object.bottom(), 205.0);
    assert_eq!(object.corner_points(), corners_before.as_slice());
}

#[test]
fn test_set_center_rejects_non_finite() {
    let mut rect = bb(0.0, 0.0, 1.0, 1.0);
    let result = rect.set_center(Point::new(f32::INFINITY, 0.0));
    assert!(matches!(
        result,
        Err(GeometryError::NonFiniteCoordinate { .. })
    ));
    assert_eq!(rect.center(), Point::new(0.0, 0.0));
}

#[test]
fn test_rejects_degenerate_extents() {
    for (half_width, half_height) in [(0.0, 1.0), (1.0, 0.0), (-1.0, 1.0), (f32::NAN, 1.0)] {
        let result = BoundingBox::new(Point::new(0.0, 0.0), half_width, half_height);
        assert!(
            matches!(result, Err(GeometryError::InvalidHalfExtents { .. })),
            "expected rejection for ({}, {})",
            half_width,
            half_height
        );
    }
}

#[test]
fn test_rejects_nan_center() {
    let result = BoundingBox::new(Point::new(f32::NAN, 0.0), 1.0, 1.0);
    assert!(matches!(
        result,
        Err(GeometryError::NonFiniteCoordinate { .. })
    ));
}

#[test]
fn test_quadrants_tile_parent() {
    let parent = bb(960.0, 540.0, 960.0, 540.0);
    let quadrants = parent.quadrants();

    let total: f32 = quadrants.iter().map(|q| q.area()).sum();
    assert_eq!(total, parent.area());

    let [nw, ne, sw, se] = quadrants;
    assert_eq!(nw.center(), Point::new(480.0, 270.0));
    assert_eq!(ne.center(), Point::new(1440.0, 270.0));
    assert_eq!(sw.center(), Point::new(480.0, 810.0));
    assert_eq!(se.center(), Point::new(1440.0, 810.0));
    for q in &quadrants {
        assert_eq!(q.half_width(), 480.0);
        assert_eq!(q.half_height(), 270.0);
    }

    for (i, a) in quadrants.iter().enumerate() {
        for b in quadrants.iter().skip(i + 1) {
            assert!(!a.intersects(b));
        }
    }

    assert_eq!(nw.left(), parent.left());
    assert_eq!(nw.top(), parent.top());
    assert_eq!(se.right(), parent.right());
    assert_eq!(se.bottom(), parent.bottom());
    assert_eq!(nw.right(), ne.left());
    assert_eq!(nw.bottom(), sw.top());
}

#[test]
fn test_to_display_rect_truncates() {
    let rect = bb(10.7, 20.2, 4.6, 2.3);
    assert_eq!(
        rect.to_display_rect(),
        DisplayRect {
            x: 6,
            y: 17,
            width: 9,
            height: 4,
        }
    );
}

#[test]
fn test_random_point_inside() {
    let rect = bb(2.0, 3.0, 3.0, 4.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let point = rect.random_point_inside(&mut rng);
        assert!(rect.contains_point(&point));
        assert_eq!(point.parent(), None);
    }
}

#[test]
fn test_region_id_display() {
    assert_eq!(RegionId(42).to_string(), "region#42");
    assert_eq!(RegionId(3).index(), 3);
}
