use bezier2d::{
    point, BezierSegment, CubicBezierSegment, IntersectionConfig, QuadraticBezierSegment,
};

fn arch() -> BezierSegment<f64> {
    BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 0.0),
    })
}

fn difficult_pair() -> (BezierSegment<f64>, BezierSegment<f64>) {
    (
        BezierSegment::Cubic(CubicBezierSegment {
            from: point(20.294698715209961, 20.116849899291992),
            ctrl1: point(26.718513488769531, 28.516490936279297),
            ctrl2: point(33.345268249511719, 37.4105110168457),
            to: point(36.240531921386719, 37.736736297607422),
        }),
        BezierSegment::Cubic(CubicBezierSegment {
            from: point(43.967803955078125, 30.767040252685547),
            ctrl1: point(43.967803955078125, 31.771089553833008),
            ctrl2: point(35.013500213623047, 32.585041046142578),
            to: point(23.967803955078125, 32.585041046142578),
        }),
    )
}

#[test]
fn arch_length() {
    assert!((arch().length() - 2.0).abs() < 1e-10);
}

#[test]
fn arch_has_no_inflection() {
    assert!(arch().inflections().is_empty());
}

#[test]
fn arch_bounding_box() {
    let bbox = arch().bounding_box();

    assert_eq!(bbox.x.min, 0.0);
    assert_eq!(bbox.x.mid, 0.5);
    assert_eq!(bbox.x.max, 1.0);
    assert_eq!(bbox.x.size, 1.0);

    assert!((bbox.y.min - 0.0).abs() < 1e-12);
    assert!((bbox.y.mid - 0.375).abs() < 1e-12);
    assert!((bbox.y.max - 0.75).abs() < 1e-12);
    assert!((bbox.y.size - 0.75).abs() < 1e-12);
}

#[test]
fn arch_derivatives_and_normals() {
    let curve = arch();

    let cases = [
        (0.0, (0.0, 3.0), (-1.0, 0.0)),
        (0.5, (1.5, 0.0), (0.0, 1.0)),
        (1.0, (0.0, -3.0), (1.0, 0.0)),
    ];
    for (t, d, n) in cases {
        let derivative = curve.derivative(t);
        assert!((derivative.x - d.0).abs() < 1e-12);
        assert!((derivative.y - d.1).abs() < 1e-12);

        let normal = curve.normal(t);
        assert!((normal.x - n.0).abs() < 1e-12);
        assert!((normal.y - n.1).abs() < 1e-12);
    }
}

#[test]
fn inflection_ordering() {
    let curve = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 0.25),
        ctrl2: point(0.0, 1.0),
        to: point(1.0, 0.0),
    });

    let inflections = curve.inflections();
    assert_eq!(inflections.len(), 2);
    assert!((inflections[0] - 0.8).abs() < 1e-9);
    assert!((inflections[1] - 0.5).abs() < 1e-9);
}

#[test]
fn difficult_pair_reduction() {
    let (c1, _) = difficult_pair();
    assert_eq!(c1.reduce().len(), 4);
}

#[test]
fn difficult_pair_intersections() {
    let (c1, c2) = difficult_pair();
    assert_eq!(c1.intersections_t(&c2).len(), 2);
}

#[test]
fn intersection_symmetry() {
    let (c1, c2) = difficult_pair();

    let forward = c1.intersections_t(&c2);
    let backward = c2.intersections_t(&c1);
    assert_eq!(forward.len(), backward.len());

    // the same geometric hits, with the parameter pairs swapped
    for (f, b) in forward.iter().zip(backward.iter()) {
        assert!((f.0 - b.1).abs() < 1e-9);
        assert!((f.1 - b.0).abs() < 1e-9);
    }
}

#[test]
fn split_evaluate_round_trip() {
    let curve = arch();
    let t = 0.3;

    let (left, right) = curve.split(t);
    let boundary = curve.sample(t);

    assert!((left.sample(1.0) - boundary).length() < 1e-12);
    assert!((right.sample(0.0) - boundary).length() < 1e-12);
    assert!((left.to() - boundary).length() < 1e-12);
    assert!((right.from() - boundary).length() < 1e-12);
}

#[test]
fn reduce_idempotence() {
    let simple = BezierSegment::Cubic(CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 0.4),
        ctrl2: point(2.0, 0.9),
        to: point(3.0, 1.5),
    });

    let reduced = simple.reduce();
    assert_eq!(reduced.len(), 1);
    assert_eq!(reduced[0].t0, 0.0);
    assert_eq!(reduced[0].t1, 1.0);

    // reducing an already-simple segment changes nothing
    let again = reduced[0].curve.reduce();
    assert_eq!(again.len(), 1);
}

#[test]
fn fitting_reproduces_the_middle_point() {
    let from = point(0.0f64, 0.0);
    let mid = point(200.0 / 3.0, 100.0 / 3.0);
    let to = point(100.0, 0.0);

    for t in [0.25, 0.5] {
        let cubic = CubicBezierSegment::from_points(from, mid, to, t);
        assert!((cubic.sample(t) - mid).length() < 1e-9);

        let quadratic = QuadraticBezierSegment::from_points(from, mid, to, t);
        assert!((quadratic.sample(t) - mid).length() < 1e-9);
    }
}

#[test]
fn display_format() {
    assert_eq!(arch().to_string(), "[0/0, 0/1, 1/1, 1/0]");
}

#[test]
fn custom_intersection_config() {
    let (c1, c2) = difficult_pair();

    let config = IntersectionConfig {
        dedup_epsilon: 0.1,
        ..IntersectionConfig::default()
    };
    assert_eq!(c1.intersections_t_with(&c2, &config).len(), 1);
}
