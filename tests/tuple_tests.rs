use raytracer::*;

fn assert_close(expected: Tuple, actual: Tuple) {
    let max_diff = expected
        .to_array()
        .into_iter()
        .zip(actual.to_array())
        .map(|(a, b)| (a - b).abs())
        .fold(0., f64::max);
    assert!(max_diff < 1e-5, "expected {expected:?}, got {actual:?}");
}

#[test]
fn addition_table() {
    let p = point(3., -2., 5.);
    let v = vector(-2., 3., 1.);

    assert_eq!(TupleKind::Vector, v.checked_add(v).unwrap().kind());
    assert_eq!(TupleKind::Point, p.checked_add(v).unwrap().kind());
    assert_eq!(TupleKind::Point, v.checked_add(p).unwrap().kind());
    assert!(matches!(p.checked_add(p), Err(Error::InvalidAddition { .. })));

    assert_eq!(point(1., 1., 6.), p.checked_add(v).unwrap());
}

#[test]
fn subtraction_table() {
    let p1 = point(3., 2., 1.);
    let p2 = point(5., 6., 7.);
    let v1 = vector(3., 2., 1.);
    let v2 = vector(5., 6., 7.);

    assert_eq!(vector(-2., -4., -6.), p1.checked_sub(p2).unwrap());
    assert_eq!(point(-2., -4., -6.), p1.checked_sub(v2).unwrap());
    assert_eq!(vector(-2., -4., -6.), v1.checked_sub(v2).unwrap());
    assert!(matches!(v1.checked_sub(p2), Err(Error::InvalidSubtraction { .. })));
}

#[test]
fn negating_a_vector() {
    assert_eq!(vector(-1., 2., -3.), vector(1., -2., 3.).negate().unwrap());
}

#[test]
fn scaling_and_dividing() {
    let a = Tuple::new(1., -2., 3., -4.);
    assert_eq!(Tuple::new(3.5, -7., 10.5, -14.), a * 3.5);
    assert_eq!(Tuple::new(0.5, -1., 1.5, -2.), a * 0.5);
    assert_eq!(Tuple::new(0.5, -1., 1.5, -2.), a / 2.);
    assert_eq!(a * 2., 2. * a);
}

#[test]
fn division_by_zero_follows_ieee() {
    let t = vector(1., -1., 0.) / 0.;
    assert_eq!(f64::INFINITY, t.x);
    assert_eq!(f64::NEG_INFINITY, t.y);
    assert!(t.z.is_nan());
}

#[test]
fn hadamard_product() {
    let a = Tuple::new(1., 2., 3., 4.);
    let b = Tuple::new(2., 0.5, -1., 0.);
    assert_eq!(Tuple::new(2., 1., -3., 0.), a.hadamard(b));
}

#[test]
fn magnitude() {
    assert_eq!(1., vector(1., 0., 0.).norm());
    assert_eq!(1., vector(0., 0., 1.).norm());
    assert_eq!(14f64.sqrt(), vector(1., 2., 3.).norm());
    assert_eq!(14f64.sqrt(), vector(-1., -2., -3.).norm());
    assert_eq!(15f64.sqrt(), point(1., 2., 3.).norm());
}

#[test]
fn normalizing() {
    assert_eq!(vector(1., 0., 0.), vector(4., 0., 0.).unit());
    let root14 = 14f64.sqrt();
    assert_close(
        vector(1. / root14, 2. / root14, 3. / root14),
        vector(1., 2., 3.).unit(),
    );
}

#[test]
fn normalized_random_vectors_have_unit_magnitude() {
    use rand::{thread_rng, Rng};
    let mut rng = thread_rng();
    for _ in 0..100 {
        let v = rng.gen::<Tuple>();
        let u = v.unit();
        assert!((u.norm() - 1.).abs() < 1e-3);
        assert!(u.is_vector());
    }
}

#[test]
fn dot_product() {
    assert_eq!(20., vector(1., 2., 3.).dot(vector(2., 3., 4.)));
    assert_eq!(21., Tuple::new(1., 2., 3., 1.).dot(Tuple::new(2., 3., 4., 1.)));
}

#[test]
fn cross_product() {
    let a = vector(1., 2., 3.);
    let b = vector(2., 3., 4.);
    assert_eq!(vector(-1., 2., -1.), a.cross(b));
    assert_eq!(vector(1., -2., 1.), b.cross(a));
}

#[test]
fn cross_product_of_points_is_a_vector() {
    assert!(point(1., 2., 3.).cross(point(2., 3., 4.)).is_vector());
}

#[test]
fn cross_product_is_anticommutative() {
    use rand::{thread_rng, Rng};
    let mut rng = thread_rng();
    for _ in 0..100 {
        let a = rng.gen::<Tuple>();
        let b = rng.gen::<Tuple>();
        assert_eq!(a.cross(b), b.cross(a).negate().unwrap());
    }
}

#[test]
fn equality_is_exact() {
    assert_eq!(vector(0.1, 0.2, 0.3), vector(0.1, 0.2, 0.3));
    assert_ne!(vector(0.1 + 0.2, 0., 0.), vector(0.3, 0., 0.));
}
