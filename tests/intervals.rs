use sat2d::shape::{intervals_intersect, intervals_intersect_mtv};

#[test]
fn random_intervals_intersect_symmetrically() {
    let mut rng = oorandom::Rand32::new(0x5eed);

    for _ in 0..1000 {
        let a = rng.rand_float() * 10.0 - 5.0;
        let b = rng.rand_float() * 10.0 - 5.0;
        let c = rng.rand_float() * 10.0 - 5.0;
        let d = rng.rand_float() * 10.0 - 5.0;

        for strict in [false, true] {
            assert_eq!(
                intervals_intersect(a, b, c, d, strict, true),
                intervals_intersect(c, d, a, b, strict, true),
            );
        }
    }
}

#[test]
fn random_intervals_are_reorder_invariant() {
    let mut rng = oorandom::Rand32::new(0xfeed);

    for _ in 0..1000 {
        let a = rng.rand_float() * 10.0 - 5.0;
        let b = rng.rand_float() * 10.0 - 5.0;
        let c = rng.rand_float() * 10.0 - 5.0;
        let d = rng.rand_float() * 10.0 - 5.0;

        assert_eq!(
            intervals_intersect(a, b, c, d, false, true),
            intervals_intersect(b, a, d, c, false, true),
        );
        assert_eq!(
            intervals_intersect_mtv(a, b, c, d, true),
            intervals_intersect_mtv(b, a, d, c, true),
        );
    }
}

#[test]
fn random_intervals_mtv_exists_iff_strict_overlap() {
    let mut rng = oorandom::Rand32::new(0xbead);

    for _ in 0..1000 {
        let a = rng.rand_float() * 10.0 - 5.0;
        let b = rng.rand_float() * 10.0 - 5.0;
        let c = rng.rand_float() * 10.0 - 5.0;
        let d = rng.rand_float() * 10.0 - 5.0;

        assert_eq!(
            intervals_intersect_mtv(a, b, c, d, true).is_some(),
            intervals_intersect(a, b, c, d, true, true),
        );
    }
}
