use isosketch_core::{clamped_remap, ease_in_out, grayscale, lerp, looped, IsoError};

#[test]
fn helpers_compose_into_a_shaped_ramp() {
    // loop -> remap -> ease -> lerp, the chain the sketches use
    let heights: Vec<f64> = (0..=20)
        .map(|i| {
            let phase = looped(i as f64 * 0.05 - 1.0);
            let amt = clamped_remap(phase, 0.25, 0.75).unwrap();
            lerp(0.0, 2.0, ease_in_out(amt, 3))
        })
        .collect();

    assert_eq!(heights[0], 0.0);
    assert!(heights[5].abs() < 1e-9);
    assert!((heights[10] - 1.0).abs() < 1e-9);
    assert!((heights[15] - 2.0).abs() < 1e-9);
    // the last sample wraps back to the start of the cycle
    assert!(heights[..20].windows(2).all(|w| w[1] >= w[0]));
    assert_eq!(heights[20], 0.0);
}

#[test]
fn looped_known_values() {
    assert!((looped(-0.25) - 0.75).abs() < 1e-12);
    assert!((looped(1.25) - 0.25).abs() < 1e-12);
    assert_eq!(looped(0.0), 0.0);
    for t in [-10.3, -0.999, 0.5, 3.75, 1e6 + 0.125] {
        assert!((0.0..1.0).contains(&looped(t)));
    }
}

#[test]
fn degenerate_remap_is_an_error() {
    let err = clamped_remap(0.5, 0.3, 0.3).unwrap_err();
    assert_eq!(err, IsoError::DegenerateInterval { lo: 0.3 });
    assert!(err.to_string().contains("0.3"));
}

#[test]
fn grayscale_is_neutral() {
    for i in 0..=10 {
        let c = grayscale(i as f64 / 10.0);
        assert!(c.r == c.g && c.g == c.b);
    }
}
