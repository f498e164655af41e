//! Scalar remapping helpers shared by the visualizers.
//!
//! All functions work on `f64` and never clamp unless their name says so.

/// Map value `x` from range `a..b` to range `c..d` (no clamping).
pub fn map(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    (x - a) * (d - c) / (b - a) + c
}

/// Map value `x` from range `a..b` to range `c..d`, clamping into `[c, d]`.
pub fn map_clamp(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    clamp(map(x, a, b, c, d), c, d)
}

/// Map value `x` from range `a..b` to range `c..d`, wrapping into `[c, d]`.
///
/// Mapping to `0..10` and getting `11.3` yields `1.3`.
pub fn map_wrap(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    wrap(map(x, a, b, c, d), c, d)
}

/// Clamp `x` into `[a, b]`.
pub fn clamp(x: f64, a: f64, b: f64) -> f64 {
    if x < a {
        a
    } else if x > b {
        b
    } else {
        x
    }
}

/// Wrap `x` around the range `[a, b]` (`2.5` wrapped to `0..1` is `0.5`).
///
/// Values already inside the closed range are returned untouched, so `b`
/// itself stays `b`. Values above `b` land in `(a, b]`, values below `a`
/// land in `[a, b)`. `a == b` is a configuration error and is rejected by
/// `DomeParams::validate` before any frame renders.
pub fn wrap(x: f64, a: f64, b: f64) -> f64 {
    debug_assert!(b > a, "wrap range must be non-empty: [{a}, {b}]");
    debug_assert!(x.is_finite(), "wrap input must be finite: {x}");

    let range = b - a;
    if x < a {
        let steps = ((a - x) / range).ceil();
        // Rounding error at huge magnitudes can overshoot by an ulp
        clamp(x + steps * range, a, b)
    } else if x > b {
        let steps = ((x - b) / range).ceil();
        clamp(x - steps * range, a, b)
    } else {
        x
    }
}

/// Fold a unit value around its midpoint: `0.5 -> 0`, `0 -> 1`, `1 -> 1`.
///
/// Produces the symmetric ring falloff used by the radial effects.
pub fn fold(x: f64) -> f64 {
    map(x, 0.0, 1.0, -1.0, 1.0).abs()
}
