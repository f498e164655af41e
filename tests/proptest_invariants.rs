//! Property-based invariant tests for the color engine and geometry.
//!
//! 1. wrap lands in its range and is idempotent.
//! 2. map inverts itself when the ranges are swapped.
//! 3. fold is symmetric about 0.5 and stays in [0, 1].
//! 4. Brightness normalization keeps black black, never dims, keeps
//!    channel ordering and scales every channel by sqrt(255 / max).
//! 5. LED projections are deterministic and in range.
//! 6. Radial mapping always yields a folded value in [0, 1].

use std::f64::consts::PI;
use std::sync::OnceLock;

use domelight::color::{normalize_brightness, Color, Palettes};
use domelight::geometry::{DomeGeometry, LedLayout};
use domelight::math::{fold, map, wrap};
use domelight::params::RadialEffect;
use domelight::visualizer::radial_mapping;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn dome() -> &'static DomeGeometry {
    static DOME: OnceLock<DomeGeometry> = OnceLock::new();
    DOME.get_or_init(DomeGeometry::geodesic)
}

/// Non-degenerate range `(a, b)` with `b > a`
fn range_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-100.0f64..100.0, 0.01f64..100.0).prop_map(|(a, width)| (a, a + width))
}

fn effect_strategy() -> impl Strategy<Value = RadialEffect> {
    prop_oneof![
        Just(RadialEffect::Radar),
        Just(RadialEffect::Pulse),
        Just(RadialEffect::Spiral),
    ]
}

fn frequency_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.1f64..16.0, -16.0f64..-0.1]
}

// ── 1. wrap ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn wrap_lands_in_range(x in -1.0e6f64..1.0e6, (a, b) in range_strategy()) {
        let w = wrap(x, a, b);
        prop_assert!(w >= a && w <= b, "wrap({}, {}, {}) = {}", x, a, b, w);
    }

    #[test]
    fn wrap_is_idempotent(x in -1.0e6f64..1.0e6, (a, b) in range_strategy()) {
        let once = wrap(x, a, b);
        prop_assert_eq!(wrap(once, a, b), once);
    }

    #[test]
    fn wrap_leaves_inside_values_alone((a, b) in range_strategy(), t in 0.0f64..=1.0) {
        let x = a + (b - a) * t;
        prop_assume!(x <= b);
        prop_assert_eq!(wrap(x, a, b), x);
    }
}

// ── 2. map ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn map_round_trips(
        x in -1000.0f64..1000.0,
        (a, b) in range_strategy(),
        (c, d) in range_strategy(),
    ) {
        let there = map(x, a, b, c, d);
        let back = map(there, c, d, a, b);
        let tolerance = 1e-6 * (1.0 + x.abs()) * (1.0 + (b - a) / (d - c)) * (1.0 + (d - c) / (b - a));
        prop_assert!((back - x).abs() <= tolerance, "{} -> {} -> {}", x, there, back);
    }
}

// ── 3. fold ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn fold_is_symmetric(t in 0.0f64..=0.5) {
        prop_assert!((fold(0.5 + t) - fold(0.5 - t)).abs() < 1e-12);
    }

    #[test]
    fn fold_stays_in_unit_range(x in 0.0f64..=1.0) {
        let f = fold(x);
        prop_assert!((0.0..=1.0).contains(&f), "fold({}) = {}", x, f);
    }
}

// ── 4. brightness normalization ─────────────────────────────────────────

proptest! {
    #[test]
    fn normalization_never_dims(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let input = Color::from_rgb(r, g, b);
        let out = normalize_brightness(input);
        if input.is_off() {
            prop_assert!(out.is_off());
        } else {
            prop_assert!(out.r() >= r && out.g() >= g && out.b() >= b, "{:?} -> {:?}", input, out);
        }
    }

    #[test]
    fn normalization_keeps_channel_order(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let out = normalize_brightness(Color::from_rgb(r, g, b));
        if r >= g {
            prop_assert!(out.r() >= out.g());
        }
        if r <= g {
            prop_assert!(out.r() <= out.g());
        }
        if g >= b {
            prop_assert!(out.g() >= out.b());
        }
        if g <= b {
            prop_assert!(out.g() <= out.b());
        }
    }

    #[test]
    fn normalization_preserves_ratios(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let max_in = r.max(g).max(b);
        prop_assume!(max_in > 0);

        let out = normalize_brightness(Color::from_rgb(r, g, b));
        let max_out = out.r().max(out.g()).max(out.b());
        prop_assert_eq!(max_out, (255.0 * max_in as f64).sqrt() as u8);

        let factor = (255.0 / max_in as f64).sqrt();
        for (c_in, c_out) in [(r, out.r()), (g, out.g()), (b, out.b())] {
            let exact = c_in as f64 * factor;
            prop_assert!(
                (c_out as f64 - exact).abs() < 1.0,
                "channel {} -> {}, exact {}",
                c_in,
                c_out,
                exact
            );
        }
    }

    #[test]
    fn gradient_lookup_accepts_any_offset(
        palette in 0usize..4,
        position in 0.0f64..=1.0,
        offset in -50.0f64..50.0,
    ) {
        // Unknown palettes fall back, wrapped lookups never panic
        let _ = Palettes::default().gradient_color(palette, position, offset, true);
    }
}

// ── 5. projection ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn projection_is_deterministic_and_bounded(strut_pick in any::<prop::sample::Index>(), led_pick in any::<prop::sample::Index>()) {
        let dome = dome();
        let strut = strut_pick.index(dome.strut_count());
        let led = led_pick.index(dome.led_count(strut));

        let first = dome.project(strut, led);
        let second = dome.project(strut, led);
        prop_assert_eq!(first, second);
        prop_assert!(first.angle > -PI && first.angle <= PI, "angle {}", first.angle);
        prop_assert!((0.0..=1.0).contains(&first.distance), "distance {}", first.distance);
    }
}

// ── 6. radial mapping ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn radial_value_is_unit(
        effect in effect_strategy(),
        angle01 in 0.0f64..=1.0,
        distance in 0.0f64..=1.0,
        current in 0.0f64..=1.0,
        frequency in frequency_strategy(),
    ) {
        let (folded, gradient_input) = radial_mapping(effect, angle01, distance, current, frequency);
        prop_assert!((0.0..=1.0).contains(&folded), "folded {}", folded);
        prop_assert!((0.0..=1.0).contains(&gradient_input), "gradient input {}", gradient_input);
    }
}
