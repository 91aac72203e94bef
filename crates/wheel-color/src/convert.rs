// SPDX-License-Identifier: MIT
//
// Color space conversion functions.
//
// Units match the channel ranges: RGB components in 0–255, hue in degrees,
// saturation / lightness / brightness as percentages (0–100). Internally
// everything is computed on 0–1 fractions.
//
//   RGB ↔ HSL ↔ HSB
//    └────────────┘
//
// HSL ↔ HSB is converted directly (without a trip through RGB) so the hue
// survives for achromatic colors, where RGB has no hue to give back.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]

/// Hue of an RGB triple (fractions), given its max component and spread.
#[inline]
fn rgb_hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta <= 0.0 {
        // Achromatic — hue is undefined, default to 0
        return 0.0;
    }
    #[allow(clippy::float_cmp)] // max is one of r, g, b exactly
    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h * 60.0
}

/// Convert RGB (0–255) to HSL (degrees, percent, percent).
#[must_use]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta <= 0.0 {
        0.0
    } else {
        delta / (1.0 - 2.0f64.mul_add(l, -1.0).abs())
    };

    (rgb_hue(r, g, b, max, delta), s * 100.0, l * 100.0)
}

/// Convert HSL (degrees, percent, percent) to RGB (0–255).
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let t = (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
        a.mul_add(-t, l) * 255.0
    };
    (f(0.0), f(8.0), f(4.0))
}

/// Convert RGB (0–255) to HSB (degrees, percent, percent).
#[must_use]
pub fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / 255.0, g / 255.0, b / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max <= 0.0 { 0.0 } else { delta / max };
    (rgb_hue(r, g, b, max, delta), s * 100.0, max * 100.0)
}

/// Convert HSB (degrees, percent, percent) to RGB (0–255).
#[must_use]
pub fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let s = s / 100.0;
    let v = v / 100.0;
    let f = |n: f64| {
        let k = (n + h / 60.0).rem_euclid(6.0);
        let t = k.min(4.0 - k).clamp(0.0, 1.0);
        (v * s).mul_add(-t, v) * 255.0
    };
    (f(5.0), f(3.0), f(1.0))
}

/// Convert HSL to HSB. Hue passes through untouched.
#[must_use]
pub fn hsl_to_hsb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let s = s / 100.0;
    let l = l / 100.0;
    let v = s.mul_add(l.min(1.0 - l), l);
    let sv = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    (h, sv * 100.0, v * 100.0)
}

/// Convert HSB to HSL. Hue passes through untouched.
#[must_use]
pub fn hsb_to_hsl(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let s = s / 100.0;
    let v = v / 100.0;
    let l = v * (1.0 - s / 2.0);
    let m = l.min(1.0 - l);
    let sl = if m <= 0.0 { 0.0 } else { (v - l) / m };
    (h, sl * 100.0, l * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn assert_triple(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert!(
            approx_eq(actual.0, expected.0)
                && approx_eq(actual.1, expected.1)
                && approx_eq(actual.2, expected.2),
            "got {actual:?}, expected {expected:?}"
        );
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn pure_red_in_every_space() {
        assert_triple(rgb_to_hsl(255.0, 0.0, 0.0), (0.0, 100.0, 50.0));
        assert_triple(rgb_to_hsb(255.0, 0.0, 0.0), (0.0, 100.0, 100.0));
        assert_triple(hsl_to_rgb(0.0, 100.0, 50.0), (255.0, 0.0, 0.0));
        assert_triple(hsb_to_rgb(0.0, 100.0, 100.0), (255.0, 0.0, 0.0));
    }

    #[test]
    fn primary_hues() {
        assert_triple(rgb_to_hsl(0.0, 255.0, 0.0), (120.0, 100.0, 50.0));
        assert_triple(rgb_to_hsl(0.0, 0.0, 255.0), (240.0, 100.0, 50.0));
        assert_triple(hsl_to_rgb(120.0, 100.0, 50.0), (0.0, 255.0, 0.0));
        assert_triple(hsl_to_rgb(240.0, 100.0, 50.0), (0.0, 0.0, 255.0));
    }

    #[test]
    fn magenta_hue_wraps_below_360() {
        let (h, _, _) = rgb_to_hsl(255.0, 0.0, 255.0);
        assert!(approx_eq(h, 300.0), "hue was {h}");
    }

    #[test]
    fn gray_has_no_saturation() {
        let (h, s, l) = rgb_to_hsl(128.0, 128.0, 128.0);
        assert!(approx_eq(h, 0.0));
        assert!(approx_eq(s, 0.0));
        assert!(approx_eq(l, 128.0 / 255.0 * 100.0));
    }

    #[test]
    fn black_and_white_in_hsb() {
        assert_triple(rgb_to_hsb(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        assert_triple(rgb_to_hsb(255.0, 255.0, 255.0), (0.0, 0.0, 100.0));
    }

    // ── HSL ↔ HSB ────────────────────────────────────────────────────────

    #[test]
    fn hsl_to_hsb_full_saturation() {
        assert_triple(hsl_to_hsb(200.0, 100.0, 50.0), (200.0, 100.0, 100.0));
    }

    #[test]
    fn hsb_to_hsl_keeps_hue_for_black() {
        let (h, s, l) = hsb_to_hsl(75.0, 40.0, 0.0);
        assert!(approx_eq(h, 75.0));
        assert!(approx_eq(s, 0.0));
        assert!(approx_eq(l, 0.0));
    }

    #[test]
    fn hsl_hsb_agree_with_rgb_path() {
        let (h, s, v) = hsl_to_hsb(30.0, 60.0, 40.0);
        let via_hsb = hsb_to_rgb(h, s, v);
        let via_hsl = hsl_to_rgb(30.0, 60.0, 40.0);
        assert_triple(via_hsb, via_hsl);
    }
}
