//! CSS Color 4 gamut mapping.
//!
//! Binary search on Oklch chroma at constant lightness and hue. The search
//! stops as soon as the clipped candidate is within one JND (ΔEOK 0.02)
//! of the unclipped one, then returns the clipped candidate.

use gamut_color::{Color, Gamut, Space};

use super::{black, white};

/// Just noticeable difference in ΔEOK.
pub const JND: f64 = 0.02;

/// Chroma resolution of the search.
pub const EPSILON: f64 = 0.0001;

/// Maps `color` into `gamut` with the CSS Color 4 algorithm.
pub fn map(color: &Color, gamut: Gamut) -> Color {
    let dest = Space::encoded(gamut);
    if color.in_gamut(gamut, 0.0) {
        return color.to(dest);
    }

    let origin = color.to(Space::Oklch);
    let [l, c, h] = origin.coords();
    if l >= 1.0 {
        return white(gamut);
    }
    if l <= 0.0 {
        return black(gamut);
    }

    let mut current = origin;
    let mut clipped = current.clip(gamut);
    if clipped.delta_e_ok(&current) < JND {
        return clipped;
    }

    let mut min = 0.0;
    let mut max = c;
    let mut min_in_gamut = true;

    while max - min > EPSILON {
        let chroma = 0.5 * (min + max);
        current = Color::oklch(l, chroma, h);

        if min_in_gamut && current.in_gamut(gamut, 0.0) {
            min = chroma;
            continue;
        }

        clipped = current.clip(gamut);
        let e = clipped.delta_e_ok(&current);
        if e < JND {
            if JND - e < EPSILON {
                break;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }
    clipped
}
