/// HSL color representation.
///
/// h: hue in degrees [0, 360), s: saturation [0, 1], l: lightness [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Convert sRGB (0..255 per channel) to HSL.
///
/// Computed in f64: hue group edges fall on exact degree values, and f32
/// rounding moves hues such as 126° across them.
///
/// Achromatic input (r == g == b) has hue 0 and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let (rf, gf, bf) = (r as f64, g as f64, b as f64);
    let max = r.max(g).max(b) as f64;
    let min = r.min(g).min(b) as f64;
    let delta = max - min;

    let l = (max + min) / 510.0;

    let s = if l > 0.0 && l < 1.0 && delta > 0.0 {
        if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (510.0 - max - min)
        }
    } else {
        0.0
    };

    let mut h = 0.0;
    if delta > 0.0 {
        h = if max == rf {
            (gf - bf) / delta
        } else if max == gf {
            2.0 + (bf - rf) / delta
        } else {
            4.0 + (rf - gf) / delta
        };
        h *= 60.0;
        if h < 0.0 {
            h += 360.0;
        }
    }

    Hsl { h, s, l }
}

/// Classify a hue angle into one of `segments` equal angular groups.
///
/// Group 0 is centered on 0° and wraps around red; group `i` covers
/// `[seg/2 + (i-1)*seg, seg/2 + i*seg)`. Returns 0 for `segments == 0`.
pub fn hue_group(hue: f64, segments: usize) -> usize {
    if segments == 0 {
        return 0;
    }
    let seg = 360.0 / segments as f64;
    let half = seg / 2.0;

    let mut mid = half;
    for i in 1..segments {
        if hue >= mid && hue < mid + seg {
            return i;
        }
        mid += seg;
    }
    0
}
