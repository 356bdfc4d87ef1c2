//! Sequential color ramp
//!
//! Orange-red single-hue ramp used by both scale shapes. Stops are packed
//! as a hex string and interpolated linearly in sRGB; discrete sampling
//! stops at 0.9 of the ramp so the deepest, least legible red is never used
//! as a fill.
//!
//! The ramp is plain data passed into scale and legend construction; there
//! is no module-global color state.

/// Nine ramp stops, light to dark, packed as RRGGBB.
const OR_RD: &str = "fff7ecfee8c8fdd49efdbb84fc8d59ef6548d7301fb300007f0000";

/// Fraction of the ramp used when sampling discrete bucket colors.
pub const DISCRETE_CEILING: f64 = 0.9;

/// A sequential ramp over [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    stops: Vec<[u8; 3]>,
}

impl Ramp {
    /// The orange-red ramp used across the map.
    pub fn or_rd() -> Self {
        Self {
            stops: decode_stops(OR_RD),
        }
    }

    /// Sample the ramp at `t`, clamped to [0, 1]. Returns `#rrggbb`.
    pub fn sample(&self, t: f64) -> String {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        let frac = pos - i as f64;

        let a = self.stops[i];
        let b = self.stops[i + 1];
        let mix = |x: u8, y: u8| -> u8 {
            (f64::from(x) + frac * (f64::from(y) - f64::from(x))).round() as u8
        };
        format!(
            "#{:02x}{:02x}{:02x}",
            mix(a[0], b[0]),
            mix(a[1], b[1]),
            mix(a[2], b[2])
        )
    }

    /// `n` colors at evenly spaced positions over [0, DISCRETE_CEILING],
    /// light to dark.
    pub fn discrete(&self, n: usize) -> Vec<String> {
        (0..n)
            .map(|i| {
                let t = if n > 1 {
                    i as f64 / (n - 1) as f64 * DISCRETE_CEILING
                } else {
                    0.0
                };
                self.sample(t)
            })
            .collect()
    }
}

fn decode_stops(packed: &str) -> Vec<[u8; 3]> {
    packed
        .as_bytes()
        .chunks_exact(6)
        .map(|chunk| {
            let channel = |i: usize| {
                let pair = std::str::from_utf8(&chunk[i..i + 2]).unwrap_or("00");
                u8::from_str_radix(pair, 16).unwrap_or(0)
            };
            [channel(0), channel(2), channel(4)]
        })
        .collect()
}
