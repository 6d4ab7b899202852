use palette::{named, Srgb};

// ---------------------------------------------------------------------------
// SNR color scale
// ---------------------------------------------------------------------------

/// A gradient stop: position in [0, 1] mapped to an sRGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Srgb<f64>,
}

/// Immutable SNR → color configuration.
///
/// SNR values inside `[low, high]` are normalized and run through a
/// multi-stop linear gradient; values in the grey band (above
/// `grey_above` or at/below `grey_below`) get a fixed neutral color
/// instead of being extrapolated. Pure – equal inputs always produce
/// equal outputs.
#[derive(Debug, Clone)]
pub struct ColorScale {
    /// Normalization bounds, in dB.
    pub low: f64,
    pub high: f64,
    /// Out-of-meaningful-range band: snr > grey_above or snr <= grey_below.
    pub grey_above: f64,
    pub grey_below: f64,
    stops: Vec<ColorStop>,
}

/// Neutral color for out-of-meaningful-range telemetry.
const GREY: &str = "#808080";

impl Default for ColorScale {
    /// The range-test scale: red (-21 dB) → yellow → green (12 dB),
    /// grey outside (-25, 15].
    fn default() -> Self {
        let stop = |t: f64, color: Srgb<u8>| ColorStop {
            t,
            color: color.into_format::<f64>(),
        };
        ColorScale {
            low: -21.0,
            high: 12.0,
            grey_above: 15.0,
            grey_below: -25.0,
            stops: vec![
                stop(0.0, named::RED),
                stop(0.5, named::YELLOW),
                stop(1.0, named::GREEN),
            ],
        }
    }
}

impl ColorScale {
    /// Map an SNR value to its `#rrggbb` display color. Total: every
    /// finite input has a defined output, there is no error path.
    pub fn map_color(&self, snr: f64) -> String {
        if snr > self.grey_above || snr <= self.grey_below {
            return GREY.to_string();
        }
        // Clamp rather than extrapolate: SNR in the ungreyed band but
        // outside [low, high] pins to the nearest gradient endpoint.
        let t = ((snr - self.low) / (self.high - self.low)).clamp(0.0, 1.0);
        rgb_to_hex(multi_stop(&self.stops, t))
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Srgb<f64>, c2: Srgb<f64>, t: f64) -> Srgb<f64> {
    Srgb::new(
        lerp(c1.red, c2.red, t),
        lerp(c1.green, c2.green, t),
        lerp(c1.blue, c2.blue, t),
    )
}

fn multi_stop(stops: &[ColorStop], t: f64) -> Srgb<f64> {
    if t <= stops[0].t {
        return stops[0].color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    stops[stops.len() - 1].color
}

fn rgb_to_hex(color: Srgb<f64>) -> String {
    let c: Srgb<u8> = color.into_format();
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_values() {
        let scale = ColorScale::default();
        // Pinned literal table across the interesting SNR values.
        let table = [
            (-25.0, "#808080"), // at the grey boundary: grey
            (-21.0, "#ff0000"), // low bound: pure red
            (-10.0, "#ffaa00"), // red→yellow segment
            (0.0, "#b9dc00"),   // yellow→green segment
            (12.0, "#008000"),  // high bound: pure green
            (15.0, "#008000"),  // above high but not grey: clamped to green
            (16.0, "#808080"),  // above the grey boundary
        ];
        for (snr, expected) in table {
            assert_eq!(scale.map_color(snr), expected, "snr = {snr}");
        }
    }

    #[test]
    fn clamps_below_low_without_greying() {
        let scale = ColorScale::default();
        // (-25, -21) is ungreyed but below the low bound: pure red.
        assert_eq!(scale.map_color(-24.9), "#ff0000");
        assert_eq!(scale.map_color(-22.0), "#ff0000");
    }

    #[test]
    fn grey_band_boundaries() {
        let scale = ColorScale::default();
        // snr <= -25 is grey, snr > 15 is grey; both boundaries exact.
        assert_eq!(scale.map_color(-25.0), "#808080");
        assert_eq!(scale.map_color(-30.0), "#808080");
        assert_eq!(scale.map_color(16.0), "#808080");
        assert_ne!(scale.map_color(15.0), "#808080");
    }

    #[test]
    fn midpoint_is_yellow() {
        let scale = ColorScale::default();
        // t = 0.5 at snr = (low + high) / 2 = -4.5.
        assert_eq!(scale.map_color(-4.5), "#ffff00");
    }

    #[test]
    fn deterministic() {
        let scale = ColorScale::default();
        for snr in [-30.0, -21.0, -4.5, 0.0, 3.7, 12.0, 16.0] {
            assert_eq!(scale.map_color(snr), scale.map_color(snr));
        }
    }
}
