use crate::color::ColorScale;
use crate::data::model::{ColoredMarker, HeatSample, PointLayer, ValidSample};

// ---------------------------------------------------------------------------
// Point layer builder
// ---------------------------------------------------------------------------

/// Build the marker layer for one source, or `None` when the source
/// yielded no valid samples (the layer is then simply not emitted).
///
/// Markers keep the samples' row order, and the popup text is an
/// observable contract: source name, SNR, elevation, latitude and
/// longitude, `<br>`-separated.
pub fn build_point_layer(
    source_id: &str,
    samples: &[ValidSample],
    scale: &ColorScale,
) -> Option<PointLayer> {
    if samples.is_empty() {
        return None;
    }

    let markers = samples
        .iter()
        .map(|sample| ColoredMarker {
            lat: sample.latitude,
            lon: sample.longitude,
            color: scale.map_color(sample.snr),
            popup: popup_text(sample),
        })
        .collect();

    Some(PointLayer {
        name: source_id.to_string(),
        markers,
        show: true,
    })
}

fn popup_text(sample: &ValidSample) -> String {
    format!(
        "{}<br>SNR: {}<br>Elevation: {}<br>Latitude: {}<br>Longitude: {}",
        sample.source_id,
        fmt_num(sample.snr),
        fmt_num(sample.elevation),
        fmt_num(sample.latitude),
        fmt_num(sample.longitude),
    )
}

/// Format a value so whole numbers keep one decimal ("45.0", not "45"),
/// matching how the source logs render floats.
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

// ---------------------------------------------------------------------------
// Heat aggregation
// ---------------------------------------------------------------------------

/// Merge every source's valid samples into one weighted intensity
/// sequence: source order, then row order, weight = raw SNR. No
/// filtering happens here – the validator already did that – and
/// sources that produced no point layer still contribute (trivially,
/// with zero samples).
pub fn aggregate_heat(per_source: &[Vec<ValidSample>]) -> Vec<HeatSample> {
    per_source
        .iter()
        .flat_map(|samples| samples.iter().map(HeatSample::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(snr: f64) -> ValidSample {
        ValidSample {
            latitude: 45.0,
            longitude: -122.0,
            snr,
            elevation: 120.0,
            sender: "node1".into(),
            source_id: "log1.csv".into(),
        }
    }

    #[test]
    fn empty_source_builds_no_layer() {
        let scale = ColorScale::default();
        assert!(build_point_layer("log1.csv", &[], &scale).is_none());
    }

    #[test]
    fn popup_contains_the_literal_fields() {
        let scale = ColorScale::default();
        let layer = build_point_layer("log1.csv", &[sample(3.5)], &scale).expect("layer");
        let popup = &layer.markers[0].popup;
        for needle in ["log1.csv", "3.5", "120", "45.0", "-122.0"] {
            assert!(popup.contains(needle), "popup {popup:?} missing {needle:?}");
        }
    }

    #[test]
    fn popup_is_br_separated_in_order() {
        let scale = ColorScale::default();
        let layer = build_point_layer("log1.csv", &[sample(3.5)], &scale).expect("layer");
        assert_eq!(
            layer.markers[0].popup,
            "log1.csv<br>SNR: 3.5<br>Elevation: 120.0<br>Latitude: 45.0<br>Longitude: -122.0"
        );
    }

    #[test]
    fn layer_preserves_order_and_count() {
        let scale = ColorScale::default();
        let samples: Vec<ValidSample> = (0..4).map(|i| sample(i as f64)).collect();
        let layer = build_point_layer("log1.csv", &samples, &scale).expect("layer");
        assert_eq!(layer.name, "log1.csv");
        assert!(layer.show);
        assert_eq!(layer.markers.len(), 4);
        for (marker, s) in layer.markers.iter().zip(&samples) {
            assert_eq!(marker.color, scale.map_color(s.snr));
        }
    }

    #[test]
    fn heat_concatenates_across_sources() {
        let a: Vec<ValidSample> = (0..3).map(|i| sample(i as f64)).collect();
        let b: Vec<ValidSample> = Vec::new(); // empty source still participates
        let c: Vec<ValidSample> = (0..2).map(|i| sample(10.0 + i as f64)).collect();

        let heat = aggregate_heat(&[a, b, c]);
        assert_eq!(heat.len(), 5);
        let weights: Vec<f64> = heat.iter().map(|h| h.weight).collect();
        assert_eq!(weights, vec![0.0, 1.0, 2.0, 10.0, 11.0]);
    }
}
