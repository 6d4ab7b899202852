use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// FieldValue – a single cell of a source row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value as it comes out of a CSV log.
/// Type guessing happens in the loader; the validator turns these into
/// the typed [`ValidSample`] fields.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Empty,
}

impl FieldValue {
    /// Interpret the value as an `f64` where that makes sense.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Non-empty display text for label-like columns (sender name).
    pub fn display_text(&self) -> Option<String> {
        match self {
            FieldValue::Empty => None,
            FieldValue::Text(s) if s.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// RawRecord – one row of a source log
// ---------------------------------------------------------------------------

/// One row of a source log: column name → cell value. Ephemeral; the
/// loader produces these and the validator consumes them.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub columns: BTreeMap<String, FieldValue>,
}

impl RawRecord {
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.columns.get(column)
    }
}

// ---------------------------------------------------------------------------
// ValidSample – the typed projection of a record that passed the filter
// ---------------------------------------------------------------------------

/// A telemetry sample that passed validation.
///
/// Invariants: `latitude` ∈ [-90, 90], `longitude` ∈ [-180, 180],
/// `sender` is non-empty. The filter is the only producer, so every
/// `ValidSample` in the system upholds them.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Signal-to-noise ratio in dB; meaningful roughly in [-25, 15].
    pub snr: f64,
    pub elevation: f64,
    pub sender: String,
    /// Base name of the source file this sample came from.
    pub source_id: String,
}

// ---------------------------------------------------------------------------
// Canvas-facing layer types
// ---------------------------------------------------------------------------

/// One marker on the map: position, gradient color, popup text.
/// Built once by the point layer builder, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColoredMarker {
    pub lat: f64,
    pub lon: f64,
    /// `#rrggbb` hex string.
    pub color: String,
    pub popup: String,
}

/// A toggleable group of markers belonging to one source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointLayer {
    /// Display name, the source file's base name. Unique per run.
    pub name: String,
    pub markers: Vec<ColoredMarker>,
    /// Whether the layer starts visible.
    pub show: bool,
}

/// One weighted point of the aggregated intensity layer. The weight is
/// the raw SNR, not normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatSample {
    pub lat: f64,
    pub lon: f64,
    pub weight: f64,
}

impl From<&ValidSample> for HeatSample {
    fn from(sample: &ValidSample) -> Self {
        HeatSample {
            lat: sample.latitude,
            lon: sample.longitude,
            weight: sample.snr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_as_f64() {
        assert_eq!(FieldValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(FieldValue::Integer(-3).as_f64(), Some(-3.0));
        assert_eq!(FieldValue::Text("1.5".into()).as_f64(), None);
        assert_eq!(FieldValue::Empty.as_f64(), None);
    }

    #[test]
    fn display_text_rejects_empty() {
        assert_eq!(FieldValue::Empty.display_text(), None);
        assert_eq!(FieldValue::Text(String::new()).display_text(), None);
        assert_eq!(
            FieldValue::Text("node1".into()).display_text(),
            Some("node1".to_string())
        );
        assert_eq!(FieldValue::Integer(7).display_text(), Some("7".to_string()));
    }

    #[test]
    fn heat_sample_uses_raw_snr_as_weight() {
        let sample = ValidSample {
            latitude: 45.0,
            longitude: -122.0,
            snr: -18.25,
            elevation: 10.0,
            sender: "node1".into(),
            source_id: "log1.csv".into(),
        };
        let heat = HeatSample::from(&sample);
        assert_eq!(heat.lat, 45.0);
        assert_eq!(heat.lon, -122.0);
        assert_eq!(heat.weight, -18.25);
    }
}
