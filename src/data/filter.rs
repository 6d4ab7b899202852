use crate::data::model::{RawRecord, ValidSample};

// Column names as they appear in range-test logs.
const COL_LAT: &str = "rx lat";
const COL_LON: &str = "rx long";
const COL_SNR: &str = "rx snr";
const COL_SENDER: &str = "sender name";
const COL_ELEVATION: &str = "rx elevation";
const COL_PAYLOAD: &str = "payload";

// ---------------------------------------------------------------------------
// Record validation
// ---------------------------------------------------------------------------

/// Reduce one source's rows to its valid telemetry samples, preserving
/// row order.
///
/// A record passes when, in this order:
/// 1. its `payload` text carries a `seq <digits>` heartbeat marker
///    (separates real telemetry from header artifacts and chatter),
/// 2. latitude, longitude, SNR, sender and elevation are all present,
/// 3. latitude/longitude are numeric and inside [-90, 90] / [-180, 180].
///
/// Dropped rows are a normal, silent reduction – there is no error
/// path here. An empty result means "no valid samples for this source";
/// the orchestrator decides what to do with that.
pub fn valid_samples(records: &[RawRecord], source_id: &str) -> Vec<ValidSample> {
    records
        .iter()
        .filter_map(|record| validate_record(record, source_id))
        .collect()
}

/// Validate a single record. `None` means the row is dropped.
fn validate_record(record: &RawRecord, source_id: &str) -> Option<ValidSample> {
    let payload = record.get(COL_PAYLOAD)?.display_text()?;
    if !has_seq_marker(&payload) {
        return None;
    }

    let latitude = record.get(COL_LAT)?.as_f64()?;
    let longitude = record.get(COL_LON)?.as_f64()?;
    let snr = record.get(COL_SNR)?.as_f64()?;
    let elevation = record.get(COL_ELEVATION)?.as_f64()?;
    let sender = record.get(COL_SENDER)?.display_text()?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }

    Some(ValidSample {
        latitude,
        longitude,
        snr,
        elevation,
        sender,
        source_id: source_id.to_string(),
    })
}

/// `true` when the text contains `seq ` immediately followed by a digit,
/// i.e. it matches the `seq \d+` heartbeat pattern somewhere.
fn has_seq_marker(text: &str) -> bool {
    text.match_indices("seq ").any(|(idx, _)| {
        text[idx + 4..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    })
}
