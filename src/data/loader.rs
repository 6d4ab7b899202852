use std::path::Path;

use crate::data::model::{FieldValue, RawRecord};
use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// CSV record loader
// ---------------------------------------------------------------------------

/// Load all rows of one CSV log, preserving source row order.
///
/// Expected layout: header row with column names; the telemetry columns
/// are `rx lat`, `rx long`, `rx snr`, `sender name`, `rx elevation` and
/// `payload`, but every column present is carried through so the filter
/// can inspect whatever it needs.
///
/// Any open or parse failure is [`PipelineError::SourceUnreadable`] –
/// fatal for this source only, the orchestrator keeps going.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, PipelineError> {
    let unreadable = |source| PipelineError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(&unreadable)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(&unreadable)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(&unreadable)?;
        let mut record = RawRecord::default();
        for (idx, cell) in row.iter().enumerate() {
            if let Some(name) = headers.get(idx) {
                record
                    .columns
                    .insert(name.clone(), guess_field_type(cell.trim()));
            }
        }
        records.push(record);
    }

    Ok(records)
}

/// Ad-hoc cell typing: integer, then float, then text; empty stays empty.
fn guess_field_type(s: &str) -> FieldValue {
    if s.is_empty() {
        return FieldValue::Empty;
    }
    if let Ok(i) = s.parse::<i64>() {
        return FieldValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return FieldValue::Float(f);
    }
    FieldValue::Text(s.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("create temp csv");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file
    }

    #[test]
    fn loads_rows_in_source_order() {
        let file = write_csv(
            "rx lat,rx long,rx snr,sender name,rx elevation,payload\n\
             45.5,-122.6,3.5,node1,120,seq 1\n\
             45.6,-122.7,-8.0,node1,121,seq 2\n",
        );
        let records = load_records(file.path()).expect("load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("rx lat"), Some(&FieldValue::Float(45.5)));
        assert_eq!(records[1].get("rx snr"), Some(&FieldValue::Float(-8.0)));
        assert_eq!(
            records[0].get("payload"),
            Some(&FieldValue::Text("seq 1".into()))
        );
    }

    #[test]
    fn guesses_cell_types() {
        assert_eq!(guess_field_type(""), FieldValue::Empty);
        assert_eq!(guess_field_type("120"), FieldValue::Integer(120));
        assert_eq!(guess_field_type("-21.5"), FieldValue::Float(-21.5));
        assert_eq!(guess_field_type("node1"), FieldValue::Text("node1".into()));
    }

    #[test]
    fn missing_file_is_source_unreadable() {
        let err = load_records(Path::new("/nonexistent/rangetest.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::SourceUnreadable { .. }));
    }
}
