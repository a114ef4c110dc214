use fovea_core::{
    Column, ColumnData, EventKind, FoveaError, Recording, TimeSeriesTable, concat_events,
};
use fovea_mock::MockRecording;

fn str_values(table: &TimeSeriesTable, name: &str) -> Vec<Option<String>> {
    match table.column(name).unwrap().data() {
        ColumnData::Str(v) => v.clone(),
        other => panic!("unexpected dtype: {other:?}"),
    }
}

fn int_values(table: &TimeSeriesTable, name: &str) -> Vec<Option<i64>> {
    match table.column(name).unwrap().data() {
        ColumnData::Int(v) => v.clone(),
        other => panic!("unexpected dtype: {other:?}"),
    }
}

#[test]
fn row_count_is_the_sum_of_inputs_sorted_by_start_timestamp() {
    let rec = MockRecording::new();
    let expected = rec.events(EventKind::Blink).unwrap().len()
        + rec.events(EventKind::Fixation).unwrap().len();

    let out = concat_events(&rec, &["blinks", "fixations"]).unwrap();
    assert_eq!(out.len(), expected);
    assert!(out.timestamps().windows(2).all(|w| w[0] <= w[1]));

    let types = str_values(&out, "type");
    assert_eq!(
        types.iter().filter(|t| t.as_deref() == Some("blink")).count(),
        rec.events(EventKind::Blink).unwrap().len()
    );
    assert_eq!(
        types
            .iter()
            .filter(|t| t.as_deref() == Some("fixation"))
            .count(),
        rec.events(EventKind::Fixation).unwrap().len()
    );
}

#[test]
fn every_row_keeps_its_source_kinds_discriminator() {
    let rec = MockRecording::new();
    let out = concat_events(&rec, &["all"]).unwrap();
    let total: usize = EventKind::ALL
        .iter()
        .map(|&k| rec.events(k).unwrap().len())
        .sum();
    assert_eq!(out.len(), total);
    for t in str_values(&out, "type") {
        let t = t.expect("discriminator is always present");
        assert!(["blink", "fixation", "saccade", "event"].contains(&t.as_str()));
    }
}

#[test]
fn annotations_are_schema_normalized_before_the_merge() {
    let rec = MockRecording::new();
    let out = concat_events(&rec, &["events", "fixations"]).unwrap();

    assert!(out.column("message_name").is_some());
    assert!(out.column("message_type").is_some());
    assert!(out.column("name").is_none());

    let types = str_values(&out, "type");
    let names = str_values(&out, "message_name");
    for (t, name) in types.iter().zip(&names) {
        if t.as_deref() == Some("event") {
            assert!(name.is_some(), "annotation rows carry their message name");
        } else {
            assert!(name.is_none(), "other kinds fill message_name with missing");
        }
    }
}

#[test]
fn base_columns_are_always_present_with_typed_missing_fills() {
    let rec = MockRecording::new();
    let out = concat_events(&rec, &["events", "blinks"]).unwrap();
    assert!(out.column("type").is_some());
    assert!(out.column("duration").is_some());

    let types = str_values(&out, "type");
    let ends = int_values(&out, "end_timestamp");
    for (t, end) in types.iter().zip(&ends) {
        if t.as_deref() == Some("blink") {
            assert!(end.is_some());
        } else {
            // Point annotations have no interval end.
            assert!(end.is_none());
        }
    }
}

#[test]
fn fewer_than_two_distinct_kinds_is_invalid_input() {
    let rec = MockRecording::new();
    assert!(matches!(
        concat_events(&rec, &["blinks"]),
        Err(FoveaError::InvalidInput(_))
    ));
    // Singular/plural aliases collapse to a single kind.
    assert!(matches!(
        concat_events(&rec, &["blink", "blinks"]),
        Err(FoveaError::InvalidInput(_))
    ));
}

#[test]
fn unknown_kinds_are_invalid_input() {
    let rec = MockRecording::new();
    assert!(matches!(
        concat_events(&rec, &["blinks", "glances"]),
        Err(FoveaError::InvalidInput(_))
    ));
}

#[test]
fn a_missing_kind_is_reported_by_name() {
    let rec = MockRecording::new().without_events(EventKind::Saccade);
    let err = concat_events(&rec, &["blinks", "saccades"]).unwrap_err();
    assert_eq!(
        err,
        FoveaError::StreamUnavailable {
            name: "saccade".to_string()
        }
    );
}

#[test]
fn equal_start_timestamps_keep_the_canonical_kind_order() {
    let start = 1_000_000_000;
    let blink = TimeSeriesTable::new(
        vec![start],
        vec![
            Column::int("end_timestamp", vec![Some(start + 100)]),
            Column::float("duration", vec![0.1]),
        ],
    )
    .unwrap();
    let fixation = TimeSeriesTable::new(
        vec![start],
        vec![
            Column::int("end_timestamp", vec![Some(start + 200)]),
            Column::float("duration", vec![0.2]),
        ],
    )
    .unwrap();
    let rec = MockRecording::new()
        .with_events(EventKind::Blink, blink)
        .with_events(EventKind::Fixation, fixation);

    // Request order does not matter; the stable sort preserves the
    // canonical blink-before-fixation order on ties.
    let out = concat_events(&rec, &["fixations", "blinks"]).unwrap();
    assert_eq!(
        str_values(&out, "type"),
        vec![Some("blink".to_string()), Some("fixation".to_string())]
    );
}

#[test]
fn conflicting_dtypes_across_kinds_are_rejected() {
    let blink = TimeSeriesTable::new(
        vec![0],
        vec![Column::float("score", vec![0.5])],
    )
    .unwrap();
    let fixation = TimeSeriesTable::new(
        vec![10],
        vec![Column::int("score", vec![Some(1)])],
    )
    .unwrap();
    let rec = MockRecording::new()
        .with_events(EventKind::Blink, blink)
        .with_events(EventKind::Fixation, fixation);

    let err = concat_events(&rec, &["blinks", "fixations"]).unwrap_err();
    assert!(matches!(err, FoveaError::InvalidInput(_)));
}
