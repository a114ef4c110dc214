use fovea_core::{
    Column, ContinuousInterp, DiscreteInterp, TimeRange, TimeSeriesTable, crop, interpolate,
};
use proptest::prelude::*;

/// Rows as (step to previous row, float value, optional code, optional label).
type Row = (i64, i32, Option<i64>, Option<u8>);

fn build_table(base: i64, rows: &[Row]) -> TimeSeriesTable {
    let mut ts = Vec::with_capacity(rows.len());
    let mut acc = base;
    for &(step, _, _, _) in rows {
        acc += step;
        ts.push(acc);
    }
    let x: Vec<f64> = rows.iter().map(|&(_, v, _, _)| f64::from(v)).collect();
    let code: Vec<Option<i64>> = rows.iter().map(|&(_, _, c, _)| c).collect();
    let label: Vec<Option<String>> = rows
        .iter()
        .map(|&(_, _, _, l)| l.map(|l| format!("label-{l}")))
        .collect();
    TimeSeriesTable::new(
        ts,
        vec![
            Column::float("x", x),
            Column::int("code", code),
            Column::str("label", label),
        ],
    )
    .unwrap()
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    proptest::collection::vec(
        (
            1i64..50_000_000i64,
            -10_000i32..10_000i32,
            prop::option::of(-100i64..100i64),
            prop::option::of(0u8..5u8),
        ),
        2..60,
    )
}

proptest! {
    #[test]
    fn identity_on_own_timestamps(base in 0i64..1_000_000_000i64, rows in arb_rows()) {
        let data = build_table(base, &rows);
        let out = interpolate(
            data.timestamps(),
            &data,
            ContinuousInterp::Linear,
            DiscreteInterp::Nearest,
        ).unwrap();
        prop_assert_eq!(out, data);
    }

    #[test]
    fn output_timestamps_are_sorted_regardless_of_input_order(
        base in 0i64..1_000_000_000i64,
        rows in arb_rows(),
        mut new_ts in proptest::collection::vec(0i64..3_000_000_000i64, 1..40),
    ) {
        let data = build_table(base, &rows);
        new_ts.reverse();
        let out = interpolate(&new_ts, &data, ContinuousInterp::Linear, DiscreteInterp::Nearest)
            .unwrap();
        let mut sorted = new_ts.clone();
        sorted.sort_unstable();
        prop_assert_eq!(out.timestamps(), sorted.as_slice());
        prop_assert_eq!(out.len(), new_ts.len());
    }

    #[test]
    fn out_of_range_targets_get_missing_markers(base in 0i64..1_000_000_000i64, rows in arb_rows()) {
        let data = build_table(base, &rows);
        let before = data.first_ts().unwrap() - 1;
        let after = data.last_ts().unwrap() + 1;
        let out = interpolate(
            &[before, after],
            &data,
            ContinuousInterp::Linear,
            DiscreteInterp::Nearest,
        ).unwrap();
        match out.column("x").unwrap().data() {
            fovea_core::ColumnData::Float(v) => prop_assert!(v.iter().all(|v| v.is_nan())),
            other => prop_assert!(false, "unexpected dtype: {:?}", other),
        }
        match out.column("code").unwrap().data() {
            fovea_core::ColumnData::Int(v) => prop_assert!(v.iter().all(Option::is_none)),
            other => prop_assert!(false, "unexpected dtype: {:?}", other),
        }
        match out.column("label").unwrap().data() {
            fovea_core::ColumnData::Str(v) => prop_assert!(v.iter().all(Option::is_none)),
            other => prop_assert!(false, "unexpected dtype: {:?}", other),
        }
    }

    #[test]
    fn dtype_and_class_are_preserved(
        base in 0i64..1_000_000_000i64,
        rows in arb_rows(),
        new_ts in proptest::collection::vec(0i64..3_000_000_000i64, 1..40),
    ) {
        let data = build_table(base, &rows);
        let out = interpolate(&new_ts, &data, ContinuousInterp::Linear, DiscreteInterp::Nearest)
            .unwrap();
        for col in data.columns() {
            let resampled = out.column(col.name()).unwrap();
            prop_assert_eq!(resampled.dtype(), col.dtype());
            prop_assert_eq!(resampled.class(), col.class());
        }
    }

    #[test]
    fn interpolate_then_crop_keeps_an_ordered_subset_of_the_request(
        base in 0i64..1_000_000_000i64,
        rows in arb_rows(),
        new_ts in proptest::collection::vec(0i64..3_000_000_000i64, 1..40),
    ) {
        let data = build_table(base, &rows);
        let out = interpolate(&new_ts, &data, ContinuousInterp::Linear, DiscreteInterp::Nearest)
            .unwrap();
        let cropped = crop(
            &out,
            &TimeRange::timestamps(data.first_ts(), data.last_ts()),
        ).unwrap();
        let mut expected: Vec<i64> = new_ts
            .iter()
            .copied()
            .filter(|t| *t >= data.first_ts().unwrap() && *t <= data.last_ts().unwrap())
            .collect();
        expected.sort_unstable();
        prop_assert_eq!(cropped.timestamps(), expected.as_slice());
    }
}
