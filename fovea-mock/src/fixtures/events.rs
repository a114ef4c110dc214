use fovea_core::{Column, TimeSeriesTable};

use super::streams::base_ts;

const MS: i64 = 1_000_000;

/// Three blinks; offsets are milliseconds from the recording epoch.
pub fn blinks() -> TimeSeriesTable {
    let rows: [(i64, i64); 3] = [(300, 450), (1200, 1330), (1890, 1985)];
    let (starts, ends, durations) = intervals(&rows);
    let ids: Vec<Option<i64>> = (1..=3).map(Some).collect();
    TimeSeriesTable::new(
        starts,
        vec![
            Column::int("end_timestamp", ends),
            Column::float("duration", durations),
            Column::int("blink id", ids),
        ],
    )
    .unwrap()
}

/// Four fixations with mean gaze positions.
pub fn fixations() -> TimeSeriesTable {
    let rows: [(i64, i64); 4] = [(80, 290), (460, 880), (1000, 1180), (1430, 1860)];
    let (starts, ends, durations) = intervals(&rows);
    let ids: Vec<Option<i64>> = (1..=4).map(Some).collect();
    TimeSeriesTable::new(
        starts,
        vec![
            Column::int("end_timestamp", ends),
            Column::float("duration", durations),
            Column::float("fixation x [px]", vec![812.4, 845.1, 790.6, 828.9]),
            Column::float("fixation y [px]", vec![598.2, 571.7, 604.3, 586.0]),
            Column::int("fixation id", ids),
        ],
    )
    .unwrap()
}

/// Three saccades bridging the fixations.
pub fn saccades() -> TimeSeriesTable {
    let rows: [(i64, i64); 3] = [(290, 460), (880, 1000), (1180, 1430)];
    let (starts, ends, durations) = intervals(&rows);
    let ids: Vec<Option<i64>> = (1..=3).map(Some).collect();
    TimeSeriesTable::new(
        starts,
        vec![
            Column::int("end_timestamp", ends),
            Column::float("duration", durations),
            Column::float("amplitude [px]", vec![54.8, 102.3, 66.1]),
            Column::float("peak velocity [px/s]", vec![310.5, 488.2, 351.9]),
            Column::int("saccade id", ids),
        ],
    )
    .unwrap()
}

/// Free-text annotations with a single timestamp each.
pub fn annotations() -> TimeSeriesTable {
    let rows: [(i64, &str, &str); 3] = [
        (0, "recording.begin", "recording"),
        (1000, "stimulus.onset", "stimulus"),
        (2000, "recording.end", "recording"),
    ];
    let ts: Vec<i64> = rows.iter().map(|&(ms, _, _)| base_ts() + ms * MS).collect();
    let names: Vec<Option<String>> = rows.iter().map(|&(_, n, _)| Some(n.to_string())).collect();
    let kinds: Vec<Option<String>> = rows.iter().map(|&(_, _, k)| Some(k.to_string())).collect();
    TimeSeriesTable::new(
        ts,
        vec![Column::str("name", names), Column::str("type", kinds)],
    )
    .unwrap()
}

fn intervals(rows: &[(i64, i64)]) -> (Vec<i64>, Vec<Option<i64>>, Vec<f64>) {
    let starts = rows.iter().map(|&(s, _)| base_ts() + s * MS).collect();
    let ends = rows.iter().map(|&(_, e)| Some(base_ts() + e * MS)).collect();
    let durations = rows.iter().map(|&(s, e)| (e - s) as f64).collect();
    (starts, ends, durations)
}
