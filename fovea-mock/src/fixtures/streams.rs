use chrono::{TimeZone, Utc};
use fovea_core::{Column, Stream, TimeSeriesTable};

const MS: i64 = 1_000_000;

/// Recording epoch shared by every fixture: 2024-04-02 09:30:00 UTC.
pub fn base_ts() -> i64 {
    Utc.with_ymd_and_hms(2024, 4, 2, 9, 30, 0)
        .unwrap()
        .timestamp_nanos_opt()
        .unwrap()
}

/// Gaze at 200 Hz: 400 samples over 2 s, starting 40 ms after the epoch.
pub fn gaze() -> Stream {
    let start = base_ts() + 40 * MS;
    let ts: Vec<i64> = (0..400i64).map(|i| start + i * 5 * MS).collect();
    let x: Vec<f64> = (0..400).map(|i| 820.0 + 45.0 * (i as f64 / 40.0).sin()).collect();
    let y: Vec<f64> = (0..400).map(|i| 590.0 + 30.0 * (i as f64 / 40.0).cos()).collect();
    let worn: Vec<Option<i64>> = vec![Some(1); 400];
    let data = TimeSeriesTable::new(
        ts,
        vec![
            Column::float("gaze x [px]", x),
            Column::float("gaze y [px]", y),
            Column::int("worn", worn),
        ],
    )
    .unwrap();
    Stream::new(data, 200.0).unwrap()
}

/// 3-D eye states at 200 Hz: 380 samples, starting 100 ms after the epoch.
pub fn eye_states() -> Stream {
    let start = base_ts() + 100 * MS;
    let ts: Vec<i64> = (0..380i64).map(|i| start + i * 5 * MS).collect();
    let left: Vec<f64> = (0..380).map(|i| 3.2 + 0.4 * (i as f64 / 60.0).sin()).collect();
    let right: Vec<f64> = (0..380).map(|i| 3.3 + 0.4 * (i as f64 / 60.0 + 0.1).sin()).collect();
    let data = TimeSeriesTable::new(
        ts,
        vec![
            Column::float("pupil diameter left [mm]", left),
            Column::float("pupil diameter right [mm]", right),
        ],
    )
    .unwrap();
    Stream::new(data, 200.0).unwrap()
}

/// IMU at 110 Hz: 242 samples starting at the epoch, outlasting the other
/// streams so the overlap window is decided elsewhere.
pub fn imu() -> Stream {
    let start = base_ts();
    let step = (1e9 / 110.0).round() as i64;
    let ts: Vec<i64> = (0..242i64).map(|i| start + i * step).collect();
    let gyro_x: Vec<f64> = (0..242).map(|i| 2.5 * (i as f64 / 25.0).sin()).collect();
    let gyro_y: Vec<f64> = (0..242).map(|i| 1.8 * (i as f64 / 25.0).cos()).collect();
    let accel_z: Vec<f64> = (0..242).map(|i| 1.0 + 0.02 * (i as f64 / 30.0).sin()).collect();
    let data = TimeSeriesTable::new(
        ts,
        vec![
            Column::float("gyro x [deg/s]", gyro_x),
            Column::float("gyro y [deg/s]", gyro_y),
            Column::float("acceleration z [g]", accel_z),
        ],
    )
    .unwrap();
    Stream::new(data, 110.0).unwrap()
}
