use fovea_types::{EventKind, FoveaError, SamplingFreq, StreamKind};

#[test]
fn stream_names_parse_case_insensitively_with_alias() {
    assert_eq!("GAZE".parse::<StreamKind>().unwrap(), StreamKind::Gaze);
    assert_eq!(
        "3d_eye_states".parse::<StreamKind>().unwrap(),
        StreamKind::EyeStates
    );
    assert_eq!(
        "eye_states".parse::<StreamKind>().unwrap(),
        StreamKind::EyeStates
    );
    assert!(matches!(
        "pupil".parse::<StreamKind>(),
        Err(FoveaError::InvalidInput(_))
    ));
}

#[test]
fn event_names_accept_singular_and_plural() {
    assert_eq!("blink".parse::<EventKind>().unwrap(), EventKind::Blink);
    assert_eq!("blinks".parse::<EventKind>().unwrap(), EventKind::Blink);
    assert_eq!("Fixations".parse::<EventKind>().unwrap(), EventKind::Fixation);
    assert_eq!("events".parse::<EventKind>().unwrap(), EventKind::Event);
    assert!(matches!(
        "glances".parse::<EventKind>(),
        Err(FoveaError::InvalidInput(_))
    ));
}

#[test]
fn resolve_expands_all_and_collapses_duplicates() {
    assert_eq!(StreamKind::resolve(&["all"]).unwrap(), StreamKind::ALL);
    assert_eq!(
        StreamKind::resolve(&["imu", "gaze", "IMU"]).unwrap(),
        vec![StreamKind::Gaze, StreamKind::Imu]
    );
    assert_eq!(EventKind::resolve(&["ALL"]).unwrap(), EventKind::ALL);
    // Canonical order regardless of request order.
    assert_eq!(
        EventKind::resolve(&["saccades", "blink"]).unwrap(),
        vec![EventKind::Blink, EventKind::Saccade]
    );
}

#[test]
fn resolve_rejects_all_mixed_with_names() {
    assert!(matches!(
        StreamKind::resolve(&["all", "gaze"]),
        Err(FoveaError::InvalidInput(_))
    ));
    assert!(matches!(
        EventKind::resolve(&["blinks", "all"]),
        Err(FoveaError::InvalidInput(_))
    ));
}

#[test]
fn sampling_freq_parses_policies_and_numeric_hz() {
    assert_eq!("min".parse::<SamplingFreq>().unwrap(), SamplingFreq::Min);
    assert_eq!("MAX".parse::<SamplingFreq>().unwrap(), SamplingFreq::Max);
    assert_eq!(
        "120".parse::<SamplingFreq>().unwrap(),
        SamplingFreq::Hz(120.0)
    );
    assert!(matches!(
        "median".parse::<SamplingFreq>(),
        Err(FoveaError::InvalidInput(_))
    ));
}
