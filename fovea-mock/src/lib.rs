use fovea_core::{EventKind, Recording, Stream, StreamKind, TimeSeriesTable};

mod fixtures;

/// Mock recording for CI-safe tests. Provides deterministic data from
/// static fixtures: gaze and 3-D eye states at 200 Hz, IMU at 110 Hz, with
/// deliberately staggered stream coverage so alignment windows are
/// non-trivial, plus blink/fixation/saccade/annotation event tables.
pub struct MockRecording {
    gaze: Option<Stream>,
    eye_states: Option<Stream>,
    imu: Option<Stream>,
    blinks: Option<TimeSeriesTable>,
    fixations: Option<TimeSeriesTable>,
    saccades: Option<TimeSeriesTable>,
    annotations: Option<TimeSeriesTable>,
}

impl Default for MockRecording {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRecording {
    /// Build a recording with every stream and event kind present.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gaze: Some(fixtures::streams::gaze()),
            eye_states: Some(fixtures::streams::eye_states()),
            imu: Some(fixtures::streams::imu()),
            blinks: Some(fixtures::events::blinks()),
            fixations: Some(fixtures::events::fixations()),
            saccades: Some(fixtures::events::saccades()),
            annotations: Some(fixtures::events::annotations()),
        }
    }

    /// Drop a stream, as if it had not been recorded.
    #[must_use]
    pub fn without_stream(mut self, kind: StreamKind) -> Self {
        match kind {
            StreamKind::Gaze => self.gaze = None,
            StreamKind::EyeStates => self.eye_states = None,
            StreamKind::Imu => self.imu = None,
        }
        self
    }

    /// Drop an event kind, as if it had not been recorded.
    #[must_use]
    pub fn without_events(mut self, kind: EventKind) -> Self {
        match kind {
            EventKind::Blink => self.blinks = None,
            EventKind::Fixation => self.fixations = None,
            EventKind::Saccade => self.saccades = None,
            EventKind::Event => self.annotations = None,
        }
        self
    }

    /// Replace a stream with caller-supplied data.
    #[must_use]
    pub fn with_stream(mut self, kind: StreamKind, stream: Stream) -> Self {
        match kind {
            StreamKind::Gaze => self.gaze = Some(stream),
            StreamKind::EyeStates => self.eye_states = Some(stream),
            StreamKind::Imu => self.imu = Some(stream),
        }
        self
    }

    /// Replace an event table with caller-supplied data.
    #[must_use]
    pub fn with_events(mut self, kind: EventKind, table: TimeSeriesTable) -> Self {
        match kind {
            EventKind::Blink => self.blinks = Some(table),
            EventKind::Fixation => self.fixations = Some(table),
            EventKind::Saccade => self.saccades = Some(table),
            EventKind::Event => self.annotations = Some(table),
        }
        self
    }
}

impl Recording for MockRecording {
    fn stream(&self, kind: StreamKind) -> Option<&Stream> {
        match kind {
            StreamKind::Gaze => self.gaze.as_ref(),
            StreamKind::EyeStates => self.eye_states.as_ref(),
            StreamKind::Imu => self.imu.as_ref(),
        }
    }

    fn stream_mut(&mut self, kind: StreamKind) -> Option<&mut Stream> {
        match kind {
            StreamKind::Gaze => self.gaze.as_mut(),
            StreamKind::EyeStates => self.eye_states.as_mut(),
            StreamKind::Imu => self.imu.as_mut(),
        }
    }

    fn events(&self, kind: EventKind) -> Option<&TimeSeriesTable> {
        match kind {
            EventKind::Blink => self.blinks.as_ref(),
            EventKind::Fixation => self.fixations.as_ref(),
            EventKind::Saccade => self.saccades.as_ref(),
            EventKind::Event => self.annotations.as_ref(),
        }
    }
}
