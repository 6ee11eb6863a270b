use std::fmt;
use std::sync::Mutex;
use std::time::Instant;

/// The three pipeline stages, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StageId {
    Prepare = 1,
    Solve = 2,
    Emit = 3,
}

impl StageId {
    /// The 1-based stage number used in the printed event log.
    pub fn number(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    End,
}

/// One timestamped stage transition, immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Monotonic microseconds since the pipeline started.
    pub time_us: u64,
    pub request_id: usize,
    pub stage: StageId,
    pub kind: EventKind,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            EventKind::Start => "START",
            EventKind::End => "END",
        };
        write!(
            f,
            "[{}] {} | request#{} | stage{}",
            self.time_us,
            kind,
            self.request_id,
            self.stage.number()
        )
    }
}

/// The shared event log.
///
/// A single mutex is fine here: events are appended at stage hand-offs
/// only, six per request in total.
pub struct EventLog {
    origin: Instant,
    events: Mutex<Vec<Event>>,
}

impl EventLog {
    /// Starts the clock; all timestamps are relative to this moment.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, stage: StageId, request_id: usize, kind: EventKind) {
        let event = Event {
            time_us: self.elapsed_us(),
            request_id,
            stage,
            kind,
        };
        self.events.lock().unwrap().push(event);
    }

    /// Microseconds elapsed since the pipeline started.
    pub fn elapsed_us(&self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }

    /// Consumes the log and returns the events in ascending timestamp order.
    pub fn into_sorted(self) -> Vec<Event> {
        let mut events = self.events.into_inner().unwrap();
        events.sort_by_key(|event| event.time_us);
        events
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
