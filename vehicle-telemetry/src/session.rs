//! Monitoring session: run state and append-only sample log
//!
//! The session is an explicit context value owned by the caller. Every operation
//! takes the session by value and hands back the updated one, so there is no
//! ambient state and the tick source stays outside the library.
//!
//! ```
//! use vehicle_telemetry::{Generator, GeneratorConfig, Session};
//!
//! let mut generator = Generator::new(GeneratorConfig::new().with_seed(1)).unwrap();
//!
//! let session = Session::new().tick(&mut generator); // ignored: stopped
//! let session = session.start().tick(&mut generator).tick(&mut generator);
//! assert_eq!(session.log().len(), 2);
//! ```

use crate::generator::SampleSource;
use crate::types::Sample;
use std::fmt;

/// Whether ticks currently produce samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Stopped => write!(f, "Stopped"),
            RunState::Running => write!(f, "Running"),
        }
    }
}

/// Insertion-ordered log of every sample produced in this session
///
/// The only mutation is an append performed by [`Session::tick`]; existing
/// entries are never modified or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionLog {
    samples: Vec<Sample>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Last `n` samples in insertion order (all of them if fewer than `n`)
    pub fn tail(&self, n: usize) -> &[Sample] {
        let start = self.samples.len().saturating_sub(n);
        &self.samples[start..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    fn append(&mut self, sample: Sample) {
        self.samples.push(sample);
    }
}

impl<'a> IntoIterator for &'a SessionLog {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Session context: run state plus the sample log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    run_state: RunState,
    log: SessionLog,
}

impl Session {
    /// Create a stopped session with an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to `Running` (no-op if already running)
    pub fn start(mut self) -> Self {
        if self.run_state != RunState::Running {
            log::debug!("Session started ({} samples in log)", self.log.len());
        }
        self.run_state = RunState::Running;
        self
    }

    /// Transition to `Stopped` (no-op if already stopped)
    pub fn stop(mut self) -> Self {
        if self.run_state != RunState::Stopped {
            log::debug!("Session stopped ({} samples in log)", self.log.len());
        }
        self.run_state = RunState::Stopped;
        self
    }

    /// Handle one external tick.
    ///
    /// While running, draws exactly one sample from `source` and appends it.
    /// While stopped, the tick is ignored and `source` is not called.
    pub fn tick<S: SampleSource + ?Sized>(mut self, source: &mut S) -> Self {
        match self.run_state {
            RunState::Running => {
                let sample = source.next_sample();
                log::trace!("Appending sample #{}", self.log.len() + 1);
                self.log.append(sample);
            }
            RunState::Stopped => {
                log::trace!("Tick ignored while stopped");
            }
        }
        self
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }
}
