use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// TimingSample
// ---------------------------------------------------------------------------

/// Wall-clock totals from repeated measurements. Each entry covers `number`
/// back-to-back calls of the timed operation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSample {
    number: u32,
    runs: Vec<Duration>,
}

impl TimingSample {
    /// Requires at least one run and `number > 0`.
    pub fn new(number: u32, runs: Vec<Duration>) -> Result<Self> {
        check_counts(number, runs.len())?;
        Ok(Self { number, runs })
    }

    /// Calls per run.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn runs(&self) -> &[Duration] {
        &self.runs
    }

    /// Fastest run divided by calls per run, in seconds: the per-call
    /// latency least disturbed by scheduling noise.
    pub fn best(&self) -> f64 {
        self.fastest().as_secs_f64() / f64::from(self.number)
    }

    fn fastest(&self) -> Duration {
        // non-empty by construction
        self.runs.iter().min().copied().unwrap_or_default()
    }
}

fn check_counts(number: u32, repeat: usize) -> Result<()> {
    if number == 0 {
        return Err(Error::InvalidArgument("number of loops must be at least 1".into()));
    }
    if repeat == 0 {
        return Err(Error::InvalidArgument("repeat count must be at least 1".into()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Timing loops
// ---------------------------------------------------------------------------

/// Time `repeat` independent runs of `number` sequential calls to `operation`.
pub fn repeat<F, T>(mut operation: F, number: u32, repeat: u32) -> Result<TimingSample>
where
    F: FnMut() -> T,
{
    try_repeat(|| Ok(operation()), number, repeat)
}

/// Like [`repeat`], for operations that can fail. The first error aborts the
/// measurement and is returned unchanged.
pub fn try_repeat<F, T>(mut operation: F, number: u32, repeat: u32) -> Result<TimingSample>
where
    F: FnMut() -> Result<T>,
{
    check_counts(number, repeat as usize)?;

    let mut runs = Vec::with_capacity(repeat as usize);
    for i in 0..repeat {
        let start = Instant::now();
        for _ in 0..number {
            black_box(operation()?);
        }
        let elapsed = start.elapsed();
        trace!("run {}/{repeat}: {number} calls in {elapsed:?}", i + 1);
        runs.push(elapsed);
    }

    let sample = TimingSample { number, runs };
    debug!("best of {repeat}: {}s per call", sample.best());
    Ok(sample)
}
