// Network throughput from successive cumulative counter samples.
// One tracker lives for the whole process; each request samples it exactly once.

use std::sync::Mutex;

use crate::models::NetworkSample;

/// Millisecond wall clock used to timestamp samples.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Milliseconds since the Unix epoch.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, operation = "get_timestamp", "system time error");
                0
            })
    }
}

/// Result of one `sample` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RateReading {
    /// Received bytes per second since the previous sample.
    pub input_per_second: f64,
    /// Transmitted bytes per second since the previous sample.
    pub output_per_second: f64,
    /// Tracker state as it was before this call.
    pub previous: Option<NetworkSample>,
    pub previous_time: Option<u64>,
    pub sample_time: u64,
}

#[derive(Debug, Default)]
struct TrackerState {
    last: Option<(NetworkSample, u64)>,
}

pub struct RateTracker {
    state: Mutex<TrackerState>,
    clock: Box<dyn Clock>,
}

impl Default for RateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RateTracker {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            state: Mutex::new(TrackerState::default()),
            clock: Box::new(clock),
        }
    }

    /// Computes rates against the stored sample, then stores `current` as the new baseline.
    /// The clock is read under the lock so concurrent callers see strictly ordered samples.
    /// `None` (no interface reported) yields zero rates and leaves the stored sample alone.
    pub fn sample(&self, current: Option<NetworkSample>) -> RateReading {
        // State is plain data, a panic elsewhere cannot leave it half-written.
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let now = self.clock.now_ms();
        let (previous, previous_time) = match &state.last {
            Some((s, t)) => (Some(s.clone()), Some(*t)),
            None => (None, None),
        };

        let Some(current) = current else {
            return RateReading {
                input_per_second: 0.0,
                output_per_second: 0.0,
                previous,
                previous_time,
                sample_time: now,
            };
        };

        let (input_per_second, output_per_second) = match &state.last {
            Some((prev, prev_ts)) => rates_between(prev, *prev_ts, &current, now),
            None => (0.0, 0.0),
        };
        state.last = Some((current, now));

        RateReading {
            input_per_second,
            output_per_second,
            previous,
            previous_time,
            sample_time: now,
        }
    }

    /// Stored sample and its timestamp, without mutating anything.
    pub fn last_sample(&self) -> Option<(NetworkSample, u64)> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last
            .clone()
    }
}

/// Per-second (rx, tx) between two samples. Zero when no time elapsed, the clock went
/// backwards, or the interface changed; a counter that decreased clamps to zero.
fn rates_between(
    prev: &NetworkSample,
    prev_ts: u64,
    current: &NetworkSample,
    now: u64,
) -> (f64, f64) {
    if prev.interface_name != current.interface_name {
        return (0.0, 0.0);
    }
    let elapsed_ms = now.saturating_sub(prev_ts);
    if elapsed_ms == 0 {
        return (0.0, 0.0);
    }
    let dt_secs = elapsed_ms as f64 / 1000.0;
    let drx = current.rx_bytes.saturating_sub(prev.rx_bytes);
    let dtx = current.tx_bytes.saturating_sub(prev.tx_bytes);
    (drx as f64 / dt_secs, dtx as f64 / dt_secs)
}
