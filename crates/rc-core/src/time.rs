//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter owned by `SimClock`.
//! The runner advances the clock *before* ticking agents, so the first step
//! every agent sees is `T1`; fault tables are written against that numbering.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The shared simulated-time counter read by behavior actions.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each step.
    pub current_tick: Tick,
}

impl SimClock {
    /// A clock at `Tick::ZERO` (no step published yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick and return the new value.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = self.current_tick + 1;
        self.current_tick
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Built by the application (CLI flags, tests) and passed to the runner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total steps to simulate.  The clock reads `T1..=T{total_ticks}`.
    pub total_ticks: u64,

    /// Emit an agent snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Real-time pause after each step, for human-readable demo output.
    /// `None` runs flat out.
    pub step_delay_ms: Option<u64>,
}

impl SimConfig {
    /// Configuration for a run of `total_ticks` steps with per-tick snapshots
    /// and no pacing.
    pub fn with_ticks(total_ticks: u64) -> Self {
        Self { total_ticks, ..Self::default() }
    }

    /// The last tick the runner publishes (inclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn step_delay(&self) -> Option<Duration> {
        self.step_delay_ms.filter(|&ms| ms > 0).map(Duration::from_millis)
    }

    /// Reject configurations the runner cannot execute.
    pub fn validate(&self) -> CoreResult<()> {
        if self.total_ticks == 0 {
            return Err(CoreError::Config("total_ticks must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           5,
            output_interval_ticks: 1,
            step_delay_ms:         None,
        }
    }
}
