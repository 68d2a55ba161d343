//! Start-time sources
//!
//! The registry stamps each new match with `Clock::now`. Summary tie-breaking
//! only needs start times that never run backwards across creation order,
//! so a logical counter works as well as wall-clock time.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use types::record::StartTime;

/// Source of match start times
pub trait Clock {
    /// Time for a match being started now
    fn now(&mut self) -> StartTime;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&mut self) -> StartTime {
        (**self).now()
    }
}

/// Clock chosen at runtime from configuration
pub type DynClock = Box<dyn Clock + Send>;

/// Wall-clock time in Unix nanos, forced strictly increasing
///
/// Two starts within the same clock tick (or after the system clock steps
/// back) get `last + 1`, so start order always matches creation order.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Option<i64>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> StartTime {
        let wall = StartTime::from(Utc::now()).as_nanos();
        let nanos = match self.last {
            Some(last) if wall <= last => last.saturating_add(1),
            _ => wall,
        };
        self.last = Some(nanos);
        StartTime::from_nanos(nanos)
    }
}

/// Counter clock: `origin`, `origin + 1`, ...
#[derive(Debug, Clone)]
pub struct LogicalClock {
    next: i64,
}

impl LogicalClock {
    pub fn new(origin: i64) -> Self {
        Self { next: origin }
    }
}

impl Default for LogicalClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clock for LogicalClock {
    fn now(&mut self) -> StartTime {
        let current = self.next;
        self.next = self.next.saturating_add(1);
        StartTime::from_nanos(current)
    }
}

/// Externally driven clock
///
/// Clones share the same instant, so a test can keep a handle after moving
/// the clock into a registry. Returns the same value until moved, which
/// makes it possible to start several matches at an identical time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(nanos: i64) -> Self {
        Self {
            nanos: Arc::new(AtomicI64::new(nanos)),
        }
    }

    /// Jump to an absolute instant
    pub fn set(&self, nanos: i64) {
        self.nanos.store(nanos, Ordering::SeqCst);
    }

    /// Move forward by `delta` nanos
    pub fn advance(&self, delta: i64) {
        self.nanos.fetch_add(delta, Ordering::SeqCst);
    }

    pub fn current(&self) -> StartTime {
        StartTime::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

impl Clock for ManualClock {
    fn now(&mut self) -> StartTime {
        self.current()
    }
}
