use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering::*};
use std::sync::{Mutex, PoisonError};

use anyhow::Context as _;

const PREFIX: &str = "Detected inconsistent read: 0x";

/**
A value read from the shared word that matches neither legal pattern

Displayed with all 16 hex digits, and parsed back from the same text.

```
# use tearing::Anomaly;
#
let anomaly = Anomaly(0x1111_1111_ABCD_0000);
let line = anomaly.to_string();
assert_eq!(line, "Detected inconsistent read: 0x11111111ABCD0000");
assert_eq!(line.parse::<Anomaly>().unwrap(), anomaly);
```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anomaly(pub u64);

impl Anomaly {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{:016X}", self.0)
    }
}

impl FromStr for Anomaly {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim_end()
            .strip_prefix(PREFIX)
            .with_context(|| format!("not an anomaly report: {s:?}"))?;
        let value = u64::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex value in anomaly report: {hex:?}"))?;
        Ok(Anomaly(value))
    }
}

// -------------------------------------

/// Somewhere for readers to send the anomalies they find
pub trait Report: Send + Sync {
    fn report(&self, anomaly: Anomaly);
}

impl<R: Report + ?Sized> Report for &R {
    fn report(&self, anomaly: Anomaly) {
        (**self).report(anomaly);
    }
}

/// Prints one line per anomaly to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Report for StdoutReporter {
    fn report(&self, anomaly: Anomaly) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{anomaly}") {
            tracing::warn!(error = %err, %anomaly, "failed to print anomaly");
        }
    }
}

/**
Keeps the first few anomalies in memory and counts all of them

```
# use tearing::{Anomaly, Collector, Report};
#
let collector = Collector::new(1);
collector.report(Anomaly(1));
collector.report(Anomaly(2));

assert_eq!(collector.count(), 2);
assert_eq!(collector.anomalies(), [Anomaly(1)]);
```
*/
#[derive(Debug)]
pub struct Collector {
    limit: usize,
    kept: Mutex<Vec<Anomaly>>,
    count: AtomicU64,
}

impl Collector {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            kept: Mutex::new(Vec::new()),
            count: AtomicU64::new(0),
        }
    }

    /// Total number of anomalies reported
    pub fn count(&self) -> u64 {
        self.count.load(Relaxed)
    }

    /// The anomalies that were kept, in the order they arrived
    pub fn anomalies(&self) -> Vec<Anomaly> {
        self.kept.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Report for Collector {
    fn report(&self, anomaly: Anomaly) {
        let seen = self.count.fetch_add(1, Relaxed);
        if seen < self.limit as u64 {
            // A poisoned lock only means another reader panicked mid-push
            let mut kept = self.kept.lock().unwrap_or_else(PoisonError::into_inner);
            kept.push(anomaly);
        }
    }
}
