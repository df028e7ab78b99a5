//! The busy loops run by writer and reader threads
//!
//! Neither loop blocks or sleeps. The only thing that ends them is the
//! running flag in [`Context`].

use crate::context::Context;
use crate::pattern;
use crate::report::{Anomaly, Report};
use crate::sync::relax;
use crate::word::SharedWord;

/// What a single reader did before it was stopped
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadStats {
    pub reads: u64,
    pub anomalies: u64,
}

/**
Store the two legal patterns back to back until stopped

Returns the number of iterations (each one storing both patterns).

```
# use tearing::{worker, AtomicWord, Context};
#
let ctx = Context::new(AtomicWord::default());
ctx.stop();
assert_eq!(worker::write(&ctx), 0);
```
*/
pub fn write<W: SharedWord>(ctx: &Context<W>) -> u64 {
    let word = ctx.word();
    let mut iterations = 0;

    while ctx.is_running() {
        word.store(pattern::FIRST);
        word.store(pattern::SECOND);
        iterations += 1;
        relax();
    }

    iterations
}

/// Classify a single read
pub fn check(value: u64) -> Option<Anomaly> {
    if pattern::is_legal(value) {
        None
    } else {
        Some(Anomaly(value))
    }
}

/**
Load the shared word until stopped, reporting every value that isn't legal

An anomaly is reported and then the loop carries on.
*/
pub fn read<W, R>(ctx: &Context<W>, reporter: &R) -> ReadStats
where
    W: SharedWord,
    R: Report + ?Sized,
{
    let word = ctx.word();
    let mut stats = ReadStats::default();

    while ctx.is_running() {
        let value = word.load();
        stats.reads += 1;

        if let Some(anomaly) = check(value) {
            stats.anomalies += 1;
            reporter.report(anomaly);
        }

        relax();
    }

    stats
}
