/*!
This crate provides a small harness for watching a 64-bit value tear.

Writer threads store one of two fixed patterns into a shared word as fast as
they can, while reader threads load it and report every value that is neither
pattern. How a store reaches memory is decided by the [`SharedWord`] in use:

- [`TornWord`] stores the value as two separate 32-bit halves, exactly like a
  plain 64-bit store on a 32-bit target. Readers regularly catch a word where
  only one half has been updated.
- [`AtomicWord`] is a single atomic. Readers never see anything but the two
  patterns, which makes it the control for the harness itself.

The only synchronization shared by everyone is the running flag inside
[`Context`], which is how the [`controller`] stops the workers.

# Example
```
use tearing::controller::{self, Config};
use tearing::{Collector, TornWord};

let collector = Collector::new(8);

// An empty input means "stop right away"
let summary = controller::run(
    &Config::default(),
    TornWord::default(),
    &collector,
    std::io::empty(),
    std::io::sink(),
)
.unwrap();

assert_eq!(summary.anomalies, collector.count());
for anomaly in collector.anomalies() {
    assert!(!tearing::pattern::is_legal(anomaly.value()));
}
```
*/

mod context;
mod report;
mod sync;
mod trigger;
mod word;

pub mod controller;
pub mod pattern;
pub mod worker;

pub use crate::context::Context;
pub use crate::controller::{Config, Summary};
pub use crate::report::{Anomaly, Collector, Report, StdoutReporter};
pub use crate::trigger::AfterDelay;
pub use crate::word::{AtomicWord, SharedWord, TornWord};
