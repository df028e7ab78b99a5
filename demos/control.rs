use std::time::Duration;

use tearing::controller::{self, Config};
use tearing::{AfterDelay, AtomicWord, StdoutReporter};

const RUN_FOR: Duration = Duration::from_secs(5);

fn main() {
    let summary = controller::run(
        &Config::default(),
        AtomicWord::default(),
        StdoutReporter,
        AfterDelay::new(RUN_FOR),
        std::io::stdout(),
    )
    .unwrap();

    assert_eq!(summary.anomalies, 0);
    eprintln!("{} writes, {} reads", summary.writes, summary.reads);
}
