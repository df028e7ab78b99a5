use std::time::Duration;

use tearing::controller::{self, Config};
use tearing::{AfterDelay, Collector, TornWord};

const RUN_FOR: Duration = Duration::from_secs(5);

fn main() {
    // Printing every torn read would drown the terminal
    let collector = Collector::new(10);

    let summary = controller::run(
        &Config::default(),
        TornWord::default(),
        &collector,
        AfterDelay::new(RUN_FOR),
        std::io::stdout(),
    )
    .unwrap();

    for anomaly in collector.anomalies() {
        println!("{anomaly}");
    }
    println!("{} of {} reads were torn", summary.anomalies, summary.reads);
}
