use std::io::{self, BufRead, Write};
use std::thread;

use anyhow::{bail, Context as _, Result};
use tracing::{debug, error, info, warn};

use crate::context::Context;
use crate::pattern;
use crate::report::Report;
use crate::word::SharedWord;
use crate::worker;

/// Printed once every worker is running
pub const PROMPT: &str = "Press ENTER to terminate test...";

/// Printed once every worker has been joined
pub const CONCLUDED: &str = "Test concluded";

/// How many threads of each kind to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub writers: usize,
    pub readers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            writers: 2,
            readers: 2,
        }
    }
}

/// Totals over every worker of a finished run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Writer iterations, each one stores both patterns
    pub writes: u64,
    pub reads: u64,
    pub anomalies: u64,
}

/**
Run the whole test

Starts the writers, then the readers as soon as the word holds a legal
value, prints [`PROMPT`] to `output` and waits for a
line (or the end) of `input`. Then every worker is stopped and joined and
[`CONCLUDED`] is printed.

Failing to read `input` is logged and treated like any other signal to stop.
Failing to write `output` is logged and otherwise ignored.

```
# use tearing::controller::{self, Config};
# use tearing::{AtomicWord, Collector};
#
let collector = Collector::new(16);
let mut output = Vec::new();

let summary = controller::run(
    &Config::default(),
    AtomicWord::default(),
    &collector,
    std::io::empty(),
    &mut output,
)
.unwrap();

assert_eq!(collector.count(), summary.anomalies);
assert!(String::from_utf8(output).unwrap().ends_with("Test concluded\n"));
```
*/
pub fn run<W, R, I, O>(
    config: &Config,
    word: W,
    reporter: R,
    mut input: I,
    mut output: O,
) -> Result<Summary>
where
    W: SharedWord,
    R: Report,
    I: BufRead,
    O: Write,
{
    let ctx = &Context::new(word);
    let reporter = &reporter;

    let summary = thread::scope(|s| {
        let mut writers = Vec::with_capacity(config.writers);
        let mut readers = Vec::with_capacity(config.readers);

        let spawned = (|| -> io::Result<()> {
            for i in 0..config.writers {
                let handle = thread::Builder::new()
                    .name(format!("writer-{i}"))
                    .spawn_scoped(s, move || {
                        let iterations = worker::write(ctx);
                        debug!(iterations, "writer finished");
                        iterations
                    })?;
                writers.push(handle);
            }

            // Readers only start once the initial zero has been overwritten
            while !pattern::is_legal(ctx.word().load())
                && !writers.iter().all(|w| w.is_finished())
            {
                thread::yield_now();
            }

            for i in 0..config.readers {
                let handle = thread::Builder::new()
                    .name(format!("reader-{i}"))
                    .spawn_scoped(s, move || {
                        let stats = worker::read(ctx, reporter);
                        debug!(
                            reads = stats.reads,
                            anomalies = stats.anomalies,
                            "reader finished"
                        );
                        stats
                    })?;
                readers.push(handle);
            }

            Ok(())
        })();

        if let Err(err) = spawned {
            // Whatever did start is joined when the scope ends
            ctx.stop();
            return Err(err).context("failed to spawn worker thread");
        }

        debug!(writers = writers.len(), readers = readers.len(), "workers started");

        if let Err(err) = writeln!(output, "{PROMPT}").and_then(|()| output.flush()) {
            warn!(error = %err, "failed to print prompt");
        }

        wait_for_signal(&mut input);
        ctx.stop();
        debug!("stop requested, joining workers");

        let mut summary = Summary::default();
        let mut panicked = 0;

        for handle in writers {
            match handle.join() {
                Ok(iterations) => summary.writes += iterations,
                Err(_) => panicked += 1,
            }
        }

        for handle in readers {
            match handle.join() {
                Ok(stats) => {
                    summary.reads += stats.reads;
                    summary.anomalies += stats.anomalies;
                }
                Err(_) => panicked += 1,
            }
        }

        if panicked > 0 {
            bail!("{panicked} worker thread(s) panicked");
        }

        Ok(summary)
    })?;

    info!(
        writes = summary.writes,
        reads = summary.reads,
        anomalies = summary.anomalies,
        "all workers joined"
    );

    if let Err(err) = writeln!(output, "{CONCLUDED}").and_then(|()| output.flush()) {
        warn!(error = %err, "failed to print completion message");
    }

    Ok(summary)
}

/// Block until `input` yields a line or ends, the content doesn't matter
fn wait_for_signal(input: &mut impl BufRead) {
    let mut line = Vec::new();
    match input.read_until(b'\n', &mut line) {
        Ok(0) => debug!("input closed"),
        Ok(_) => debug!("stop signal received"),
        Err(err) => error!(error = %err, "failed to read input, stopping anyway"),
    }
}
