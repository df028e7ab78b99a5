use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::metadata::LevelFilter;

use tearing::controller::{self, Config};
use tearing::{AtomicWord, StdoutReporter, TornWord};

mod logging;

/// How the shared word is stored and loaded
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    /// Two separate 32-bit halves, reads can tear
    Torn,
    /// One atomic 64-bit word, the control run
    Atomic,
}

/// Watch concurrent writers tear a shared 64-bit value
#[derive(Parser, Debug)]
struct Opts {
    /// Number of writer threads
    #[clap(long, default_value_t = 2)]
    writers: usize,

    /// Number of reader threads
    #[clap(long, default_value_t = 2)]
    readers: usize,

    /// Access discipline of the shared word
    #[clap(long, value_enum, default_value_t = Access::Torn)]
    access: Access,

    /// Diagnostics level on stderr (RUST_LOG takes further directives)
    #[clap(long)]
    log: Option<LevelFilter>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    logging::init_stderr_tracing(opts.log);
    tracing::debug!(?opts, "starting");

    let config = Config {
        writers: opts.writers,
        readers: opts.readers,
    };

    let input = io::stdin().lock();
    let output = io::stdout();

    // Stdout stays unlocked here, readers print through it as well
    let summary = match opts.access {
        Access::Torn => {
            controller::run(&config, TornWord::default(), StdoutReporter, input, output)?
        }
        Access::Atomic => {
            controller::run(&config, AtomicWord::default(), StdoutReporter, input, output)?
        }
    };
    tracing::debug!(?summary, "finished");

    Ok(())
}
