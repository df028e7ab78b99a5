#![cfg(loom)]

use std::sync::atomic::{AtomicBool, Ordering::*};

use loom::sync::Arc;

use tearing::pattern::{self, FIRST, SECOND};
use tearing::{worker, AtomicWord, Collector, Context, SharedWord, TornWord};

fn high(value: u64) -> u64 {
    value >> 32
}

fn low(value: u64) -> u64 {
    value & 0xFFFF_FFFF
}

#[test]
fn atomic_word_never_tears() {
    loom::model(|| {
        let word = Arc::new(AtomicWord::new(FIRST));

        let handle = loom::thread::spawn({
            let word = Arc::clone(&word);
            move || {
                word.store(SECOND);
                word.store(FIRST);
            }
        });

        let value = word.load();
        assert!(pattern::is_legal(value), "Value was {value:#x}");

        handle.join().unwrap();
        assert_eq!(word.load(), FIRST);
    });
}

#[test]
fn torn_word_mixes_whole_halves() {
    loom::model(|| {
        let word = Arc::new(TornWord::new(FIRST));

        let handle = loom::thread::spawn({
            let word = Arc::clone(&word);
            move || {
                word.store(SECOND);
                word.store(FIRST);
            }
        });

        let value = word.load();
        assert!(matches!(high(value), 0x1234_5678 | 0x1111_1111), "Value was {value:#x}");
        assert!(matches!(low(value), 0xABCD_0000 | 0x1111_1111), "Value was {value:#x}");

        handle.join().unwrap();
        assert_eq!(word.load(), FIRST);
    });
}

#[test]
fn torn_word_can_tear() {
    static TORN: AtomicBool = AtomicBool::new(false);

    loom::model(|| {
        let word = Arc::new(TornWord::new(FIRST));

        let handle = loom::thread::spawn({
            let word = Arc::clone(&word);
            move || word.store(SECOND)
        });

        if worker::check(word.load()).is_some() {
            TORN.store(true, SeqCst);
        }

        handle.join().unwrap();
    });

    assert!(TORN.load(SeqCst));
}

fn bounded() -> loom::model::Builder {
    let mut builder = loom::model::Builder::new();
    builder.preemption_bound = Some(3);
    builder.max_branches = 10_000;
    builder
}

#[test]
fn writer_observes_stop() {
    bounded().check(|| {
        let ctx = Arc::new(Context::new(AtomicWord::new(FIRST)));

        let writer = loom::thread::spawn({
            let ctx = Arc::clone(&ctx);
            move || worker::write(&*ctx)
        });

        ctx.stop();
        let iterations = writer.join().unwrap();

        // Everything the writer stored happens before the join
        let expected = if iterations > 0 { SECOND } else { FIRST };
        assert_eq!(ctx.word().load(), expected);
    });
}

#[test]
fn reader_observes_stop() {
    bounded().check(|| {
        let ctx = Arc::new(Context::new(AtomicWord::new(SECOND)));

        let reader = loom::thread::spawn({
            let ctx = Arc::clone(&ctx);
            move || worker::read(&*ctx, &Collector::new(0))
        });

        ctx.stop();
        let stats = reader.join().unwrap();
        assert_eq!(stats.anomalies, 0);
    });
}

#[test]
fn stop_publishes_earlier_stores() {
    loom::model(|| {
        let ctx = Arc::new(Context::new(TornWord::new(FIRST)));

        let handle = loom::thread::spawn({
            let ctx = Arc::clone(&ctx);
            move || {
                if !ctx.is_running() {
                    // Both relaxed halves were stored before the flag was cleared
                    assert_eq!(ctx.word().load(), SECOND);
                }
            }
        });

        ctx.word().store(SECOND);
        ctx.stop();

        handle.join().unwrap();
    });
}
