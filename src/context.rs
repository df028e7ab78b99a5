use std::sync::atomic::Ordering::*;

use crate::sync::AtomicBool;
use crate::word::SharedWord;

/**
State shared by every worker: the contended word and the running flag

The word has whatever access discipline `W` gives it. The flag is always
strongly ordered, it must never be the thing that tears.

```
# use tearing::{Context, TornWord};
#
let ctx = Context::new(TornWord::default());
assert!(ctx.is_running());

ctx.stop();
assert!(!ctx.is_running());
```
*/
#[derive(Debug)]
pub struct Context<W> {
    word: W,
    running: AtomicBool,
}

impl<W: SharedWord> Context<W> {
    pub fn new(word: W) -> Self {
        Self {
            word,
            running: AtomicBool::new(true),
        }
    }

    pub fn word(&self) -> &W {
        &self.word
    }

    /// Check if workers should keep going
    pub fn is_running(&self) -> bool {
        self.running.load(Acquire)
    }

    /// Tell every worker to finish, calling this more than once is harmless
    pub fn stop(&self) {
        self.running.store(false, Release);
    }
}
