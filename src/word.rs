use std::fmt;
use std::sync::atomic::Ordering::*;

use crate::sync::{AtomicU32, AtomicU64};

/**
A 64-bit word shared between every writer and reader

Implementors decide how indivisible a store is. Nothing else is promised:
a reader may observe any value an implementation allows to exist in memory.
*/
pub trait SharedWord: Send + Sync {
    /// Store a new value
    fn store(&self, value: u64);

    /// Load the current value
    fn load(&self) -> u64;
}

impl<W: SharedWord + ?Sized> SharedWord for &W {
    fn store(&self, value: u64) {
        (**self).store(value);
    }

    fn load(&self) -> u64 {
        (**self).load()
    }
}

// -------------------------------------

/**
A word that is stored and loaded as two independent 32-bit halves

This is what a 32-bit target does with a plain 64-bit store: two separate
instructions, high half first, with nothing tying them together. A reader
that lands between the two stores sees the high half of one value and the
low half of another.

```
# use tearing::{SharedWord, TornWord};
#
let word = TornWord::new(0);
word.store(0x1234_5678_ABCD_0000);
assert_eq!(word.load(), 0x1234_5678_ABCD_0000);
```
*/
pub struct TornWord {
    high: AtomicU32,
    low: AtomicU32,
}

impl TornWord {
    pub fn new(value: u64) -> Self {
        let (high, low) = split(value);
        Self {
            high: AtomicU32::new(high),
            low: AtomicU32::new(low),
        }
    }
}

impl Default for TornWord {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SharedWord for TornWord {
    fn store(&self, value: u64) {
        let (high, low) = split(value);
        self.high.store(high, Relaxed);
        self.low.store(low, Relaxed);
    }

    fn load(&self) -> u64 {
        let high = self.high.load(Relaxed);
        let low = self.low.load(Relaxed);
        join(high, low)
    }
}

impl fmt::Debug for TornWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TornWord")
            .field("value", &format_args!("{:#018x}", self.load()))
            .finish()
    }
}

fn split(value: u64) -> (u32, u32) {
    ((value >> 32) as u32, value as u32)
}

fn join(high: u32, low: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

// -------------------------------------

/**
A word backed by a single [`AtomicU64`](std::sync::atomic::AtomicU64)

Stores are indivisible, so a reader only ever sees a value some writer stored.

```
# use tearing::{AtomicWord, SharedWord};
#
let word = AtomicWord::new(7);
assert_eq!(word.load(), 7);
```
*/
pub struct AtomicWord(AtomicU64);

impl AtomicWord {
    pub fn new(value: u64) -> Self {
        Self(AtomicU64::new(value))
    }
}

impl Default for AtomicWord {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SharedWord for AtomicWord {
    fn store(&self, value: u64) {
        self.0.store(value, SeqCst);
    }

    fn load(&self) -> u64 {
        self.0.load(SeqCst)
    }
}

impl fmt::Debug for AtomicWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicWord")
            .field(&format_args!("{:#018x}", self.load()))
            .finish()
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;
    use crate::pattern::{FIRST, SECOND};

    #[test]
    fn starts_at_zero() {
        assert_eq!(TornWord::default().load(), 0);
        assert_eq!(AtomicWord::default().load(), 0);
    }

    #[test]
    fn split_and_join() {
        assert_eq!(split(FIRST), (0x1234_5678, 0xABCD_0000));
        assert_eq!(join(0x1234_5678, 0xABCD_0000), FIRST);
    }

    #[test]
    fn half_written_value_is_a_hybrid() {
        let word = TornWord::new(FIRST);

        // Only the high half of the next store has landed
        word.high.store(split(SECOND).0, Relaxed);
        assert_eq!(word.load(), 0x1111_1111_ABCD_0000);

        word.low.store(split(SECOND).1, Relaxed);
        assert_eq!(word.load(), SECOND);
    }

    #[test]
    fn through_reference() {
        let word = AtomicWord::new(0);
        let by_ref = &word;
        by_ref.store(SECOND);
        assert_eq!(word.load(), SECOND);
    }

    #[test]
    fn debug_shows_value() {
        let word = TornWord::new(SECOND);
        assert_eq!(
            format!("{word:?}"),
            "TornWord { value: 0x1111111111111111 }"
        );
        assert_eq!(
            format!("{:?}", AtomicWord::new(1)),
            "AtomicWord(0x0000000000000001)"
        );
    }
}
