//! The only two values a writer ever stores

/// First legal value, distinct halves so a mix with [`SECOND`] is easy to spot
pub const FIRST: u64 = 0x1234_5678_ABCD_0000;

/// Second legal value
pub const SECOND: u64 = 0x1111_1111_1111_1111;

/// Both legal values, in the order writers store them
pub const ALL: [u64; 2] = [FIRST, SECOND];

/**
Check if a value is one of the legal patterns

```
# use tearing::pattern;
#
assert!(pattern::is_legal(pattern::FIRST));
assert!(pattern::is_legal(pattern::SECOND));
assert!(!pattern::is_legal(0x1234_5678_1111_1111));
```
*/
pub fn is_legal(value: u64) -> bool {
    value == FIRST || value == SECOND
}
