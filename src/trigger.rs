use std::io::{self, BufRead, Read};
use std::time::Duration;

/**
Input that blocks for a while and then delivers a single newline

Stands in for a user pressing ENTER after a fixed amount of time.

```
# use std::io::BufRead;
# use std::time::Duration;
# use tearing::AfterDelay;
#
let mut input = AfterDelay::new(Duration::from_millis(1));
let mut line = String::new();
input.read_line(&mut line).unwrap();
assert_eq!(line, "\n");
```
*/
#[derive(Debug)]
pub struct AfterDelay {
    delay: Option<Duration>,
    pending: &'static [u8],
}

impl AfterDelay {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            pending: b"\n",
        }
    }

    fn wait(&mut self) {
        if let Some(delay) = self.delay.take() {
            std::thread::sleep(delay);
        }
    }
}

impl Read for AfterDelay {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.wait();
        self.pending.read(buf)
    }
}

impl BufRead for AfterDelay {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.wait();
        Ok(self.pending)
    }

    fn consume(&mut self, amt: usize) {
        self.pending = &self.pending[amt.min(self.pending.len())..];
    }
}
