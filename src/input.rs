use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid seed.")]
pub struct ParseSeedError(pub String);

/// Any `i64` is a seed. Negative seeds wrap to their two's complement bits.
pub fn parse_seed(word: &str) -> Result<i64, ParseSeedError> {
    word.parse().map_err(|_| ParseSeedError(word.to_owned()))
}

/// Splits buffered input into whitespace-separated characters and words, reading a line at a
/// time, so `"u d"` on one line yields two commands.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns `false` at end of input. Bytes that are not UTF-8 become `U+FFFD`.
    fn refill(&mut self) -> io::Result<bool> {
        let mut line = Vec::new();
        let read = self.reader.read_until(b'\n', &mut line)?;

        self.pending.extend(String::from_utf8_lossy(&line).chars());

        Ok(read > 0)
    }

    /// The next non-whitespace character, or `None` at end of input.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        loop {
            match self.pending.pop_front() {
                Some(c) if c.is_whitespace() => {}
                Some(c) => return Ok(Some(c)),
                None => {
                    if !self.refill()? {
                        return Ok(None);
                    }
                }
            }
        }
    }

    pub fn next_word(&mut self) -> io::Result<Option<String>> {
        let Some(first) = self.next_char()? else {
            return Ok(None);
        };

        let mut word = String::from(first);

        while let Some(c) = self.pending.pop_front() {
            if c.is_whitespace() {
                self.pending.push_front(c);
                break;
            }

            word.push(c);
        }

        Ok(Some(word))
    }
}
