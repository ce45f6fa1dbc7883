//! Block Accumulation
//!
//! Groups trimmed doc lines into candidate trace blocks. A block starts at a line that opens a
//! marker (`FEATURE(`, `BUG(`, ...), picks up the non-empty lines that follow it, and ends at the
//! next marker line, at a blank line, or at the end of input. Lines seen outside a block are prose
//! and are dropped.
//!
//! ```text
//! FEATURE(ABT-123): Create a payment and     <- start, held
//! verify it was created.                     <- continuation, appended with one space
//! BUG(ABT-334): Added verification           <- start, previous block emitted
//!                                            <- blank, block emitted, back to idle
//! This is a trailing comment                 <- prose, dropped
//! ```
//!
//! A marker line directly followed by another marker line emits a block holding only the first
//! marker line.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z_]+\(").unwrap());

/// True when `line` opens a new trace marker.
pub fn is_block_start(line: &str) -> bool {
    BLOCK_START.is_match(line)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    Accumulating(String),
}

/// The two-state block builder. Feed it lines with [`push_line`](Self::push_line) and call
/// [`finish`](Self::finish) once the input is exhausted.
#[derive(Debug, Clone, Default)]
pub struct BlockAccumulator {
    state: State,
}

impl BlockAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a partial block is held.
    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, State::Accumulating(_))
    }

    /// Process one trimmed line. Returns the block it completed, if any.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        if is_block_start(line) {
            let completed = self.take();
            self.state = State::Accumulating(line.to_string());
            return completed;
        }

        if line.is_empty() {
            return self.take();
        }

        if let State::Accumulating(held) = &mut self.state {
            held.push(' ');
            held.push_str(line);
        }
        None
    }

    /// Flush the held block at end of input.
    pub fn finish(mut self) -> Option<String> {
        self.take()
    }

    fn take(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            State::Idle => None,
            State::Accumulating(block) => {
                tracing::trace!(block = block.as_str(), "emitting block");
                Some(block)
            }
        }
    }
}

/// Lazy iterator over the blocks completed by a sequence of trimmed lines.
pub struct Blocks<I> {
    lines: I,
    accumulator: Option<BlockAccumulator>,
}

impl<'a, I> Iterator for Blocks<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let accumulator = self.accumulator.as_mut()?;
        for line in self.lines.by_ref() {
            if let Some(block) = accumulator.push_line(line) {
                return Some(block);
            }
        }
        self.accumulator.take().and_then(BlockAccumulator::finish)
    }
}

/// Group `lines` into candidate trace blocks.
pub fn blocks<'a, I>(lines: I) -> Blocks<I::IntoIter>
where
    I: IntoIterator<Item = &'a str>,
{
    Blocks {
        lines: lines.into_iter(),
        accumulator: Some(BlockAccumulator::new()),
    }
}
